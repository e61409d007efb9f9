#![warn(clippy::missing_inline_in_public_items)]

//! OpenGL bindings loaded at runtime.
//!
//! A [`GlApi`] is a table of every GL entry point this crate knows about
//! (core GL 1.0 through 4.6, GLES 2.0 through 3.2, and a set of commonly used
//! extensions). Make a context current, then fill the table with whatever
//! `GetProcAddress` function your windowing library offers:
//!
//! ```no_run
//! # use gl_api::{consts::*, GlApi, Feature};
//! # fn get_proc_address(_: *const u8) -> *const core::ffi::c_void { todo!() }
//! let mut gl = GlApi::new_boxed();
//! let report = unsafe { gl.load(get_proc_address) }?;
//! println!("{}, {} symbols loaded", report.version, report.resolved);
//! if gl.has_feature(Feature::GL_KHR_debug) {
//!   gl.set_tracing_debug_message_callback()?;
//! }
//! unsafe { gl.Clear(GL_COLOR_BUFFER_BIT) };
//! # Ok::<(), gl_api::GlApiError>(())
//! ```
//!
//! Without a windowing library, [`SystemGl`] opens the platform GL library
//! directly. Programs with one context can use the [`global`] table instead
//! of passing a `GlApi` around.

pub mod consts;
pub mod global;
pub mod types;

mod api;
mod config;
mod debug;
mod error;
mod extensions;
mod features;
mod functions;
mod loader;
mod system;
mod version;

#[cfg(test)]
mod registry;

pub use api::{ContextInfo, GlApi, HasLoaded};
pub use config::LoaderConfig;
pub use error::{error_string, GlApiError, GlError};
pub use extensions::ExtensionSet;
pub use features::{Feature, Features};
pub use functions::{Provider, Scope, Symbol, SYMBOLS};
pub use loader::LoadReport;
pub use system::SystemGl;
pub use version::{ApiKind, ContextProfile, GlVersion};

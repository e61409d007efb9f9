//! A process wide table, for programs with a single context.
//!
//! GL function pointers are only valid for the context they were loaded
//! with, so this is a poor fit for programs juggling several contexts. Those
//! should keep a [`GlApi`] per context instead.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::{api::GlApi, error::GlApiError, loader::LoadReport, types::c_void};

static GL: RwLock<GlApi> = RwLock::new(GlApi::new());

/// Loads the global table, see [`GlApi::load`].
///
/// ## Safety
/// Same as [`GlApi::load`].
pub unsafe fn load_global(
  get_proc_address: impl FnMut(*const u8) -> *const c_void,
) -> Result<LoadReport, GlApiError> {
  GL.write().unwrap_or_else(PoisonError::into_inner).load(get_proc_address)
}

/// Clears the global table.
pub fn unload_global() {
  GL.write().unwrap_or_else(PoisonError::into_inner).unload();
}

/// Read access to the global table.
///
/// Holding the guard blocks [`load_global`] and [`unload_global`], so don't
/// keep it across frames. Calling either of them on the same thread while the
/// guard is alive deadlocks, since they wait for the guard to drop:
///
/// ```no_run
/// let guard = gl_api::global::gl();
/// gl_api::global::unload_global(); // never returns
/// # drop(guard);
/// ```
#[inline]
pub fn gl() -> RwLockReadGuard<'static, GlApi> {
  GL.read().unwrap_or_else(PoisonError::into_inner)
}

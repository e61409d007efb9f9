//! The GL constant table.
//!
//! Everything in `gl_constants` is re-exported. The names below are the ones
//! this crate queries itself, plus a few extension values that are handy next
//! to them. Local declarations take priority over the glob re-export.

use crate::types::{GLbitfield, GLenum};

pub use gl_constants::*;

// string queries
pub const GL_VENDOR: GLenum = 0x1F00;
pub const GL_RENDERER: GLenum = 0x1F01;
pub const GL_VERSION: GLenum = 0x1F02;
pub const GL_EXTENSIONS: GLenum = 0x1F03;
pub const GL_SHADING_LANGUAGE_VERSION: GLenum = 0x8B8C;

// integer queries
pub const GL_MAJOR_VERSION: GLenum = 0x821B;
pub const GL_MINOR_VERSION: GLenum = 0x821C;
pub const GL_NUM_EXTENSIONS: GLenum = 0x821D;
pub const GL_CONTEXT_FLAGS: GLenum = 0x821E;
pub const GL_CONTEXT_PROFILE_MASK: GLenum = 0x9126;

pub const GL_CONTEXT_CORE_PROFILE_BIT: GLbitfield = 0x0000_0001;
pub const GL_CONTEXT_COMPATIBILITY_PROFILE_BIT: GLbitfield = 0x0000_0002;
pub const GL_CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT: GLbitfield = 0x0000_0001;
pub const GL_CONTEXT_FLAG_DEBUG_BIT: GLbitfield = 0x0000_0002;

// error codes
pub const GL_NO_ERROR: GLenum = 0;
pub const GL_INVALID_ENUM: GLenum = 0x0500;
pub const GL_INVALID_VALUE: GLenum = 0x0501;
pub const GL_INVALID_OPERATION: GLenum = 0x0502;
pub const GL_STACK_OVERFLOW: GLenum = 0x0503;
pub const GL_STACK_UNDERFLOW: GLenum = 0x0504;
pub const GL_OUT_OF_MEMORY: GLenum = 0x0505;
pub const GL_INVALID_FRAMEBUFFER_OPERATION: GLenum = 0x0506;
pub const GL_CONTEXT_LOST: GLenum = 0x0507;
/// From the imaging subset, still reported by `gluErrorString`.
pub const GL_TABLE_TOO_LARGE: GLenum = 0x8031;

// debug output
pub const GL_DEBUG_OUTPUT: GLenum = 0x92E0;
pub const GL_DEBUG_OUTPUT_SYNCHRONOUS: GLenum = 0x8242;

// extensions
pub const GL_TEXTURE_MAX_ANISOTROPY_EXT: GLenum = 0x84FE;
pub const GL_MAX_TEXTURE_MAX_ANISOTROPY_EXT: GLenum = 0x84FF;
pub const GL_BUFFER_GPU_ADDRESS_NV: GLenum = 0x8F1D;
pub const GL_CONSERVATIVE_RASTERIZATION_NV: GLenum = 0x9346;

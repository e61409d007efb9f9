//! The GL type aliases.
//!
//! Types that `gl_types` already provides are re-exported from there, the
//! rest are declared here with the sizes the GL registry gives them.

#![allow(non_camel_case_types)]

pub use core::ffi::c_void;
pub use gl_types::{
  GLbitfield, GLboolean, GLchar, GLenum, GLint, GLsizei, GLuint, GLDEBUGPROC,
};

pub type GLvoid = c_void;
pub type GLbyte = i8;
pub type GLubyte = u8;
pub type GLshort = i16;
pub type GLushort = u16;
pub type GLfloat = f32;
pub type GLclampf = f32;
pub type GLdouble = f64;
pub type GLclampd = f64;
pub type GLhalf = u16;
pub type GLfixed = i32;
pub type GLintptr = isize;
pub type GLsizeiptr = isize;
pub type GLint64 = i64;
pub type GLuint64 = u64;
pub type GLint64EXT = i64;
pub type GLuint64EXT = u64;

/// Opaque driver sync object.
#[repr(C)]
pub struct __GLsync {
  _priv: [u8; 0],
}
pub type GLsync = *const __GLsync;

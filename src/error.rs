use thiserror::Error;

use crate::{api::GlApi, consts::*, types::GLenum, version::GlVersion};

/// `glGetError` is read at most this many times per drain.
const MAX_DRAINED_ERRORS: usize = 32;

/// The ways loading or using the table can fail.
#[derive(Debug, Error)]
pub enum GlApiError {
  #[error("glGetString(GL_VERSION) returned null, is a context current?")]
  NoCurrentContext,
  #[error("the baseline symbol `{0}` could not be loaded")]
  MissingBaselineSymbol(&'static str),
  #[error("could not parse the GL version string {0:?}")]
  MalformedVersion(String),
  #[error("the context provides {found} but {required} is required")]
  UnsupportedVersion { found: GlVersion, required: GlVersion },
  #[error("no loaded entry point can provide `{0}`")]
  FunctionUnavailable(&'static str),
  #[error("could not open a system GL library (tried {tried:?})")]
  LibraryNotFound {
    tried: Vec<String>,
    #[source]
    source: libloading::Error,
  },
  #[error("there is no known system GL library for this platform")]
  UnsupportedPlatform,
  #[error(transparent)]
  Gl(#[from] GlError),
}

/// A non-zero value from `glGetError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GlError {
  #[error("invalid enumerant")]
  InvalidEnum,
  #[error("invalid value")]
  InvalidValue,
  #[error("invalid operation")]
  InvalidOperation,
  #[error("stack overflow")]
  StackOverflow,
  #[error("stack underflow")]
  StackUnderflow,
  #[error("out of memory")]
  OutOfMemory,
  #[error("invalid framebuffer operation")]
  InvalidFramebufferOperation,
  #[error("context lost")]
  ContextLost,
  #[error("table too large")]
  TableTooLarge,
  #[error("unknown GL error 0x{0:04X}")]
  Unknown(GLenum),
}
impl GlError {
  /// `None` for `GL_NO_ERROR`.
  #[inline]
  #[must_use]
  pub const fn from_code(code: GLenum) -> Option<Self> {
    Some(match code {
      GL_NO_ERROR => return None,
      GL_INVALID_ENUM => Self::InvalidEnum,
      GL_INVALID_VALUE => Self::InvalidValue,
      GL_INVALID_OPERATION => Self::InvalidOperation,
      GL_STACK_OVERFLOW => Self::StackOverflow,
      GL_STACK_UNDERFLOW => Self::StackUnderflow,
      GL_OUT_OF_MEMORY => Self::OutOfMemory,
      GL_INVALID_FRAMEBUFFER_OPERATION => Self::InvalidFramebufferOperation,
      GL_CONTEXT_LOST => Self::ContextLost,
      GL_TABLE_TOO_LARGE => Self::TableTooLarge,
      other => Self::Unknown(other),
    })
  }

  #[inline]
  #[must_use]
  pub const fn code(self) -> GLenum {
    match self {
      Self::InvalidEnum => GL_INVALID_ENUM,
      Self::InvalidValue => GL_INVALID_VALUE,
      Self::InvalidOperation => GL_INVALID_OPERATION,
      Self::StackOverflow => GL_STACK_OVERFLOW,
      Self::StackUnderflow => GL_STACK_UNDERFLOW,
      Self::OutOfMemory => GL_OUT_OF_MEMORY,
      Self::InvalidFramebufferOperation => GL_INVALID_FRAMEBUFFER_OPERATION,
      Self::ContextLost => GL_CONTEXT_LOST,
      Self::TableTooLarge => GL_TABLE_TOO_LARGE,
      Self::Unknown(code) => code,
    }
  }
}

/// The description `gluErrorString` gives for a GL error code.
///
/// Returns `None` for codes that aren't GL errors.
#[must_use]
pub const fn error_string(code: GLenum) -> Option<&'static str> {
  Some(match code {
    GL_NO_ERROR => "no error",
    GL_INVALID_ENUM => "invalid enumerant",
    GL_INVALID_VALUE => "invalid value",
    GL_INVALID_OPERATION => "invalid operation",
    GL_STACK_OVERFLOW => "stack overflow",
    GL_STACK_UNDERFLOW => "stack underflow",
    GL_OUT_OF_MEMORY => "out of memory",
    GL_TABLE_TOO_LARGE => "table too large",
    GL_INVALID_FRAMEBUFFER_OPERATION => "invalid framebuffer operation",
    GL_CONTEXT_LOST => "context lost",
    _ => return None,
  })
}

impl GlApi {
  /// Pops one error from the driver's queue.
  ///
  /// ## Safety
  /// * The context this table was loaded for must be current.
  #[inline]
  pub unsafe fn get_error(&self) -> Option<GlError> {
    GlError::from_code(self.GetError())
  }

  /// Pops errors until the queue is empty.
  ///
  /// A lost context can report `GL_CONTEXT_LOST` forever, so the drain stops
  /// after that error or after a bounded number of reads.
  ///
  /// ## Safety
  /// * The context this table was loaded for must be current.
  #[inline]
  pub unsafe fn drain_errors(&self) -> Vec<GlError> {
    let mut errors = Vec::new();
    while errors.len() < MAX_DRAINED_ERRORS {
      match self.get_error() {
        None => break,
        Some(err) => {
          errors.push(err);
          if err == GlError::ContextLost {
            break;
          }
        }
      }
    }
    errors
  }
}

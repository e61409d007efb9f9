use core::{ffi::CStr, ptr::null, slice::from_raw_parts as slice_from_raw_parts};

use tracing::{debug, error, info, warn};

use crate::{api::GlApi, consts::*, error::GlApiError, types::*};

fn source_name(source: GLenum) -> &'static str {
  match source {
    GL_DEBUG_SOURCE_API => "API",
    GL_DEBUG_SOURCE_WINDOW_SYSTEM => "Window",
    GL_DEBUG_SOURCE_SHADER_COMPILER => "ShaderCompiler",
    GL_DEBUG_SOURCE_THIRD_PARTY => "3rdParty",
    GL_DEBUG_SOURCE_APPLICATION => "App",
    _ => "OtherSrc",
  }
}

fn type_name(ty: GLenum) -> &'static str {
  match ty {
    GL_DEBUG_TYPE_ERROR => "Error",
    GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated",
    GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined",
    GL_DEBUG_TYPE_PORTABILITY => "Portability",
    GL_DEBUG_TYPE_PERFORMANCE => "Performance",
    GL_DEBUG_TYPE_MARKER => "Marker",
    _ => "OtherTy",
  }
}

/// Reads the message text. A negative length means NUL-terminated.
unsafe fn message_text(message: *const GLchar, length: GLsizei) -> String {
  if message.is_null() {
    return String::new();
  }
  match usize::try_from(length) {
    Ok(len) => {
      let bytes = slice_from_raw_parts(message.cast::<u8>(), len);
      String::from_utf8_lossy(bytes).into_owned()
    }
    Err(_) => CStr::from_ptr(message.cast()).to_string_lossy().into_owned(),
  }
}

/// Forwards driver debug messages to `tracing`, at a level picked from the
/// message severity.
unsafe extern "system" fn tracing_debug_message_callback(
  source: GLenum, ty: GLenum, id: GLuint, severity: GLenum, length: GLsizei,
  message: *const GLchar, _user_data: *const c_void,
) {
  // assert the correct signature
  const _: GLDEBUGPROC = Some(tracing_debug_message_callback);
  //
  let source = source_name(source);
  let ty = type_name(ty);
  let message = message_text(message, length);
  match severity {
    GL_DEBUG_SEVERITY_HIGH => error!(source, ty, id, "{message}"),
    GL_DEBUG_SEVERITY_MEDIUM => warn!(source, ty, id, "{message}"),
    GL_DEBUG_SEVERITY_LOW => info!(source, ty, id, "{message}"),
    _ => debug!(source, ty, id, "{message}"),
  }
}

impl GlApi {
  /// Routes the context's debug output into `tracing`.
  ///
  /// Uses `glDebugMessageCallback`, or the KHR or ARB entry point when the
  /// core one isn't loaded. The context usually needs to be a debug context
  /// for the driver to send anything.
  ///
  /// ## Failure
  /// * [`GlApiError::FunctionUnavailable`] if none of the three loaded.
  #[inline]
  pub fn set_tracing_debug_message_callback(&self) -> Result<(), GlApiError> {
    let callback: GLDEBUGPROC = Some(tracing_debug_message_callback);
    if self.has_loaded().DebugMessageCallback() {
      unsafe { self.DebugMessageCallback(callback, null()) };
    } else if self.has_loaded().DebugMessageCallbackKHR() {
      // GLES uses an alternate name but the extension operates the same.
      unsafe { self.DebugMessageCallbackKHR(callback, null()) };
    } else if self.has_loaded().DebugMessageCallbackARB() {
      unsafe { self.DebugMessageCallbackARB(callback, null()) };
    } else {
      return Err(GlApiError::FunctionUnavailable("glDebugMessageCallback"));
    }
    debug!("installed the tracing debug message callback");
    Ok(())
  }

  /// Turns on `GL_DEBUG_OUTPUT`, and `GL_DEBUG_OUTPUT_SYNCHRONOUS` if asked.
  ///
  /// Synchronous output makes the callback run inside the GL call that
  /// raised the message, so a backtrace taken there points at the culprit.
  ///
  /// ## Safety
  /// * The context this table was loaded for must be current.
  #[inline]
  pub unsafe fn enable_debug_output(&self, synchronous: bool) {
    self.Enable(GL_DEBUG_OUTPUT);
    if synchronous {
      self.Enable(GL_DEBUG_OUTPUT_SYNCHRONOUS);
    }
  }
}

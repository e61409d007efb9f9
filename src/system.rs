use core::ffi::CStr;
use std::ffi::OsStr;

use libloading::Library;
use tracing::{debug, warn};

use crate::{error::GlApiError, loader::is_valid_proc_address, types::c_void};

#[cfg(all(unix, not(target_os = "macos")))]
const CANDIDATES: &[&str] = &["libGL.so.1", "libGL.so"];
#[cfg(windows)]
const CANDIDATES: &[&str] = &["opengl32.dll"];
#[cfg(target_os = "macos")]
const CANDIDATES: &[&str] = &["/System/Library/Frameworks/OpenGL.framework/OpenGL"];
#[cfg(not(any(unix, windows)))]
const CANDIDATES: &[&str] = &[];

/// The platform's extension entry point resolver, if it has one.
#[cfg(all(unix, not(target_os = "macos")))]
const RESOLVER: Option<&[u8]> = Some(b"glXGetProcAddressARB\0");
#[cfg(windows)]
const RESOLVER: Option<&[u8]> = Some(b"wglGetProcAddress\0");
#[cfg(not(any(all(unix, not(target_os = "macos")), windows)))]
const RESOLVER: Option<&[u8]> = None;

type ResolverFn = unsafe extern "system" fn(*const u8) -> *const c_void;

/// The system GL library, for when no windowing library is around to hand
/// out entry points.
///
/// ```no_run
/// # use gl_api::{GlApi, SystemGl};
/// let system = SystemGl::open()?;
/// let mut gl = GlApi::new_boxed();
/// // with a context made current by other means
/// unsafe { gl.load(|name| system.get_proc_address(name)) }?;
/// # Ok::<(), gl_api::GlApiError>(())
/// ```
#[derive(Debug)]
pub struct SystemGl {
  library: Library,
  resolver: Option<ResolverFn>,
}
impl SystemGl {
  /// Opens the first of the platform's usual library names that loads.
  #[inline]
  pub fn open() -> Result<Self, GlApiError> {
    if CANDIDATES.is_empty() {
      return Err(GlApiError::UnsupportedPlatform);
    }
    Self::open_from(CANDIDATES)
  }

  /// Opens the first of `paths` that loads. Each is a file name or a path.
  #[inline]
  pub fn open_from<I, P>(paths: I) -> Result<Self, GlApiError>
  where
    I: IntoIterator<Item = P>,
    P: AsRef<OsStr>,
  {
    let mut tried = Vec::new();
    let mut last_err = None;
    for path in paths {
      let name = path.as_ref();
      match unsafe { Library::new(name) } {
        Ok(library) => {
          let resolver = RESOLVER.and_then(|symbol| unsafe {
            library.get::<ResolverFn>(symbol).ok().map(|f| *f)
          });
          debug!(
            library = %name.to_string_lossy(),
            resolver = resolver.is_some(),
            "opened the system GL library"
          );
          return Ok(Self { library, resolver });
        }
        Err(err) => {
          debug!(library = %name.to_string_lossy(), %err, "could not open");
          tried.push(name.to_string_lossy().into_owned());
          last_err = Some(err);
        }
      }
    }
    match last_err {
      Some(source) => {
        warn!(?tried, "no system GL library could be opened");
        Err(GlApiError::LibraryNotFound { tried, source })
      }
      None => Err(GlApiError::UnsupportedPlatform),
    }
  }

  /// If the platform resolver (`glXGetProcAddressARB`, `wglGetProcAddress`)
  /// was found in the library.
  #[inline]
  #[must_use]
  pub fn has_resolver(&self) -> bool {
    self.resolver.is_some()
  }

  /// Looks up a NUL-terminated symbol name, in the shape
  /// [`GlApi::load`](crate::GlApi::load) wants.
  ///
  /// The platform resolver is asked first. Names it doesn't know are looked
  /// up as plain library exports, which is where WGL keeps the GL 1.1 entry
  /// points.
  ///
  /// ## Safety
  /// * `name` must point to a NUL-terminated string.
  /// * With WGL a context must be current, and the result is only valid for
  ///   contexts with the same pixel format.
  #[inline]
  pub unsafe fn get_proc_address(&self, name: *const u8) -> *const c_void {
    if let Some(resolver) = self.resolver {
      let p = resolver(name);
      if is_valid_proc_address(p) {
        return p;
      }
    }
    let name = CStr::from_ptr(name.cast());
    match self.library.get::<*const c_void>(name.to_bytes_with_nul()) {
      Ok(symbol) => *symbol,
      Err(_) => core::ptr::null(),
    }
  }
}

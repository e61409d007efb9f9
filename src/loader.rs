use core::{ffi::CStr, ptr::null};

use tracing::{debug, trace, warn};

use crate::{
  api::{ContextInfo, GlApi},
  config::LoaderConfig,
  consts::*,
  error::GlApiError,
  extensions::ExtensionSet,
  features::Features,
  functions::{FnTable, SYMBOLS},
  types::*,
  version::{ApiKind, ContextProfile, GlVersion},
};

/// What a successful load found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
  pub version: GlVersion,
  pub profile: ContextProfile,
  pub extension_count: usize,
  /// Number of slots that loaded.
  pub resolved: usize,
  /// Symbols that the context's features and profile provide but that did
  /// not load.
  pub missing: Vec<&'static str>,
}
impl LoadReport {
  /// If every entry point of every supported feature loaded.
  #[inline]
  #[must_use]
  pub fn is_complete(&self) -> bool {
    self.missing.is_empty()
  }
}

/// Some platforms hand back small sentinel values instead of null when a
/// lookup fails (WGL uses 1, 2, 3 and -1).
#[inline]
#[must_use]
pub(crate) fn is_valid_proc_address(p: *const c_void) -> bool {
  !matches!(p as isize, -1..=3)
}

/// Looks up `name`, then each of `aliases`. All are NUL-terminated.
fn resolve_symbol(
  get_proc_address: &mut dyn FnMut(*const u8) -> *const c_void,
  name: &'static str, aliases: &[&'static str],
) -> *const c_void {
  let p = get_proc_address(name.as_ptr());
  if is_valid_proc_address(p) {
    return p;
  }
  for alias in aliases {
    let p = get_proc_address(alias.as_ptr());
    if is_valid_proc_address(p) {
      trace!(
        symbol = name.trim_end_matches('\0'),
        alias = alias.trim_end_matches('\0'),
        "resolved through an alias"
      );
      return p;
    }
  }
  null()
}

/// Copies out a string the driver returned, if any.
unsafe fn string_from_gl(p: *const GLubyte) -> Option<String> {
  if p.is_null() {
    None
  } else {
    Some(CStr::from_ptr(p.cast()).to_string_lossy().into_owned())
  }
}

impl GlApi {
  /// Loads the table for the current context with the default
  /// [`LoaderConfig`].
  ///
  /// `get_proc_address` gets NUL-terminated symbol names and returns the
  /// address or null, the shape of `SDL_GL_GetProcAddress` and friends.
  ///
  /// The table is unloaded first, so calling this again (for example after
  /// making a different context current) never keeps stale pointers. On
  /// error the table is left unloaded.
  ///
  /// ## Safety
  /// * A GL context must be current on this thread.
  /// * Every non-null address `get_proc_address` returns must be the entry
  ///   point of that name, for that context.
  #[inline]
  pub unsafe fn load(
    &mut self, get_proc_address: impl FnMut(*const u8) -> *const c_void,
  ) -> Result<LoadReport, GlApiError> {
    self.load_with_config(get_proc_address, &LoaderConfig::default())
  }

  /// Like [`load`](Self::load), with options.
  ///
  /// ## Safety
  /// Same as [`load`](Self::load).
  #[inline]
  pub unsafe fn load_with_config(
    &mut self, mut get_proc_address: impl FnMut(*const u8) -> *const c_void,
    config: &LoaderConfig,
  ) -> Result<LoadReport, GlApiError> {
    self.unload();
    match self.load_inner(&mut get_proc_address, config) {
      Ok(report) => {
        debug!(
          version = %report.version,
          profile = %report.profile,
          extensions = report.extension_count,
          resolved = report.resolved,
          missing = report.missing.len(),
          "loaded the GL api"
        );
        Ok(report)
      }
      Err(err) => {
        warn!(%err, "could not load the GL api");
        self.unload();
        Err(err)
      }
    }
  }

  unsafe fn load_inner(
    &mut self, get_proc_address: &mut dyn FnMut(*const u8) -> *const c_void,
    config: &LoaderConfig,
  ) -> Result<LoadReport, GlApiError> {
    let use_aliases = config.use_aliases;
    let mut resolve = |name: &'static str, aliases: &'static [&'static str]| {
      let aliases: &[&'static str] = if use_aliases { aliases } else { &[] };
      resolve_symbol(&mut *get_proc_address, name, aliases)
    };
    self.fns.resolve(&mut resolve);

    let has = self.has_loaded();
    for (name, loaded) in [
      ("glGetString", has.GetString()),
      ("glGetIntegerv", has.GetIntegerv()),
      ("glGetError", has.GetError()),
    ] {
      if !loaded {
        return Err(GlApiError::MissingBaselineSymbol(name));
      }
    }

    let version_string =
      self.get_string(GL_VERSION).ok_or(GlApiError::NoCurrentContext)?;
    let version = GlVersion::parse(&version_string)?;
    if let Some(required) = config.min_version {
      if !version.satisfies(required) {
        return Err(GlApiError::UnsupportedVersion { found: version, required });
      }
    }

    let extensions = if config.query_extensions {
      self.query_extensions(version)
    } else {
      ExtensionSet::new()
    };
    let profile = self.query_profile(version, &extensions);
    let info = ContextInfo {
      vendor: self.get_string(GL_VENDOR).unwrap_or_default(),
      renderer: self.get_string(GL_RENDERER).unwrap_or_default(),
      version: version_string,
      shading_language_version: self
        .get_string(GL_SHADING_LANGUAGE_VERSION)
        .unwrap_or_default(),
    };
    // the queries above may have raised errors (no GLSL on 1.x, no legacy
    // extension string in a core profile, no profile mask before 3.2),
    // callers shouldn't see those
    let stale = self.drain_errors();
    if !stale.is_empty() {
      trace!(?stale, "cleared errors raised while querying the context");
    }

    self.features = Features::detect(version, &extensions);
    self.version = Some(version);
    self.profile = Some(profile);
    self.extensions = extensions;
    self.info = Some(info);

    let mut resolved = 0;
    let mut missing = Vec::new();
    for (symbol, loaded) in SYMBOLS.iter().zip(self.fns.loaded()) {
      if loaded {
        resolved += 1;
      } else if symbol.is_expected(&self.features, profile) {
        warn!(symbol = symbol.name, "a supported entry point did not load");
        missing.push(symbol.name);
      }
    }

    Ok(LoadReport {
      version,
      profile,
      extension_count: self.extensions.len(),
      resolved,
      missing,
    })
  }

  /// Resets every slot to null and every flag to false.
  #[inline]
  pub fn unload(&mut self) {
    self.fns = FnTable::EMPTY;
    self.features = Features::NONE;
    self.version = None;
    self.profile = None;
    self.extensions.clear();
    self.info = None;
  }

  /// `glGetString`, copied into an owned string.
  ///
  /// ## Safety
  /// * The context this table was loaded for must be current.
  #[inline]
  pub unsafe fn get_string(&self, name: GLenum) -> Option<String> {
    string_from_gl(self.GetString(name))
  }

  unsafe fn query_profile(
    &self, version: GlVersion, extensions: &ExtensionSet,
  ) -> ContextProfile {
    let mask = if version.api == ApiKind::Desktop && version.at_least(3, 2) {
      let mut mask: GLint = 0;
      self.GetIntegerv(GL_CONTEXT_PROFILE_MASK, &mut mask);
      Some(mask as GLbitfield)
    } else {
      None
    };
    ContextProfile::classify(
      version,
      mask,
      extensions.contains("GL_ARB_compatibility"),
    )
  }

  unsafe fn query_extensions(&self, version: GlVersion) -> ExtensionSet {
    let mut set = ExtensionSet::new();
    if version.has_indexed_extensions() && self.has_loaded().GetStringi() {
      let mut count: GLint = 0;
      self.GetIntegerv(GL_NUM_EXTENSIONS, &mut count);
      for i in 0..GLuint::try_from(count).unwrap_or(0) {
        if let Some(name) = string_from_gl(self.GetStringi(GL_EXTENSIONS, i)) {
          set.insert(&name);
        }
      }
    }
    if set.is_empty() {
      if let Some(s) = self.get_string(GL_EXTENSIONS) {
        set = ExtensionSet::from_extension_string(&s);
      }
    }
    set
  }
}

use core::fmt;

use crate::{
  consts::{GL_CONTEXT_COMPATIBILITY_PROFILE_BIT, GL_CONTEXT_CORE_PROFILE_BIT},
  error::GlApiError,
  types::GLbitfield,
};

/// Which GL API a context speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiKind {
  /// Desktop GL.
  Desktop,
  /// GL ES.
  Embedded,
}

/// The profile of a context, which decides if the commands a core profile
/// removed (the fixed-function pipeline among them) are there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextProfile {
  Core,
  Compatibility,
  /// Any GL ES context.
  Embedded,
}
impl ContextProfile {
  /// Works out the profile of a context.
  ///
  /// Versions before 3.1 have no profiles and keep everything. A 3.1 context
  /// keeps the removed commands when it advertises `GL_ARB_compatibility`.
  /// From 3.2 on `profile_mask` is the `GL_CONTEXT_PROFILE_MASK` value; a
  /// mask with neither bit set falls back to the extension.
  #[must_use]
  pub fn classify(
    version: GlVersion, profile_mask: Option<GLbitfield>,
    has_arb_compatibility: bool,
  ) -> Self {
    if version.api == ApiKind::Embedded {
      return Self::Embedded;
    }
    if !version.at_least(3, 1) {
      return Self::Compatibility;
    }
    let mask = if version.at_least(3, 2) { profile_mask.unwrap_or(0) } else { 0 };
    if mask & GL_CONTEXT_COMPATIBILITY_PROFILE_BIT != 0 {
      Self::Compatibility
    } else if mask & GL_CONTEXT_CORE_PROFILE_BIT != 0 {
      Self::Core
    } else if has_arb_compatibility {
      Self::Compatibility
    } else {
      Self::Core
    }
  }
}
impl fmt::Display for ContextProfile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Core => "core",
      Self::Compatibility => "compatibility",
      Self::Embedded => "ES",
    })
  }
}

/// A GL context version, as reported by `glGetString(GL_VERSION)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlVersion {
  pub api: ApiKind,
  pub major: u8,
  pub minor: u8,
}
impl GlVersion {
  #[inline]
  #[must_use]
  pub const fn desktop(major: u8, minor: u8) -> Self {
    Self { api: ApiKind::Desktop, major, minor }
  }
  #[inline]
  #[must_use]
  pub const fn es(major: u8, minor: u8) -> Self {
    Self { api: ApiKind::Embedded, major, minor }
  }

  /// Parses a driver version string.
  ///
  /// Desktop drivers report `<major>.<minor>[.<release>][ <vendor info>]`,
  /// for example `4.6.0 NVIDIA 535.54.03`. ES drivers prefix that with
  /// `OpenGL ES ` (or the ES 1.x `OpenGL ES-CM ` / `OpenGL ES-CL ` forms).
  #[inline]
  pub fn parse(s: &str) -> Result<Self, GlApiError> {
    let malformed = || GlApiError::MalformedVersion(s.to_owned());
    let trimmed = s.trim_start();
    let (api, rest) = ["OpenGL ES-CM ", "OpenGL ES-CL ", "OpenGL ES "]
      .iter()
      .find_map(|prefix| trimmed.strip_prefix(*prefix))
      .map(|rest| (ApiKind::Embedded, rest))
      .unwrap_or((ApiKind::Desktop, trimmed));
    let number = rest.split_whitespace().next().ok_or_else(malformed)?;
    let mut parts = number.split('.');
    let major = parts
      .next()
      .and_then(|p| p.parse::<u8>().ok())
      .ok_or_else(malformed)?;
    // some drivers glue vendor text right onto the minor number ("3.3Mesa")
    let minor = parts
      .next()
      .map(|p| {
        let end = p.find(|c: char| !c.is_ascii_digit()).unwrap_or(p.len());
        &p[..end]
      })
      .and_then(|p| p.parse::<u8>().ok())
      .ok_or_else(malformed)?;
    if major == 0 {
      return Err(malformed());
    }
    Ok(Self { api, major, minor })
  }

  /// If this version is at least `major.minor`, ignoring the API kind.
  #[inline]
  #[must_use]
  pub const fn at_least(self, major: u8, minor: u8) -> bool {
    self.major > major || (self.major == major && self.minor >= minor)
  }

  /// If a context of this version can stand in for `required`.
  ///
  /// Desktop and ES versions never satisfy each other.
  #[inline]
  #[must_use]
  pub const fn satisfies(self, required: GlVersion) -> bool {
    matches!(
      (self.api, required.api),
      (ApiKind::Desktop, ApiKind::Desktop)
        | (ApiKind::Embedded, ApiKind::Embedded)
    ) && self.at_least(required.major, required.minor)
  }

  /// If the extension list should be read one name at a time with
  /// `glGetStringi`. Core profiles reject `glGetString(GL_EXTENSIONS)`.
  #[inline]
  #[must_use]
  pub const fn has_indexed_extensions(self) -> bool {
    self.major >= 3
  }
}
impl fmt::Display for GlVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.api {
      ApiKind::Desktop => write!(f, "GL {}.{}", self.major, self.minor),
      ApiKind::Embedded => write!(f, "GL ES {}.{}", self.major, self.minor),
    }
  }
}

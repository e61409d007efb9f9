use core::fmt;

use crate::{
  extensions::ExtensionSet,
  features::{Feature, Features},
  functions::{FnTable, Symbol, SYMBOLS},
  version::{ContextProfile, GlVersion},
};

/// Strings the driver reported about the context at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextInfo {
  pub vendor: String,
  pub renderer: String,
  pub version: String,
  pub shading_language_version: String,
}

/// The GL API of one context.
///
/// A new table has every slot null and every flag cleared. Call
/// [`load`](GlApi::load) with the context current to fill it in. Entry points
/// are `unsafe` methods named after the GL symbol without its `gl` prefix;
/// calling one whose slot is null panics. Check [`has_loaded`](GlApi::has_loaded)
/// or the [`features`](GlApi::features) first for anything optional.
///
/// The table is large, so [`new_boxed`](GlApi::new_boxed) is usually the
/// better constructor.
pub struct GlApi {
  pub(crate) fns: FnTable,
  pub(crate) features: Features,
  pub(crate) version: Option<GlVersion>,
  pub(crate) profile: Option<ContextProfile>,
  pub(crate) extensions: ExtensionSet,
  pub(crate) info: Option<ContextInfo>,
}
impl GlApi {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      fns: FnTable::EMPTY,
      features: Features::NONE,
      version: None,
      profile: None,
      extensions: ExtensionSet::new(),
      info: None,
    }
  }
  #[inline]
  #[must_use]
  pub fn new_boxed() -> Box<Self> {
    Box::new(Self::new())
  }

  /// Per-slot load checks, named like the entry points.
  ///
  /// ```no_run
  /// # let gl = gl_api::GlApi::new();
  /// if gl.has_loaded().DebugMessageCallback() {
  ///   // safe to call gl.DebugMessageCallback(..)
  /// }
  /// ```
  #[inline]
  #[must_use]
  pub fn has_loaded(&self) -> HasLoaded<'_> {
    HasLoaded(self)
  }

  /// If a load has succeeded since the table was created or last unloaded.
  #[inline]
  #[must_use]
  pub fn is_loaded(&self) -> bool {
    self.version.is_some()
  }

  /// The context version found by the last load.
  #[inline]
  #[must_use]
  pub fn version(&self) -> Option<GlVersion> {
    self.version
  }

  /// The context profile found by the last load.
  #[inline]
  #[must_use]
  pub fn profile(&self) -> Option<ContextProfile> {
    self.profile
  }

  #[inline]
  #[must_use]
  pub fn features(&self) -> &Features {
    &self.features
  }

  #[inline]
  #[must_use]
  pub fn has_feature(&self, feature: Feature) -> bool {
    self.features.has(feature)
  }

  /// All extensions the driver advertised, tracked by a [`Feature`] or not.
  #[inline]
  #[must_use]
  pub fn extensions(&self) -> &ExtensionSet {
    &self.extensions
  }

  #[inline]
  #[must_use]
  pub fn has_extension(&self, name: &str) -> bool {
    self.extensions.contains(name)
  }

  #[inline]
  #[must_use]
  pub fn context_info(&self) -> Option<&ContextInfo> {
    self.info.as_ref()
  }

  /// Every symbol of the table along with whether its slot is loaded.
  #[inline]
  pub fn symbols(&self) -> impl Iterator<Item = (&'static Symbol, bool)> {
    SYMBOLS.iter().zip(self.fns.loaded())
  }

  /// How many slots are currently loaded.
  #[inline]
  #[must_use]
  pub fn loaded_symbol_count(&self) -> usize {
    self.fns.loaded().iter().filter(|loaded| **loaded).count()
  }
}
impl Default for GlApi {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}
impl fmt::Debug for GlApi {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GlApi")
      .field("version", &self.version)
      .field("profile", &self.profile)
      .field("loaded_symbols", &self.loaded_symbol_count())
      .field("extensions", &self.extensions.len())
      .field("info", &self.info)
      .finish_non_exhaustive()
  }
}

/// Returned by [`GlApi::has_loaded`].
#[derive(Clone, Copy)]
pub struct HasLoaded<'a>(pub(crate) &'a GlApi);

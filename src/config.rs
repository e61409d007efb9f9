use crate::version::GlVersion;

/// Options for [`GlApi::load_with_config`](crate::GlApi::load_with_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
  /// Fail the load when the context is older than this (or is of the other
  /// API kind). `None` accepts any context that passes the baseline check.
  pub min_version: Option<GlVersion>,
  /// When `glFoo` doesn't resolve, try the other names the registry lists
  /// for the same command ([`Symbol::aliases`](crate::Symbol::aliases)),
  /// such as the `ARB` or `EXT` name of a promoted extension.
  pub use_aliases: bool,
  /// Read the extension list. With this off every extension flag stays
  /// `false`, which is occasionally useful to test fallback paths.
  pub query_extensions: bool,
}
impl LoaderConfig {
  #[inline]
  #[must_use]
  pub fn with_min_version(mut self, version: GlVersion) -> Self {
    self.min_version = Some(version);
    self
  }
  /// Only ever look up each symbol's own name.
  #[inline]
  #[must_use]
  pub fn without_aliases(mut self) -> Self {
    self.use_aliases = false;
    self
  }
  #[inline]
  #[must_use]
  pub fn without_extension_query(mut self) -> Self {
    self.query_extensions = false;
    self
  }
}
impl Default for LoaderConfig {
  #[inline]
  fn default() -> Self {
    Self { min_version: None, use_aliases: true, query_extensions: true }
  }
}

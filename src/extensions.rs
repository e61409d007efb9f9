use std::collections::BTreeSet;

/// The extension names a driver advertised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<Box<str>>);
impl ExtensionSet {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self(BTreeSet::new())
  }

  /// Splits a legacy `glGetString(GL_EXTENSIONS)` string.
  #[inline]
  #[must_use]
  pub fn from_extension_string(s: &str) -> Self {
    s.split_ascii_whitespace().collect()
  }

  #[inline]
  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.0.contains(name)
  }

  #[inline]
  pub fn insert(&mut self, name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && self.0.insert(name.into())
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Names in sorted order.
  #[inline]
  pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
    self.0.iter().map(|s| &**s)
  }

  #[inline]
  pub fn clear(&mut self) {
    self.0.clear()
  }
}
impl<'s> FromIterator<&'s str> for ExtensionSet {
  fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
    let mut set = Self::new();
    for name in iter {
      set.insert(name);
    }
    set
  }
}

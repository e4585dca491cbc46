use std::collections::BTreeMap;

use serde::Serialize;

/// Whether a slot/file pair may be cached or persisted.
pub fn is_valid_entry(slot: &str, file: &str) -> bool {
  !slot.is_empty() && !file.is_empty()
}

/// Read-only snapshot of one model's slot -> file mapping.
///
/// Detached from the store: later writes through the store are not reflected
/// here, and nothing done with this value reaches the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SlotMapping {
  entries: BTreeMap<String, String>,
}

impl SlotMapping {
  pub fn new() -> Self {
    Self::default()
  }

  /// File mapped to `slot`, if any.
  pub fn get(&self, slot: &str) -> Option<&str> {
    self.entries.get(slot).map(String::as_str)
  }

  pub fn contains(&self, slot: &str) -> bool {
    self.entries.contains_key(slot)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Entries in slot-name order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// Owned copy of the entries, e.g. as the starting point of an edit.
  pub fn to_map(&self) -> BTreeMap<String, String> {
    self.entries.clone()
  }
}

impl<K, V> FromIterator<(K, V)> for SlotMapping
where
  K: Into<String>,
  V: Into<String>,
{
  /// Collects pairs, dropping any with an empty slot or file.
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let entries = iter
      .into_iter()
      .map(|(k, v)| (k.into(), v.into()))
      .filter(|(k, v)| is_valid_entry(k, v))
      .collect();
    Self { entries }
  }
}

impl<'a> IntoIterator for &'a SlotMapping {
  type Item = (&'a String, &'a String);
  type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

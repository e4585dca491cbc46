//! Transient editing of one model's mapping.
//!
//! An [`EditSession`] copies the stored mapping into a local buffer. Edits stay
//! local until [`EditSession::commit`], which writes the whole buffer with a
//! single bulk save so a batch of edits never interleaves with other writers
//! slot by slot.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::candidates::scan_candidates;
use crate::resolver::PathResolver;
use crate::slot::AnimSlot;
use crate::store::MappingStore;

/// Counts shown alongside the slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditStats {
  pub mapped: usize,
  pub slots: usize,
  pub candidates: usize,
}

impl std::fmt::Display for EditStats {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} / {} · files: {}", self.mapped, self.slots, self.candidates)
  }
}

pub struct EditSession<'a, R: PathResolver> {
  store: &'a MappingStore<R>,
  model_dir: String,
  edits: BTreeMap<String, String>,
  candidates: Vec<String>,
}

impl<'a, R: PathResolver> EditSession<'a, R> {
  /// Start editing `model_dir`, seeded from the store's current mapping.
  pub fn open(store: &'a MappingStore<R>, model_dir: impl Into<String>) -> Self {
    let model_dir = model_dir.into();
    let edits = store.get_mapping(&model_dir).to_map();
    let candidates = scan_candidates(store.resolver(), &model_dir);
    Self {
      store,
      model_dir,
      edits,
      candidates,
    }
  }

  pub fn model_dir(&self) -> &str {
    &self.model_dir
  }

  /// Buffered mapping, including uncommitted edits.
  pub fn edits(&self) -> &BTreeMap<String, String> {
    &self.edits
  }

  pub fn candidates(&self) -> &[String] {
    &self.candidates
  }

  pub fn mapped(&self, slot: AnimSlot) -> Option<&str> {
    self.edits.get(slot.name()).map(String::as_str)
  }

  /// Bind `slot` to `file` in the buffer. An empty name clears the slot.
  pub fn assign(&mut self, slot: AnimSlot, file: impl Into<String>) {
    let file = file.into();
    if file.is_empty() {
      self.clear_slot(slot);
    } else {
      self.edits.insert(slot.name().to_string(), file);
    }
  }

  pub fn clear_slot(&mut self, slot: AnimSlot) {
    self.edits.remove(slot.name());
  }

  pub fn clear_all(&mut self) {
    self.edits.clear();
  }

  /// Rescan candidate files. Buffered edits are kept.
  pub fn refresh(&mut self) {
    self.candidates = scan_candidates(self.store.resolver(), &self.model_dir);
  }

  pub fn stats(&self) -> EditStats {
    EditStats {
      mapped: self.edits.values().filter(|file| !file.is_empty()).count(),
      slots: AnimSlot::ALL.len(),
      candidates: self.candidates.len(),
    }
  }

  /// Replace the stored mapping with the buffer.
  pub fn commit(self) {
    let count = self.edits.len();
    self.store.save_mapping(&self.model_dir, self.edits);
    info!(model_dir = %self.model_dir, entries = count, "animation mapping committed");
  }
}

//! Resolve a slot to an animation file on disk for playback.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::resolver::PathResolver;
use crate::store::MappingStore;

/// Path of the file mapped to `slot`, if it exists.
///
/// Looks in the model's `anims/` directory, then in the model root. Returns
/// `None` when the slot is unmapped or the mapped file is in neither place.
/// Mapped names must be a single plain file name; anything that could leave the
/// model directory is never resolved.
pub fn resolve_slot_file<R: PathResolver>(store: &MappingStore<R>, model_dir: &str, slot: &str) -> Option<PathBuf> {
  let file = store.get_mapped_file(model_dir, slot)?;
  if !is_plain_file_name(&file) {
    debug!(model_dir = model_dir, slot = slot, file = %file, "refusing mapped file outside the model directory");
    return None;
  }

  let in_anims = store.resolver().anims_dir(model_dir).join(&file);
  if in_anims.is_file() {
    return Some(in_anims);
  }

  let in_root = Path::new(model_dir).join(&file);
  if in_root.is_file() {
    return Some(in_root);
  }

  debug!(model_dir = model_dir, slot = slot, file = %file, "mapped animation file is missing");
  None
}

fn is_plain_file_name(name: &str) -> bool {
  let mut components = Path::new(name).components();
  matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}

//! Discovery of animation files a slot can be mapped to.
//!
//! Candidates come from the model's `anims/` subdirectory first and the model
//! root second. A name found in both places is listed once.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::consts::ANIM_FILE_EXTENSION;
use crate::resolver::PathResolver;

#[derive(Debug, Error)]
pub enum ScanError {
  #[error("failed to list '{path}': {source}")]
  ReadDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Whether `path` names an animation file by extension, ignoring case.
pub fn is_anim_file(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| ext.eq_ignore_ascii_case(ANIM_FILE_EXTENSION))
}

/// File names of animation files directly inside `dir`, unsorted.
pub fn list_anim_files(dir: &Path) -> Result<Vec<String>, ScanError> {
  let read_dir = fs::read_dir(dir).map_err(|source| ScanError::ReadDir {
    path: dir.to_path_buf(),
    source,
  })?;

  let mut names = Vec::new();
  for entry in read_dir.flatten() {
    let path = entry.path();
    if !path.is_file() || !is_anim_file(&path) {
      continue;
    }
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
      names.push(name.to_string());
    }
  }
  Ok(names)
}

/// Animation files available to `model_dir`, sorted case-insensitively.
///
/// Creates the `anims/` subdirectory if it is missing. Directories that cannot
/// be read contribute no candidates, and an empty key has none.
pub fn scan_candidates<R>(resolver: &R, model_dir: &str) -> Vec<String>
where
  R: PathResolver + ?Sized,
{
  if model_dir.is_empty() {
    return Vec::new();
  }

  let anims_dir = resolver.anims_dir(model_dir);
  if !anims_dir.exists() {
    if let Err(e) = resolver.ensure_dir(&anims_dir) {
      warn!(path = %anims_dir.display(), error = %e, "failed to create animation directory");
    }
  }

  let mut seen = HashSet::new();
  let mut candidates = Vec::new();
  for dir in [anims_dir.as_path(), Path::new(model_dir)] {
    match list_anim_files(dir) {
      Ok(names) => {
        for name in names {
          if seen.insert(name.clone()) {
            candidates.push(name);
          }
        }
      }
      Err(e) => debug!(error = %e, "skipping candidate directory"),
    }
  }

  candidates.sort_by_key(|name| name.to_lowercase());
  candidates
}

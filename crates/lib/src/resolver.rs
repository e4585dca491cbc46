//! Model path resolution.
//!
//! Turns a model name into its directory and derives the locations the
//! mapping store and its consumers work with.
//!
//! # Layout
//!
//! ```text
//! {models_root}/
//! └── <model>/
//!     ├── animations.json   # slot -> file mapping
//!     ├── anims/            # candidate animation files
//!     └── *.vmd             # optional extra candidates in the model root
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::consts::{ANIMS_DIR_NAME, MAPPING_FILENAME};
use crate::platform::paths::models_dir;

/// Derives model-relative paths for the mapping store and its consumers.
///
/// Directory keys handed to `config_file` and `anims_dir` are used verbatim;
/// implementations must not canonicalize them.
pub trait PathResolver: Send + Sync {
  /// Directory of the model with the given name.
  fn model_dir(&self, model: &str) -> PathBuf;

  /// Mapping file for a model directory key.
  fn config_file(&self, model_dir: &str) -> PathBuf {
    Path::new(model_dir).join(MAPPING_FILENAME)
  }

  /// Candidate animation directory for a model directory key.
  fn anims_dir(&self, model_dir: &str) -> PathBuf {
    Path::new(model_dir).join(ANIMS_DIR_NAME)
  }

  /// Make sure `dir` exists so a file can be written into it.
  fn ensure_dir(&self, dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
  }
}

/// Default resolver: one directory per model under a shared root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
  models_root: PathBuf,
}

impl ModelPaths {
  pub fn new(models_root: impl Into<PathBuf>) -> Self {
    Self {
      models_root: models_root.into(),
    }
  }

  /// Resolver rooted at the configured models directory.
  pub fn current() -> Self {
    Self::new(models_dir())
  }

  pub fn models_root(&self) -> &Path {
    &self.models_root
  }

  /// Directory key for a model, as the store expects it.
  pub fn model_key(&self, model: &str) -> String {
    self.model_dir(model).to_string_lossy().into_owned()
  }
}

impl PathResolver for ModelPaths {
  fn model_dir(&self, model: &str) -> PathBuf {
    self.models_root.join(model)
  }
}

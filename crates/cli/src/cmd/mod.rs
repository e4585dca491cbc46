mod candidates;
mod info;
mod show;
mod slots;
mod write;

use std::path::PathBuf;

use anyhow::{Result, bail};
use animslot_lib::mapping::storage::load_mapping;
use animslot_lib::{MappingStore, ModelPaths, PathResolver};

pub use candidates::cmd_candidates;
pub use info::cmd_info;
pub use show::{cmd_get, cmd_show};
pub use slots::cmd_slots;
pub use write::{cmd_clear, cmd_import, cmd_set};

/// State shared by every command: the store over the resolved models root.
pub struct Context {
  pub store: MappingStore,
}

impl Context {
  pub fn new(models_dir: Option<PathBuf>) -> Self {
    let paths = match models_dir {
      Some(dir) => ModelPaths::new(dunce::canonicalize(&dir).unwrap_or(dir)),
      None => ModelPaths::current(),
    };
    Self {
      store: MappingStore::new(paths),
    }
  }

  pub fn paths(&self) -> &ModelPaths {
    self.store.resolver()
  }

  /// Directory key for `model`, rejecting names that would escape the models root.
  pub fn model_key(&self, model: &str) -> Result<String> {
    if model.is_empty() {
      bail!("model name must not be empty");
    }
    if model == "." || model == ".." || model.contains(['/', '\\']) {
      bail!("invalid model name '{}': expected a single directory name", model);
    }
    Ok(self.paths().model_key(model))
  }

  /// Like `model_key`, but fails when the model directory does not exist.
  pub fn existing_model(&self, model: &str) -> Result<String> {
    let key = self.model_key(model)?;
    if !self.paths().model_dir(model).is_dir() {
      bail!("model '{}' not found in {}", model, self.paths().models_root().display());
    }
    Ok(key)
  }

  /// Fails unless the mapping file for `dir` holds what the store has cached.
  ///
  /// The store logs and absorbs save errors, so commands that write call this
  /// before reporting success.
  pub fn verify_persisted(&self, dir: &str) -> Result<()> {
    let path = self.paths().config_file(dir);
    let on_disk = match load_mapping(&path) {
      Ok(entries) => entries,
      Err(e) => bail!("failed to persist mapping to {}: {}", path.display(), e),
    };
    if on_disk != self.store.get_mapping(dir).to_map() {
      bail!("failed to persist mapping to {}", path.display());
    }
    Ok(())
  }
}

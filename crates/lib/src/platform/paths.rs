use crate::consts::{APP_NAME, MODELS_DIR_ENV};
use std::path::PathBuf;

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> PathBuf {
  let userprofile = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
  PathBuf::from(userprofile)
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> PathBuf {
  let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
  PathBuf::from(home)
}

/// Returns the directory for data files for the application
#[cfg(windows)]
pub fn data_dir() -> PathBuf {
  std::env::var("APPDATA")
    .map(PathBuf::from)
    .unwrap_or_else(|_| home_dir().join("AppData").join("Roaming"))
    .join(APP_NAME)
}

/// Returns the directory for data files for the application
#[cfg(not(windows))]
pub fn data_dir() -> PathBuf {
  let data_home = std::env::var("XDG_DATA_HOME")
    .map(PathBuf::from)
    .unwrap_or_else(|_| home_dir().join(".local").join("share"));
  data_home.join(APP_NAME)
}

/// Returns the root directory holding one subdirectory per model.
///
/// `ANIMSLOT_MODELS_DIR` takes precedence over the data directory default.
pub fn models_dir() -> PathBuf {
  if let Ok(path) = std::env::var(MODELS_DIR_ENV) {
    return PathBuf::from(path);
  }

  default_models_dir()
}

pub fn default_models_dir() -> PathBuf {
  data_dir().join("models")
}

//! Mapping file persistence.
//!
//! Reads and writes the per-model `animations.json` file.
//!
//! # Example File
//!
//! ```json
//! {
//!   "idle": "my_idle.vmd",
//!   "walk": "walk_v2.vmd"
//! }
//! ```
//!
//! Reading is tolerant: a missing file, an empty file, or a `null` document is
//! an empty mapping, and entries whose value is not a non-empty string are
//! dropped. Writing replaces the file atomically (temp file in the same
//! directory, then rename).

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::resolver::PathResolver;

use super::types::is_valid_entry;

/// Errors that can occur when reading or writing a mapping file.
#[derive(Debug, Error)]
pub enum MappingFileError {
  /// Failed to read the mapping file.
  #[error("failed to read mapping file '{path}': {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The file is not valid JSON.
  #[error("failed to parse mapping file: {0}")]
  Parse(#[source] serde_json::Error),

  /// Valid JSON, but the document is not an object.
  #[error("mapping file must contain a JSON object, found {0}")]
  NotAnObject(&'static str),

  /// Failed to create the directory holding the mapping file.
  #[error("failed to create directory '{path}': {source}")]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Failed to serialize the mapping.
  #[error("failed to serialize mapping: {0}")]
  Serialize(#[source] serde_json::Error),

  /// Failed to write the temporary file.
  #[error("failed to write mapping file '{path}': {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Failed to move the temporary file over the mapping file.
  #[error("failed to replace mapping file '{path}': {source}")]
  Persist {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

/// Parse mapping file content, keeping only valid entries.
pub fn parse_mapping(content: &str) -> Result<BTreeMap<String, String>, MappingFileError> {
  if content.trim().is_empty() {
    return Ok(BTreeMap::new());
  }

  let document: Value = serde_json::from_str(content).map_err(MappingFileError::Parse)?;
  let object = match document {
    Value::Object(object) => object,
    Value::Null => return Ok(BTreeMap::new()),
    other => return Err(MappingFileError::NotAnObject(json_kind(&other))),
  };

  let mut entries = BTreeMap::new();
  for (slot, value) in object {
    match value {
      Value::String(file) if is_valid_entry(&slot, &file) => {
        entries.insert(slot, file);
      }
      other => trace!(slot = %slot, value = json_kind(&other), "dropping invalid mapping entry"),
    }
  }
  Ok(entries)
}

/// Load the mapping stored at `path`.
///
/// A missing file is an empty mapping, not an error.
pub fn load_mapping(path: &Path) -> Result<BTreeMap<String, String>, MappingFileError> {
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      debug!(path = %path.display(), "mapping file not found");
      return Ok(BTreeMap::new());
    }
    Err(source) => {
      return Err(MappingFileError::Read {
        path: path.to_path_buf(),
        source,
      });
    }
  };

  let entries = parse_mapping(&content)?;
  info!(path = %path.display(), entries = entries.len(), "loaded animation mapping");
  Ok(entries)
}

/// Write `entries` to `path` as pretty-printed JSON.
///
/// The parent directory is created through `resolver` first. The file is
/// replaced atomically, so readers never observe a partial write.
pub fn save_mapping_file<R>(
  resolver: &R,
  path: &Path,
  entries: &BTreeMap<String, String>,
) -> Result<(), MappingFileError>
where
  R: PathResolver + ?Sized,
{
  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
    _ => PathBuf::from("."),
  };

  resolver.ensure_dir(&dir).map_err(|source| MappingFileError::CreateDir {
    path: dir.clone(),
    source,
  })?;

  let content = serde_json::to_string_pretty(entries).map_err(MappingFileError::Serialize)?;

  // Unique temp name per writer, so concurrent saves never share a temp file
  let mut temp = NamedTempFile::new_in(&dir).map_err(|source| MappingFileError::Write {
    path: path.to_path_buf(),
    source,
  })?;
  temp
    .write_all(content.as_bytes())
    .and_then(|()| temp.flush())
    .map_err(|source| MappingFileError::Write {
      path: path.to_path_buf(),
      source,
    })?;
  temp.persist(path).map_err(|e| MappingFileError::Persist {
    path: path.to_path_buf(),
    source: e.error,
  })?;

  debug!(path = %path.display(), entries = entries.len(), "saved animation mapping");
  Ok(())
}

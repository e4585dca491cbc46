//! Cached, write-through store of per-model animation mappings.
//!
//! The store keeps one slot -> file map per directory key. A key's map is
//! loaded from the model's mapping file the first time the key is touched and
//! stays cached until invalidated. Every mutation updates the cache first and
//! then rewrites the mapping file before returning.
//!
//! # Concurrency
//!
//! Both levels are concurrent maps:
//!
//! ```text
//! cache: DashMap<dir key, Arc<{ DashMap<slot, file>, persist lock }>>
//! ```
//!
//! - First access to a key goes through the outer map's entry API, so
//!   concurrent first readers share a single load.
//! - Point writes to different slots of the same directory never lose each
//!   other's updates, in memory or on disk. Writes for one cached map are
//!   serialized from snapshot to rename, so the file always ends at the
//!   newest state.
//! - There is no read-modify-write atomicity across calls. Concurrent bulk
//!   writes to one directory race and the last one wins, in memory and on disk.
//!
//! # Errors
//!
//! I/O and parse failures are logged and absorbed. A mapping that fails to load
//! is empty; a failed save leaves the cache as the caller-visible truth.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use tracing::{debug, error, warn};

use crate::mapping::storage::{load_mapping, save_mapping_file};
use crate::mapping::{SlotMapping, is_valid_entry};
use crate::resolver::{ModelPaths, PathResolver};

/// One directory's slot map plus the lock ordering its writes to disk.
#[derive(Debug, Default)]
struct CachedMapping {
  entries: DashMap<String, String>,
  /// Held from snapshot to rename. Never guards `entries` itself.
  persist_lock: Mutex<()>,
}

impl CachedMapping {
  fn new(entries: DashMap<String, String>) -> Self {
    Self {
      entries,
      persist_lock: Mutex::new(()),
    }
  }

  fn snapshot(&self) -> BTreeMap<String, String> {
    self
      .entries
      .iter()
      .map(|e| (e.key().clone(), e.value().clone()))
      .collect()
  }
}

type Entries = Arc<CachedMapping>;

/// Process-lifetime cache of slot mappings, keyed by model directory.
///
/// Construct one per application and hand out references; it is `Send + Sync`.
#[derive(Debug)]
pub struct MappingStore<R = ModelPaths> {
  resolver: R,
  cache: DashMap<String, Entries>,
}

impl<R: PathResolver> MappingStore<R> {
  pub fn new(resolver: R) -> Self {
    Self {
      resolver,
      cache: DashMap::new(),
    }
  }

  pub fn resolver(&self) -> &R {
    &self.resolver
  }

  /// Snapshot of the mapping for `model_dir`.
  ///
  /// An empty key yields an empty mapping without touching the cache or disk.
  pub fn get_mapping(&self, model_dir: &str) -> SlotMapping {
    if model_dir.is_empty() {
      return SlotMapping::new();
    }

    let cached = self.entries(model_dir);
    cached.snapshot().into_iter().collect()
  }

  /// File mapped to `slot` for `model_dir`, or `None` when unmapped.
  pub fn get_mapped_file(&self, model_dir: &str, slot: &str) -> Option<String> {
    if model_dir.is_empty() {
      return None;
    }

    self.entries(model_dir).entries.get(slot).map(|file| file.value().clone())
  }

  /// Map `slot` to `file`, or remove the slot when `file` is `None` or empty.
  ///
  /// Loads the directory first if it is not cached yet, then persists. An empty
  /// directory key or slot name changes nothing.
  pub fn set_mapping(&self, model_dir: &str, slot: &str, file: Option<&str>) {
    if model_dir.is_empty() {
      warn!(slot = slot, "ignoring mapping update for empty model directory");
      return;
    }
    if slot.is_empty() {
      warn!(model_dir = model_dir, "ignoring mapping update with empty slot name");
      return;
    }

    let cached = self.entries(model_dir);
    match file.filter(|f| is_valid_entry(slot, f)) {
      Some(file) => {
        cached.entries.insert(slot.to_string(), file.to_string());
      }
      None => {
        cached.entries.remove(slot);
      }
    }

    self.persist(model_dir, &cached);
  }

  /// Replace the whole mapping for `model_dir`.
  ///
  /// Entries with an empty slot or file are dropped. Prior state, cached or on
  /// disk, is discarded rather than merged.
  pub fn save_mapping<I, K, V>(&self, model_dir: &str, mapping: I)
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    if model_dir.is_empty() {
      warn!("ignoring mapping save for empty model directory");
      return;
    }

    let cached: Entries = Arc::new(CachedMapping::new(
      mapping
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .filter(|(k, v)| is_valid_entry(k, v))
        .collect(),
    ));
    self.cache.insert(model_dir.to_string(), Arc::clone(&cached));
    self.persist(model_dir, &cached);
  }

  /// Drop the cached mapping for `model_dir`; the next read reloads it.
  pub fn invalidate(&self, model_dir: &str) {
    if self.cache.remove(model_dir).is_some() {
      debug!(model_dir = model_dir, "invalidated animation mapping");
    }
  }

  /// Drop every cached mapping.
  pub fn invalidate_all(&self) {
    self.cache.clear();
    debug!("invalidated all animation mappings");
  }

  /// Whether `model_dir` currently has a cache entry.
  pub fn is_cached(&self, model_dir: &str) -> bool {
    self.cache.contains_key(model_dir)
  }

  /// Number of cached directories.
  pub fn cached_len(&self) -> usize {
    self.cache.len()
  }

  /// Cached map for `model_dir`, loading it on first access.
  fn entries(&self, model_dir: &str) -> Entries {
    if let Some(entries) = self.cache.get(model_dir) {
      return Arc::clone(entries.value());
    }

    // The entry guard holds the shard lock while loading, so racing first
    // accesses observe the same map.
    let entry = self
      .cache
      .entry(model_dir.to_string())
      .or_insert_with(|| Arc::new(self.load(model_dir)));
    Arc::clone(entry.value())
  }

  fn load(&self, model_dir: &str) -> CachedMapping {
    let path = self.resolver.config_file(model_dir);
    match load_mapping(&path) {
      Ok(entries) => CachedMapping::new(entries.into_iter().collect()),
      Err(e) => {
        warn!(path = %path.display(), error = %e, "failed to load animation mapping");
        CachedMapping::default()
      }
    }
  }

  fn persist(&self, model_dir: &str, cached: &CachedMapping) {
    // A writer that panicked mid-save leaves nothing half-applied in memory
    let _guard = cached.persist_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let snapshot = cached.snapshot();
    let path = self.resolver.config_file(model_dir);

    if let Err(e) = save_mapping_file(&self.resolver, &path, &snapshot) {
      error!(path = %path.display(), error = %e, "failed to save animation mapping");
    }
  }
}

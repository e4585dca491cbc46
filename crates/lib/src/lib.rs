//! animslot-lib: per-model animation slot mappings
//!
//! This crate provides:
//! - `MappingStore`: cached, write-through store of slot -> file mappings
//!   keyed by model directory, safe to share across threads
//! - `PathResolver` / `ModelPaths`: where model directories and their
//!   mapping files live
//! - `EditSession`: buffered editing of one model's mapping
//! - `scan_candidates` and `resolve_slot_file`: the file-side helpers used by
//!   editors and playback

pub mod candidates;
pub mod consts;
pub mod editor;
pub mod lookup;
pub mod mapping;
pub mod platform;
pub mod resolver;
pub mod slot;
pub mod store;

pub use candidates::scan_candidates;
pub use editor::{EditSession, EditStats};
pub use lookup::resolve_slot_file;
pub use mapping::{MappingFileError, SlotMapping};
pub use resolver::{ModelPaths, PathResolver};
pub use slot::AnimSlot;
pub use store::MappingStore;

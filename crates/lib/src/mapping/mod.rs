//! Slot mappings and their on-disk form.

pub mod storage;
mod types;

pub use storage::MappingFileError;
pub use types::{SlotMapping, is_valid_entry};

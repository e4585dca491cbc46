//! Names shared across the crate.

/// Application name used for data directory layout.
pub const APP_NAME: &str = "animslot";

/// Environment variable overriding the models root directory.
pub const MODELS_DIR_ENV: &str = "ANIMSLOT_MODELS_DIR";

/// Mapping file name inside a model directory.
pub const MAPPING_FILENAME: &str = "animations.json";

/// Subdirectory of a model directory holding candidate animation files.
pub const ANIMS_DIR_NAME: &str = "anims";

/// Extension (without the dot) of candidate animation files, matched case-insensitively.
pub const ANIM_FILE_EXTENSION: &str = "vmd";

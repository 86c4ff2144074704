//! Configuration management for the session runner

pub mod presets;
pub mod settings;

pub use presets::{bundled_seed_presets, bundled_speed_presets, SeedPreset, SpeedPreset};
pub use settings::{
    cells_for_pixels, CliOverrides, GridConfig, OutputConfig, RunConfig, Settings, ViewportConfig,
    CELL_SIZE_PX,
};

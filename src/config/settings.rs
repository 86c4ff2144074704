//! Configuration settings for the Game of Life session runner

use super::presets::{bundled_seed_presets, bundled_speed_presets, SeedPreset, SpeedPreset};
use crate::game_of_life::grid::{MAX_HEIGHT, MAX_WIDTH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Edge length of one rendered cell, used to auto-size a grid from pixels
pub const CELL_SIZE_PX: u32 = 17;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub run: RunConfig,
    pub seeds: Vec<SeedPreset>,
    pub speeds: Vec<SpeedPreset>,
    pub output: OutputConfig,
}

/// Grid size. A missing dimension is derived from the viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub height: Option<usize>,
    #[serde(default)]
    pub viewport: Option<ViewportConfig>,
}

/// Pixel measurement of the host's drawing area
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub width_px: u32,
    pub height_px: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub steps: usize,
    pub realtime: bool,
    /// Seed preset name; the preset marked `selected` when absent
    #[serde(default)]
    pub seed: Option<String>,
    /// Speed preset name; the preset marked `selected` when absent
    #[serde(default)]
    pub speed: Option<String>,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub save_directory: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: Some(60),
                height: Some(40),
                viewport: None,
            },
            run: RunConfig {
                steps: 100,
                realtime: false,
                seed: None,
                speed: None,
                rng_seed: None,
            },
            seeds: bundled_seed_presets(),
            speeds: bundled_speed_presets(),
            output: OutputConfig {
                save_directory: PathBuf::from("output/saves"),
            },
        }
    }
}

/// Number of whole cells that fit in `pixels`
pub fn cells_for_pixels(pixels: u32) -> usize {
    (pixels / CELL_SIZE_PX) as usize
}

impl GridConfig {
    /// Resolve `(width, height)`, auto-sizing missing dimensions
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        let width = match (self.width, self.viewport) {
            (Some(width), _) => width,
            (None, Some(viewport)) => cells_for_pixels(viewport.width_px),
            (None, None) => anyhow::bail!("Grid width is neither set nor derivable from a viewport"),
        };
        let height = match (self.height, self.viewport) {
            (Some(height), _) => height,
            (None, Some(viewport)) => cells_for_pixels(viewport.height_px),
            (None, None) => anyhow::bail!("Grid height is neither set nor derivable from a viewport"),
        };

        if width == 0 || height == 0 || width > MAX_WIDTH || height > MAX_HEIGHT {
            anyhow::bail!(
                "Grid size {}x{} must be between 1x1 and {}x{}",
                width, height, MAX_WIDTH, MAX_HEIGHT
            );
        }
        Ok((width, height))
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        self.grid.dimensions()?;

        if self.seeds.is_empty() {
            anyhow::bail!("At least one seed preset is required");
        }
        if self.speeds.is_empty() {
            anyhow::bail!("At least one speed preset is required");
        }
        if self.seeds.iter().filter(|p| p.selected).count() > 1 {
            anyhow::bail!("Only one seed preset may be selected");
        }
        if self.speeds.iter().filter(|p| p.selected).count() > 1 {
            anyhow::bail!("Only one speed preset may be selected");
        }

        for preset in &self.seeds {
            preset
                .descriptor()
                .resolve()
                .with_context(|| format!("Invalid seed preset: {}", preset.name))?;
        }
        if let Some(speed) = self.speeds.iter().find(|s| s.period == 0) {
            anyhow::bail!("Speed preset {} must have a positive period", speed.name);
        }

        if let Some(ref name) = self.run.seed {
            self.find_seed(name)?;
        }
        if let Some(ref name) = self.run.speed {
            self.find_speed(name)?;
        }

        Ok(())
    }

    pub fn find_seed(&self, name: &str) -> Result<&SeedPreset> {
        self.seeds
            .iter()
            .find(|p| p.name == name)
            .with_context(|| format!("Unknown seed preset: {}", name))
    }

    pub fn find_speed(&self, name: &str) -> Result<&SpeedPreset> {
        self.speeds
            .iter()
            .find(|p| p.name == name)
            .with_context(|| format!("Unknown speed preset: {}", name))
    }

    /// Seed preset to start with: the configured one, else the one marked
    /// `selected`, else the first
    pub fn default_seed(&self) -> Result<&SeedPreset> {
        match self.run.seed {
            Some(ref name) => self.find_seed(name),
            None => self
                .seeds
                .iter()
                .find(|p| p.selected)
                .or_else(|| self.seeds.first())
                .context("No seed presets configured"),
        }
    }

    pub fn default_speed(&self) -> Result<&SpeedPreset> {
        match self.run.speed {
            Some(ref name) => self.find_speed(name),
            None => self
                .speeds
                .iter()
                .find(|p| p.selected)
                .or_else(|| self.speeds.first())
                .context("No speed presets configured"),
        }
    }

    /// Add a saved system, replacing a preset of the same name
    pub fn upsert_seed(&mut self, preset: SeedPreset) {
        match self.seeds.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => {
                existing.algo = preset.algo;
                existing.arg = preset.arg;
            }
            None => self.seeds.push(preset),
        }
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = Some(width);
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = Some(height);
        }
        if let Some(steps) = cli_overrides.steps {
            self.run.steps = steps;
        }
        if let Some(ref seed) = cli_overrides.seed {
            self.run.seed = Some(seed.clone());
        }
        if let Some(ref speed) = cli_overrides.speed {
            self.run.speed = Some(speed.clone());
        }
        if let Some(rng_seed) = cli_overrides.rng_seed {
            self.run.rng_seed = Some(rng_seed);
        }
        if cli_overrides.realtime {
            self.run.realtime = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub steps: Option<usize>,
    pub seed: Option<String>,
    pub speed: Option<String>,
    pub rng_seed: Option<u64>,
    pub realtime: bool,
}

//! File I/O for saved systems.
//! A saved system is a named seed descriptor, normally a `selection` of
//! live-cell coordinates, stored as one JSON file.

use crate::config::SeedPreset;
use crate::seed::SeedDescriptor;
use anyhow::{Context, Result};
use log::warn;
use std::path::{Path, PathBuf};

/// Save a descriptor to a JSON file
pub fn save_descriptor_to_file<P: AsRef<Path>>(descriptor: &SeedDescriptor, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(descriptor).context("Failed to serialize seed descriptor")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write seed descriptor to file: {}", path.display()))
}

/// Load a descriptor from a JSON file and check that it resolves
pub fn load_descriptor_from_file<P: AsRef<Path>>(path: P) -> Result<SeedDescriptor> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed descriptor file: {}", path.display()))?;

    let descriptor: SeedDescriptor = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed descriptor from file: {}", path.display()))?;
    descriptor
        .resolve()
        .with_context(|| format!("Invalid seed descriptor in file: {}", path.display()))?;

    Ok(descriptor)
}

/// File name used for a saved system called `name`
pub fn system_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("{}.json", stem)
}

/// Save a named system into `dir`, replacing any earlier save of the same name
pub fn save_system<P: AsRef<Path>>(dir: P, name: &str, descriptor: &SeedDescriptor) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let path = dir.join(system_file_name(name));
    let preset = SeedPreset::new(name, descriptor.clone());
    let content = serde_json::to_string_pretty(&preset).context("Failed to serialize saved system")?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write saved system: {}", path.display()))?;

    Ok(path)
}

/// Load every saved system in `dir`. Unreadable files are skipped with a
/// warning; a missing directory yields no systems.
pub fn load_systems<P: AsRef<Path>>(dir: P) -> Result<Vec<SeedPreset>> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut systems = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_file() || path.extension().map_or(true, |ext| ext != "json") {
            continue;
        }

        let loaded = std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|content| Ok(serde_json::from_str::<SeedPreset>(&content)?))
            .and_then(|preset| {
                preset.descriptor().resolve()?;
                Ok(preset)
            });

        match loaded {
            Ok(preset) => systems.push(preset),
            Err(e) => warn!("Failed to load saved system {}: {}", path.display(), e),
        }
    }

    systems.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(systems)
}

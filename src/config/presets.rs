//! Bundled seed and speed presets

use crate::seed::{Coord, SeedDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A named initial state offered to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPreset {
    pub name: String,
    pub algo: String,
    #[serde(default)]
    pub arg: Value,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

impl SeedPreset {
    pub fn new(name: impl Into<String>, descriptor: SeedDescriptor) -> Self {
        Self {
            name: name.into(),
            algo: descriptor.name,
            arg: descriptor.arg,
            selected: false,
        }
    }

    pub fn descriptor(&self) -> SeedDescriptor {
        SeedDescriptor::new(self.algo.clone(), self.arg.clone())
    }
}

/// A named tick period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedPreset {
    pub name: String,
    /// Milliseconds between ticks
    pub period: u64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

const KOKS_GALAXY: [Coord; 48] = [[3,3],[4,3],[5,3],[6,3],[7,3],[8,3],[10,3],[11,3],[3,4],[4,4],[5,4],[6,4],[7,4],[8,4],[10,4],[11,4],[10,5],[11,5],[3,6],[4,6],[10,6],[11,6],[3,7],[4,7],[10,7],[11,7],[3,8],[4,8],[10,8],[11,8],[3,9],[4,9],[3,10],[4,10],[6,10],[7,10],[8,10],[9,10],[10,10],[11,10],[3,11],[4,11],[6,11],[7,11],[8,11],[9,11],[10,11],[11,11]];

const CHESHIRE_CAT: [Coord; 18] = [[4,3],[7,3],[4,4],[5,4],[6,4],[7,4],[3,5],[8,5],[3,6],[5,6],[6,6],[8,6],[3,7],[8,7],[4,8],[5,8],[6,8],[7,8]];

const GOSPER_GLIDER_GUN: [Coord; 36] = [[1,5],[2,5],[1,6],[2,6],[11,5],[11,6],[11,7],[12,4],[12,8],[13,3],[13,9],[14,3],[14,9],[15,6],[16,4],[16,8],[17,5],[17,6],[17,7],[18,6],[21,5],[21,4],[21,3],[22,5],[22,4],[22,3],[23,2],[23,6],[25,2],[25,1],[25,6],[25,7],[35,3],[35,4],[36,3],[36,4]];

fn seed(name: &str, algo: &str, arg: Value, selected: bool) -> SeedPreset {
    SeedPreset {
        name: name.to_string(),
        algo: algo.to_string(),
        arg,
        selected,
    }
}

fn pattern(name: &str, coords: &[Coord]) -> SeedPreset {
    SeedPreset::new(name, SeedDescriptor::selection(coords))
}

fn speed(name: &str, period: u64, selected: bool) -> SpeedPreset {
    SpeedPreset {
        name: name.to_string(),
        period,
        selected,
    }
}

pub fn bundled_seed_presets() -> Vec<SeedPreset> {
    vec![
        seed("Empty", "constant", json!(0), true),
        seed("5% Population", "random", json!(5), false),
        seed("20% Population", "random", json!(20), false),
        seed("50% Population", "random", json!(50), false),
        seed("80% Population", "random", json!(80), false),
        seed("95% Population", "random", json!(95), false),
        pattern("Kok's galaxy", &KOKS_GALAXY),
        pattern("Cheshire cat", &CHESHIRE_CAT),
        pattern("Gosper glider gun", &GOSPER_GLIDER_GUN),
    ]
}

pub fn bundled_speed_presets() -> Vec<SpeedPreset> {
    vec![
        speed("Very slow", 5000, false),
        speed("Slow", 1500, false),
        speed("Middle", 400, true),
        speed("Fast", 100, false),
        speed("Very fast", 20, false),
    ]
}

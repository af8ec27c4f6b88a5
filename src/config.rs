//! Startup configuration from environment variables.
//!
//! | variable            | meaning                                        |
//! |---------------------|------------------------------------------------|
//! | `VORTEXT_SEED`      | u64 seed for particle sampling (random if unset) |
//! | `VORTEXT_SPEED`     | initial speed slider value in [0.01, 0.10]     |
//! | `VORTEXT_DIRECTION` | `clockwise`, `counter-clockwise`, `cw`, `ccw`  |
//! | `VORTEXT_COLOR`     | initial fill as `#rrggbb`                      |
//! | `VORTEXT_SHAPE`     | `text`, `circle` or `square`                   |

use crate::controls::{Controls, Rgb, parse_speed};
use crate::error::SketchError;

pub const SEED_VAR: &str = "VORTEXT_SEED";
pub const SPEED_VAR: &str = "VORTEXT_SPEED";
pub const DIRECTION_VAR: &str = "VORTEXT_DIRECTION";
pub const COLOR_VAR: &str = "VORTEXT_COLOR";
pub const SHAPE_VAR: &str = "VORTEXT_SHAPE";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub seed: u64,
    pub controls: Controls,
}

impl Config {
    pub fn from_env() -> Result<Self, SketchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SketchError> {
        let seed: u64 = match lookup(SEED_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| SketchError::InvalidSeed(raw.clone()))?,
            None => rand::random(),
        };

        let mut controls = Controls::default();
        if let Some(raw) = lookup(SPEED_VAR) {
            controls.speed = parse_speed(&raw)?;
        }
        if let Some(raw) = lookup(DIRECTION_VAR) {
            controls.direction = raw.parse()?;
        }
        if let Some(raw) = lookup(COLOR_VAR) {
            controls.color = Rgb::from_hex(raw.trim())?;
        }
        if let Some(raw) = lookup(SHAPE_VAR) {
            controls.shape = raw.parse()?;
        }

        Ok(Self { seed, controls })
    }
}

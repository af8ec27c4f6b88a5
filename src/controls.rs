//! Sidebar control state and how it feeds the per-frame update.

use std::fmt;
use std::str::FromStr;

use crate::error::SketchError;

pub const MIN_SPEED: f32 = 0.01;
pub const MAX_SPEED: f32 = 0.10;
pub const SPEED_STEP: f32 = 0.01;
/// Slider position at which particles move at their sampled angular speed.
pub const DEFAULT_SPEED: f32 = 0.03;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// Multiplier applied to the angle increment. Screen y grows downwards,
    /// so a positive increment turns clockwise.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Clockwise => "Clockwise",
            Direction::CounterClockwise => "Counter-Clockwise",
        }
    }
}

impl FromStr for Direction {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clockwise" | "cw" | "1" | "+1" => Ok(Direction::Clockwise),
            "counter-clockwise" | "counterclockwise" | "ccw" | "-1" => {
                Ok(Direction::CounterClockwise)
            }
            _ => Err(SketchError::InvalidDirection(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Shape {
    #[default]
    Text,
    Circle,
    Square,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Text, Shape::Circle, Shape::Square];

    pub fn label(self) -> &'static str {
        match self {
            Shape::Text => "Text",
            Shape::Circle => "Circle",
            Shape::Square => "Square",
        }
    }
}

impl FromStr for Shape {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Shape::Text),
            "circle" => Ok(Shape::Circle),
            "square" => Ok(Shape::Square),
            _ => Err(SketchError::InvalidShape(s.to_string())),
        }
    }
}

/// 8-bit sRGB fill color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    /// Parses `#rrggbb` or `rrggbb`, case insensitive.
    pub fn from_hex(hex: &str) -> Result<Rgb, SketchError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(SketchError::InvalidColor(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| SketchError::InvalidColor(format!("bad hex digits in {hex:?}")))
        };
        Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Validates a speed value against the slider range.
pub fn parse_speed(s: &str) -> Result<f32, SketchError> {
    let speed: f32 = s
        .trim()
        .parse()
        .map_err(|_| SketchError::InvalidSpeed(s.to_string()))?;
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(SketchError::InvalidSpeed(format!(
            "{speed} outside [{MIN_SPEED}, {MAX_SPEED}]"
        )));
    }
    Ok(speed)
}

/// Values bound to the sidebar widgets. Written by the UI, read at the start of each frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Controls {
    pub speed: f32,
    pub direction: Direction,
    pub color: Rgb,
    pub shape: Shape,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            direction: Direction::default(),
            color: Rgb::default(),
            shape: Shape::default(),
        }
    }
}

/// Scales and orients each particle's angle increment.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Motion {
    pub rate: f32,
    pub sign: f32,
}

impl Motion {
    pub const REFERENCE: Motion = Motion {
        rate: 1.0,
        sign: 1.0,
    };

    pub fn from_controls(controls: &Controls) -> Self {
        Self {
            rate: controls.speed / DEFAULT_SPEED,
            sign: controls.direction.sign(),
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Motion::REFERENCE
    }
}

use std::f32::consts::TAU;

use cgmath::Vector2;
use rand::Rng;

pub mod config;
pub mod controls;
pub mod error;
pub mod render;
pub mod sketch;

pub use config::Config;
pub use controls::{Controls, Direction, Motion, Rgb, Shape};
pub use error::SketchError;
pub use sketch::{POPULATION, Sketch};

/// Discrete radii an orderly particle orbits at.
pub const ORDERLY_RADII: [f32; 3] = [100.0, 200.0, 300.0];
pub const CHAOTIC_RADIUS: (f32, f32) = (50.0, 300.0);
pub const RADIUS_OFFSET: (f32, f32) = (-20.0, 20.0);

/// Which half of the population a particle belongs to. Fixed at creation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Class {
    Orderly,
    Chaotic,
}

impl Class {
    /// First half of a population is orderly, second half chaotic.
    pub fn for_index(index: usize, population: usize) -> Self {
        if index < population / 2 {
            Class::Orderly
        } else {
            Class::Chaotic
        }
    }

    pub fn is_chaotic(self) -> bool {
        self == Class::Chaotic
    }

    pub fn oscillation_amplitude(self) -> f32 {
        match self {
            Class::Orderly => 10.0,
            Class::Chaotic => 50.0,
        }
    }

    /// Inclusive range for the per-frame angle increment.
    pub fn angular_speed_range(self) -> (f32, f32) {
        match self {
            Class::Orderly => (0.005, 0.05),
            Class::Chaotic => (0.01, 0.07),
        }
    }

    /// Inclusive range for the per-frame radius phase increment.
    pub fn oscillation_speed_range(self) -> (f32, f32) {
        match self {
            Class::Orderly => (0.01, 0.03),
            Class::Chaotic => (0.02, 0.06),
        }
    }
}

/// One orbiting glyph.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub class: Class,
    pub base_radius: f32,
    pub radius_offset: f32,
    pub angle: f32,
    pub angular_speed: f32,
    pub oscillation_speed: f32,
    pub glyph: char,
    pub position: Vector2<f32>,
}

impl Particle {
    /// Samples a fresh particle for `class` and places it on its base orbit around `center`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, class: Class, center: Vector2<f32>) -> Self {
        let base_radius = match class {
            Class::Orderly => ORDERLY_RADII[rng.gen_range(0..ORDERLY_RADII.len())],
            Class::Chaotic => rng.gen_range(CHAOTIC_RADIUS.0..=CHAOTIC_RADIUS.1),
        };
        let radius_offset = rng.gen_range(RADIUS_OFFSET.0..=RADIUS_OFFSET.1);
        let angle = rng.gen_range(0.0..TAU);
        let (lo, hi) = class.angular_speed_range();
        let angular_speed = rng.gen_range(lo..=hi);
        let (lo, hi) = class.oscillation_speed_range();
        let oscillation_speed = rng.gen_range(lo..=hi);
        let glyph = char::from(b'A' + rng.gen_range(0..26u8));

        Self {
            class,
            base_radius,
            radius_offset,
            angle,
            angular_speed,
            oscillation_speed,
            glyph,
            position: orbit_point(center, base_radius, angle),
        }
    }

    /// Builds a particle from explicit state, positioned on its base orbit.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        class: Class,
        base_radius: f32,
        radius_offset: f32,
        angle: f32,
        angular_speed: f32,
        oscillation_speed: f32,
        glyph: char,
        center: Vector2<f32>,
    ) -> Self {
        Self {
            class,
            base_radius,
            radius_offset,
            angle,
            angular_speed,
            oscillation_speed,
            glyph,
            position: orbit_point(center, base_radius, angle),
        }
    }

    pub fn is_chaotic(&self) -> bool {
        self.class.is_chaotic()
    }

    pub fn current_radius(&self) -> f32 {
        self.base_radius + self.class.oscillation_amplitude() * self.radius_offset.sin()
    }

    /// One frame at the sampled angular speed, turning clockwise on screen.
    pub fn update(&mut self, center: Vector2<f32>) {
        self.advance(center, Motion::REFERENCE);
    }

    /// One frame with the angle increment scaled and oriented by `motion`.
    pub fn advance(&mut self, center: Vector2<f32>, motion: Motion) {
        self.angle = (self.angle + self.angular_speed * motion.rate * motion.sign).rem_euclid(TAU);
        self.radius_offset = (self.radius_offset + self.oscillation_speed).rem_euclid(TAU);
        self.position = orbit_point(center, self.current_radius(), self.angle);
    }
}

pub fn orbit_point(center: Vector2<f32>, radius: f32, angle: f32) -> Vector2<f32> {
    let (sin, cos) = angle.sin_cos();
    center + Vector2::new(cos, sin) * radius
}

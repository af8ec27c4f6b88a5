//! The population and its frame loop.

use cgmath::Vector2;
use rand::Rng;

use crate::controls::Motion;
use crate::error::SketchError;
use crate::{Class, Particle};

/// Number of particles on screen. Only changes by a full rebuild.
pub const POPULATION: usize = 1000;

/// Owns the particle population for a canvas of a given size.
pub struct Sketch<R> {
    pub particles: Vec<Particle>,
    size: Vector2<f32>,
    rng: R,
    frames: u64,
}

impl<R: Rng> Sketch<R> {
    pub fn new(size: Vector2<f32>, rng: R) -> Result<Self, SketchError> {
        validate_size(size)?;
        let mut sketch = Self {
            particles: Vec::with_capacity(POPULATION),
            size,
            rng,
            frames: 0,
        };
        sketch.populate();
        log::info!(
            "sketch ready: {} particles on {}x{} canvas",
            sketch.particles.len(),
            size.x,
            size.y
        );
        Ok(sketch)
    }

    pub fn size(&self) -> Vector2<f32> {
        self.size
    }

    pub fn center(&self) -> Vector2<f32> {
        self.size * 0.5
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Discards the population and rebuilds it for the new canvas size.
    /// Returns whether a rebuild happened.
    pub fn resize(&mut self, size: Vector2<f32>) -> Result<bool, SketchError> {
        validate_size(size)?;
        if size == self.size {
            return Ok(false);
        }
        self.size = size;
        self.populate();
        log::debug!("canvas resized to {}x{}, population rebuilt", size.x, size.y);
        Ok(true)
    }

    /// Advances every particle by one frame, handing each to `visit` right after its update.
    pub fn frame(&mut self, motion: Motion, mut visit: impl FnMut(&Particle)) {
        let center = self.center();
        for particle in &mut self.particles {
            particle.advance(center, motion);
            visit(particle);
        }
        self.frames += 1;
        log::trace!("frame {}", self.frames);
    }

    fn populate(&mut self) {
        let center = self.center();
        self.particles.clear();
        for i in 0..POPULATION {
            let class = Class::for_index(i, POPULATION);
            self.particles.push(Particle::new(&mut self.rng, class, center));
        }
    }
}

fn validate_size(size: Vector2<f32>) -> Result<(), SketchError> {
    let valid = |v: f32| v.is_finite() && v >= 0.0;
    if valid(size.x) && valid(size.y) {
        Ok(())
    } else {
        Err(SketchError::InvalidCanvas {
            width: size.x,
            height: size.y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sketch(w: f32, h: f32, seed: u64) -> Sketch<StdRng> {
        Sketch::new(Vector2::new(w, h), StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn setup_splits_population_into_halves() {
        let s = sketch(1280.0, 720.0, 1);
        assert_eq!(s.particles.len(), POPULATION);
        assert!(s.particles[..500].iter().all(|p| !p.is_chaotic()));
        assert!(s.particles[500..].iter().all(|p| p.is_chaotic()));
    }

    #[test]
    fn center_is_half_the_canvas() {
        let s = sketch(800.0, 600.0, 2);
        assert_eq!(s.center(), Vector2::new(400.0, 300.0));
    }

    #[test]
    fn frame_visits_in_population_order_after_update() {
        let mut s = sketch(800.0, 600.0, 3);
        let before: Vec<f32> = s.particles.iter().map(|p| p.radius_offset).collect();
        let mut seen = Vec::new();
        s.frame(Motion::REFERENCE, |p| seen.push(p.radius_offset));

        assert_eq!(seen.len(), POPULATION);
        for (i, p) in s.particles.iter().enumerate() {
            assert_eq!(seen[i], p.radius_offset);
            assert_ne!(seen[i], before[i]);
        }
        assert_eq!(s.frames(), 1);
    }

    #[test]
    fn resize_rebuilds_with_same_split() {
        let mut s = sketch(800.0, 600.0, 4);
        s.particles.truncate(10);
        assert!(s.resize(Vector2::new(1920.0, 1080.0)).unwrap());

        assert_eq!(s.particles.len(), POPULATION);
        assert!(s.particles[..500].iter().all(|p| !p.is_chaotic()));
        assert!(s.particles[500..].iter().all(|p| p.is_chaotic()));
        assert_eq!(s.center(), Vector2::new(960.0, 540.0));
    }

    #[test]
    fn resize_to_same_size_keeps_population() {
        let mut s = sketch(800.0, 600.0, 5);
        s.frame(Motion::REFERENCE, |_| {});
        let angle = s.particles[0].angle;
        assert!(!s.resize(Vector2::new(800.0, 600.0)).unwrap());
        assert_eq!(s.particles[0].angle, angle);
    }

    #[test]
    fn invalid_canvas_is_rejected() {
        let err = Sketch::new(Vector2::new(f32::NAN, 10.0), StdRng::seed_from_u64(0));
        assert!(matches!(err, Err(SketchError::InvalidCanvas { .. })));

        let mut s = sketch(100.0, 100.0, 6);
        assert!(s.resize(Vector2::new(-1.0, 100.0)).is_err());
        assert_eq!(s.size(), Vector2::new(100.0, 100.0));
    }
}

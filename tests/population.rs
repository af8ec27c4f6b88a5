use cgmath::Vector2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use vortext::{
    Class, Controls, Direction, Motion, ORDERLY_RADII, POPULATION, Particle, Sketch,
};

fn sketch(seed: u64) -> Sketch<StdRng> {
    Sketch::new(Vector2::new(1000.0, 1000.0), StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn worked_example_through_public_api() {
    let center = Vector2::new(500.0, 500.0);
    let mut p = Particle::from_parts(Class::Orderly, 100.0, 0.0, 0.0, 0.03, 0.02, 'M', center);
    p.update(center);

    assert!((p.position.x - 600.15).abs() < 0.01);
    assert!((p.position.y - 503.0).abs() < 0.01);
}

#[test]
fn same_seed_rebuilds_same_population() {
    let a = sketch(99);
    let b = sketch(99);
    for (x, y) in a.particles.iter().zip(&b.particles) {
        assert_eq!(x.glyph, y.glyph);
        assert_eq!(x.base_radius, y.base_radius);
        assert_eq!(x.angle, y.angle);
    }
}

#[test]
fn orderly_half_uses_discrete_radii() {
    let s = sketch(11);
    let orderly = &s.particles[..POPULATION / 2];
    assert!(orderly.iter().all(|p| ORDERLY_RADII.contains(&p.base_radius)));
    for radius in ORDERLY_RADII {
        assert!(orderly.iter().any(|p| p.base_radius == radius));
    }
}

#[test]
fn reversed_direction_undoes_a_frame() {
    let mut s = sketch(5);
    let start: Vec<f32> = s.particles.iter().map(|p| p.angle).collect();
    s.frame(Motion::REFERENCE, |_| {});

    let reverse = Motion::from_controls(&Controls {
        direction: Direction::CounterClockwise,
        ..Controls::default()
    });
    s.frame(reverse, |_| {});

    for (p, a0) in s.particles.iter().zip(start) {
        let (s1, c1) = p.angle.sin_cos();
        let (s0, c0) = a0.sin_cos();
        assert!((s1 - s0).abs() < 1e-4 && (c1 - c0).abs() < 1e-4);
    }
}

proptest! {
    #[test]
    fn resize_always_yields_full_population(
        seed: u64,
        w in 0.0f32..998.0,
        h in 0.0f32..4000.0,
        keep in 0usize..POPULATION,
    ) {
        let mut s = sketch(seed);
        s.particles.truncate(keep);
        s.resize(Vector2::new(w + 1.0, h)).unwrap();
        prop_assert_eq!(s.particles.len(), POPULATION);
        prop_assert!(s.particles[..POPULATION / 2].iter().all(|p| !p.is_chaotic()));
        prop_assert!(s.particles[POPULATION / 2..].iter().all(|p| p.is_chaotic()));
    }
}

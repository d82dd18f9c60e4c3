//! Helpers shared between the integration tests

#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayprobe_geometry::core::types::{Number, Vector3};

pub type TestRng = SmallRng;

/// How many random cases each property test checks
pub const CASES: usize = 1000;

/// A seeded RNG, so that failures are reproducible
pub fn rng() -> TestRng { TestRng::seed_from_u64(0x5EED) }

/// Returns a random vector in a cube (`-size..=size`)
pub fn vector_in_cube<R: Rng>(rng: &mut R, size: Number) -> Vector3 {
    let mut arr = [0.; 3];
    arr.fill_with(|| rng.gen_range(-size..=size));
    arr.into()
}

/// Returns a random vector in a unit sphere (`-1..=1`, `length <= 1`)
pub fn vector_in_unit_sphere<R: Rng>(rng: &mut R) -> Vector3 {
    loop {
        let v = vector_in_cube(rng, 1.);
        if v.length_squared() <= 1. {
            break v;
        }
    }
}

/// Returns a random vector on a unit sphere (`-1..=1`, `length = 1`)
pub fn vector_on_unit_sphere<R: Rng>(rng: &mut R) -> Vector3 {
    loop {
        let Some(vec) = vector_in_unit_sphere(rng).try_normalize() else {
            continue;
        };
        return vec;
    }
}

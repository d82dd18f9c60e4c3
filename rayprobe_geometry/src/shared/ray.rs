use crate::core::targets::RAY;
use crate::core::types::{Number, Vector3};
use crate::shared::validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;
use valuable::Valuable;

#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Valuable)]
pub enum RayInvalidError {
    /// The direction vector had zero length (or a non-finite component), so it couldn't be normalised
    #[error("the provided direction couldn't be normalised (zero length or non-finite)")]
    DegenerateDirection,
}

/// A directed half-line: a position, and a direction travelled from it.
///
/// Only points at a non-negative distance `t` along [Ray::dir] are "on" the ray.
///
/// # Invariants
/// The direction is always normalised. Normalisation happens once when the direction is written
/// (in [Ray::new] or [Ray::set_dir]), since directions are read far more often than they are set.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RayBuilder", into = "RayBuilder")]
pub struct Ray {
    pos: Vector3,
    dir: Vector3,
}

/// The raw, un-normalised form of a [Ray], as it appears in serialised data
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RayBuilder {
    pub pos: Vector3,
    pub dir: Vector3,
}

impl Ray {
    /// World-space coordinate of the ray
    #[inline(always)]
    pub fn pos(&self) -> Vector3 { self.pos }

    /// Direction vector of the ray.
    ///
    /// # Requirements
    /// Must be normalised
    #[inline(always)]
    pub fn dir(&self) -> Vector3 { self.dir }

    /// Creates a new ray, normalising the direction vector
    ///
    /// # Errors
    /// Returns [RayInvalidError::DegenerateDirection] if `dir` can't be normalised
    pub fn new(pos: Vector3, dir: Vector3) -> Result<Self, RayInvalidError> {
        let dir = normalise_dir(dir)?;
        Ok(Self { pos, dir })
    }

    /// Creates a new ray, without normalising the direction vector
    ///
    /// # Safety
    /// Unsafe as it does not normalise the direction, assuming the caller
    /// provided a correct vector, possibly breaking the invariant of a normalised direction
    pub unsafe fn new_unchecked(pos: Vector3, dir: Vector3) -> Self {
        validate::normal3(dir);
        Self { pos, dir }
    }

    /// Moves the ray, keeping its direction
    pub fn set_pos(&mut self, pos: Vector3) { self.pos = pos; }

    /// Points the ray in a new direction, normalising it before it is stored
    ///
    /// On error the ray is left unchanged
    pub fn set_dir(&mut self, dir: Vector3) -> Result<(), RayInvalidError> {
        self.dir = normalise_dir(dir)?;
        Ok(())
    }

    /// Gets the position at a given distance along the ray
    ///
    /// `pos + (t * dir)`
    pub fn at(&self, t: Number) -> Vector3 { self.pos + (self.dir * t) }
}

fn normalise_dir(dir: Vector3) -> Result<Vector3, RayInvalidError> {
    // Scale by the largest component first, else `dir·dir` overflows (or underflows to zero)
    // for very long (or very short) but perfectly valid directions
    let largest = dir.abs().max_element();
    let scaled = if dir.is_finite() && largest > 0. { Some(dir / largest) } else { None };

    match scaled.and_then(Vector3::try_normalize) {
        Some(n) => {
            validate::normal3(n);
            Ok(n)
        }
        None => {
            trace!(target: RAY, ?dir, "couldn't normalise ray direction");
            Err(RayInvalidError::DegenerateDirection)
        }
    }
}

impl TryFrom<RayBuilder> for Ray {
    type Error = RayInvalidError;

    fn try_from(value: RayBuilder) -> Result<Self, Self::Error> { Self::new(value.pos, value.dir) }
}

impl From<Ray> for RayBuilder {
    fn from(value: Ray) -> Self {
        Self {
            pos: value.pos,
            dir: value.dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn regular_construction() {
        let ray = Ray::new(Vector3::new(4., 5., 6.), Vector3::new(1., 2., 3.)).expect("valid ray");
        assert_eq!(ray.pos(), Vector3::new(4., 5., 6.));

        let mag = Number::sqrt(1. + 4. + 9.);
        assert_relative_eq!(ray.dir(), Vector3::new(1. / mag, 2. / mag, 3. / mag), epsilon = 1e-6);
    }

    #[test]
    fn zero_direction_rejected() {
        assert_eq!(
            Ray::new(Vector3::ZERO, Vector3::ZERO),
            Err(RayInvalidError::DegenerateDirection)
        );
        assert_eq!(
            Ray::new(Vector3::ZERO, Vector3::new(Number::NAN, 1., 0.)),
            Err(RayInvalidError::DegenerateDirection)
        );
        assert_eq!(
            Ray::new(Vector3::ZERO, Vector3::new(Number::INFINITY, 0., 0.)),
            Err(RayInvalidError::DegenerateDirection)
        );
    }

    #[test]
    fn extreme_lengths_normalise() {
        let long = Ray::new(Vector3::ZERO, Vector3::new(1e20, 0., 0.)).expect("long direction");
        assert_eq!(long.dir(), Vector3::X);

        let short = Ray::new(Vector3::ZERO, Vector3::new(1e-30, 0., 0.)).expect("short direction");
        assert_eq!(short.dir(), Vector3::X);

        let ray = Ray::new(Vector3::ZERO, Vector3::new(3e20, -4e20, 0.)).expect("long direction");
        assert_relative_eq!(ray.dir(), Vector3::new(0.6, -0.8, 0.), epsilon = 1e-6);

        let ray = Ray::new(Vector3::ZERO, Vector3::new(0., 3e-40, 4e-40)).expect("subnormal direction");
        assert_relative_eq!(ray.dir(), Vector3::new(0., 0.6, 0.8), epsilon = 1e-4);
    }

    #[test]
    fn set_dir_normalises() {
        let mut ray = Ray::new(Vector3::ZERO, Vector3::X).expect("valid ray");
        assert_eq!(ray.dir(), Vector3::X);

        ray.set_dir(Vector3::Y * 2.).expect("valid dir");
        assert_relative_eq!(ray.dir(), Vector3::Y);

        ray.set_dir(Vector3::ONE).expect("valid dir");
        let each = 1. / Number::sqrt(3.);
        assert_relative_eq!(ray.dir(), Vector3::splat(each), epsilon = 1e-6);

        ray.set_dir(Vector3::new(1., 0., 1.)).expect("valid dir");
        let each = 1. / Number::sqrt(2.);
        assert_relative_eq!(ray.dir(), Vector3::new(each, 0., each), epsilon = 1e-6);
    }

    #[test]
    fn failed_set_dir_keeps_old_dir() {
        let mut ray = Ray::new(Vector3::ONE, Vector3::Z).expect("valid ray");
        assert_eq!(ray.set_dir(Vector3::ZERO), Err(RayInvalidError::DegenerateDirection));
        assert_eq!(ray.dir(), Vector3::Z);
        assert_eq!(ray.pos(), Vector3::ONE);
    }

    #[test]
    fn at_distance() {
        let ray = Ray::new(Vector3::new(0., 0., -5.), Vector3::Z * 3.).expect("valid ray");
        assert_relative_eq!(ray.at(0.), Vector3::new(0., 0., -5.));
        assert_relative_eq!(ray.at(4.), Vector3::new(0., 0., -1.));
        assert_relative_eq!(ray.at(-1.), Vector3::new(0., 0., -6.));
    }

    #[test]
    fn unchecked_keeps_dir() {
        // SAFETY: `Vector3::NEG_Y` is already normalised
        let ray = unsafe { Ray::new_unchecked(Vector3::ZERO, Vector3::NEG_Y) };
        assert_eq!(ray.dir(), Vector3::NEG_Y);
    }
}

use crate::core::types::Vector3;
use crate::shared::ray::{Ray, RayInvalidError};
use serde::{Deserialize, Serialize};

/// An infinite, undirected line through two points.
///
/// Either point may be used to probe geometry: [Line::point1] is the anchor that the derived rays
/// start from, and [Line::point2] only gives the line its direction. The points are stored as given
/// and may coincide, in which case the line has no direction and no rays can be derived from it.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Line {
    /// The primary (anchor) point of the line
    pub point1: Vector3,
    /// The secondary point of the line
    pub point2: Vector3,
}

impl Line {
    /// Creates a new line through the two points, with `point1` as the anchor
    pub fn new(point1: impl Into<Vector3>, point2: impl Into<Vector3>) -> Self {
        Self {
            point1: point1.into(),
            point2: point2.into(),
        }
    }

    /// A ray anchored at [Line::point1], pointing *away* from [Line::point2]
    ///
    /// # Errors
    /// Fails with [RayInvalidError::DegenerateDirection] if the two points coincide
    pub fn inner_ray(&self) -> Result<Ray, RayInvalidError> { Ray::new(self.point1, self.point1 - self.point2) }

    /// A ray anchored at [Line::point1], pointing *towards* [Line::point2]
    ///
    /// # Errors
    /// Fails with [RayInvalidError::DegenerateDirection] if the two points coincide
    pub fn outer_ray(&self) -> Result<Ray, RayInvalidError> { Ray::new(self.point1, self.point2 - self.point1) }

    /// Exchanges the two points, so that [Line::point2] becomes the anchor.
    ///
    /// This flips the direction of both derived rays.
    pub fn swap_points(&mut self) { std::mem::swap(&mut self.point1, &mut self.point2); }

    /// Returns a copy of this line with its points exchanged. See [Line::swap_points]
    pub fn swapped(mut self) -> Self {
        self.swap_points();
        self
    }
}

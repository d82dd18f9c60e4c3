use crate::core::targets::SHAPE;
use crate::core::types::{Number, Vector3};
use crate::shape::{DetailedIntersectionGeometry, IntersectionGeometry, ShapeInstance, ShapeInvalidError, ShapeProperties};
use crate::shared::line::Line;
use crate::shared::math;
use crate::shared::ray::Ray;
use crate::shared::validate;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};
use static_assertions::assert_impl_all;
use tracing::trace;

/// A builder struct used to create a sphere
///
/// Call [TryInto::try_into] or [Sphere::try_from] to validate it into an actual [Sphere].
/// This is also the form a sphere takes when (de)serialised.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereBuilder {
    pub origin: Vector3,
    pub radius: Number,
}

/// A solid sphere, with a centre and a radius.
///
/// # Invariants
/// The radius is always positive, and its square is finite. This is checked on every write, not just on creation,
/// and a rejected write leaves the sphere untouched.
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters, Serialize, Deserialize)]
#[serde(try_from = "SphereBuilder", into = "SphereBuilder")]
#[get_copy = "pub"]
pub struct Sphere {
    /// The centre of the sphere
    origin: Vector3,
    /// The radius of the sphere, always `> 0`
    radius: Number,
}

assert_impl_all!(Sphere: Copy, Send, Sync);

impl Sphere {
    /// The unit sphere: centred at the origin, with radius `1`
    pub const UNIT: Self = Self {
        origin: Vector3::ZERO,
        radius: 1.,
    };

    /// Creates a new sphere
    ///
    /// # Errors
    /// Returns [ShapeInvalidError::InvalidShapeParameter] if the radius isn't positive, or is so large
    /// that its square overflows
    pub fn new(origin: impl Into<Vector3>, radius: Number) -> Result<Self, ShapeInvalidError> {
        Ok(Self {
            origin: origin.into(),
            radius: checked_radius(radius)?,
        })
    }

    /// Moves the centre of the sphere
    pub fn set_origin(&mut self, origin: impl Into<Vector3>) { self.origin = origin.into(); }

    /// Changes the radius of the sphere
    ///
    /// # Errors
    /// Returns [ShapeInvalidError::InvalidShapeParameter] if the radius isn't positive, or is so large
    /// that its square overflows,
    /// in which case the old radius is kept
    pub fn set_radius(&mut self, radius: Number) -> Result<(), ShapeInvalidError> {
        self.radius = checked_radius(radius)?;
        Ok(())
    }

    /// Solves for where the line through the ray crosses the surface of the sphere.
    ///
    /// # Return Value
    /// The two distances `(t1, t2)` along the ray, with `t1 <= t2`, or [None] if the line misses.
    /// Both distances are equal for a tangent, and either may be negative (behind the ray).
    fn roots(&self, ray: &Ray) -> Option<(Number, Number)> {
        validate::ray(ray);

        // For a point `p + t·d` on the ray to lie on the sphere, `|p + t·d - p0|² = r²`.
        // Expanding gives a quadratic in `t`
        let d = ray.dir();
        let rel_pos = ray.pos() - self.origin;

        // `d·d`, which is always one since `d` is normalised
        let a = 1.;
        let b = 2. * Vector3::dot(d, rel_pos);
        // `|rel|² - r²`, factored so it doesn't overflow for large spheres
        let dist = rel_pos.length();
        let c = (dist - self.radius) * (dist + self.radius);

        math::quadratic_roots(a, b, c)
    }

    /// The point at `dist` along the ray, checked to be on the surface in debug builds
    fn surface_point(&self, ray: &Ray, dist: Number) -> Vector3 {
        let point = ray.at(dist);
        validate::sphere_intersection(ray, dist, point, self.origin, self.radius);
        point
    }
}

/// Radii must be positive, and small enough that `r²` is still finite
fn checked_radius(radius: Number) -> Result<Number, ShapeInvalidError> {
    if radius > 0. && (radius * radius).is_finite() {
        Ok(radius)
    } else {
        trace!(target: SHAPE, radius, "rejected sphere radius");
        Err(ShapeInvalidError::InvalidShapeParameter { param: "radius", value: radius })
    }
}

/// Gets the ray a line is probed with, which is its inner ray
///
/// Lines through a single point have no direction, so can't intersect anything
fn line_ray(line: &Line) -> Option<Ray> {
    match line.inner_ray() {
        Ok(ray) => Some(ray),
        Err(err) => {
            trace!(target: SHAPE, ?line, ?err, "skipping line with coincident points");
            None
        }
    }
}

impl Default for Sphere {
    fn default() -> Self { Self::UNIT }
}

impl TryFrom<SphereBuilder> for Sphere {
    type Error = ShapeInvalidError;

    fn try_from(value: SphereBuilder) -> Result<Self, Self::Error> { Self::new(value.origin, value.radius) }
}

impl From<Sphere> for SphereBuilder {
    fn from(value: Sphere) -> Self {
        Self {
            origin: value.origin,
            radius: value.radius,
        }
    }
}

/// Converts the sphere builder into a [ShapeInstance]
impl TryFrom<SphereBuilder> for ShapeInstance {
    type Error = ShapeInvalidError;

    fn try_from(value: SphereBuilder) -> Result<Self, Self::Error> { Sphere::try_from(value).map(Self::from) }
}

impl ShapeProperties for Sphere {
    fn centre(&self) -> Vector3 { self.origin }
}

impl IntersectionGeometry for Sphere {
    fn intersects_point(&self, point: Vector3) -> bool {
        // Compare squares to skip the `sqrt()`
        (self.origin - point).length_squared() <= (self.radius * self.radius)
    }

    fn intersects_ray(&self, ray: &Ray) -> bool {
        // Only needs one root in front of the ray, no need to find the point
        self.roots(ray).is_some_and(|(t1, t2)| t1 >= 0. || t2 >= 0.)
    }

    fn intersects_line(&self, line: &Line) -> bool {
        // Lines extend both ways, so any real root is a hit
        line_ray(line).is_some_and(|ray| self.roots(&ray).is_some())
    }
}

impl DetailedIntersectionGeometry for Sphere {
    fn intersect_ray(&self, ray: &Ray) -> Option<Vector3> {
        let (t1, t2) = self.roots(ray)?;

        // Rays only go forwards, so take the nearest root that isn't behind the ray.
        // If the ray starts inside the sphere, that's the far root (where it exits)
        let dist = match (t1 >= 0., t2 >= 0.) {
            (true, true) => Number::min(t1, t2),
            (true, false) => t1,
            (false, true) => t2,
            (false, false) => return None,
        };

        Some(self.surface_point(ray, dist))
    }

    fn intersect_line(&self, line: &Line) -> Option<Vector3> {
        let ray = line_ray(line)?;
        let (t1, t2) = self.roots(&ray)?;

        // Both directions are valid along a line, so take whichever root is closest to the anchor point
        let dist = if t1.abs() < t2.abs() { t1 } else { t2 };

        Some(self.surface_point(&ray, dist))
    }
}

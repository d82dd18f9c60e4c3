//! # Module [crate::shape]
//!
//! This module contains the intersection contracts that every shape implements, and the submodules
//! for the different shape types.
//!
//! ## Related
//! - [IntersectionGeometry]
//! - [DetailedIntersectionGeometry]
//! - [ShapeInstance]
//! - [sphere]
//!
//! # DEV: Code Structure
//!
//! ## Shape Modules
//! Shapes are placed into named submodules, and those submodules are publicly exported.
//! Each shape is a plain value type whose invariants are checked on every write, so a shape that
//! exists is always valid and the query methods never have to fail.
//!
//! ## Example
//! Considering a "Sphere" shape:
//!
//! - File: `./sphere.rs`
//! - Add module: `pub mod sphere;`
//! - Structs: `SphereBuilder`, which is validated into `Sphere`
//! - Implement [ShapeProperties], [IntersectionGeometry] and [DetailedIntersectionGeometry] for `Sphere`
//! - Add an entry to [ShapeInstance] to correspond to the `Sphere` for static-dispatch
//!
//! Shapes defined outside this crate can't be added to [ShapeInstance], and should be wrapped
//! in a [DynamicShape] instead.

use crate::core::types::{Number, Vector3};
use crate::shared::line::Line;
use crate::shared::ray::Ray;
use crate::shared::GeomRequirement;
use enum_dispatch::enum_dispatch;
use thiserror::Error;
use valuable::Valuable;
// noinspection ALL - Used by enum_dispatch macro
#[allow(unused_imports)]
use self::{dynamic::DynamicShape, sphere::Sphere};

pub mod dynamic;
pub mod probe;
pub mod sphere;

// region Errors

#[derive(Error, Copy, Clone, Debug, PartialEq, Valuable)]
pub enum ShapeInvalidError {
    /// A parameter of the shape was given a value outside its valid range.
    /// The shape keeps its previous value for that parameter.
    #[error("invalid value {value} for shape parameter `{param}`")]
    InvalidShapeParameter {
        /// The name of the parameter that was rejected
        param: &'static str,
        /// The rejected value
        value: Number,
    },
}

// endregion Errors

// region Shape traits

/// This trait describes a shape, and the properties it has
#[enum_dispatch]
pub trait ShapeProperties: GeomRequirement {
    /// Gets the centre of the shape.
    fn centre(&self) -> Vector3;
}

/// Yes/no intersection queries against a shape.
///
/// All queries are pure: they never mutate the shape, and repeating a query gives the same answer.
#[enum_dispatch]
pub trait IntersectionGeometry: ShapeProperties {
    /// Whether the shape contains the given point (the boundary counts as inside)
    fn intersects_point(&self, point: Vector3) -> bool;

    /// Whether the ray hits the shape anywhere at or in front of its position
    fn intersects_ray(&self, ray: &Ray) -> bool;

    /// Whether the infinite line through both points of `line` crosses the shape
    fn intersects_line(&self, line: &Line) -> bool;
}

/// Intersection queries that also report *where* the hit happens.
///
/// This is a strict superset of [IntersectionGeometry]: for every ray/line,
/// `intersect_*(x).is_some() == intersects_*(x)`.
#[enum_dispatch]
pub trait DetailedIntersectionGeometry: IntersectionGeometry {
    /// Attempts to intersect the ray with the shape
    ///
    /// # Return Value
    /// This should return the *nearest* point on the shape's surface that lies on the ray, else [None]
    fn intersect_ray(&self, ray: &Ray) -> Option<Vector3>;

    /// Attempts to intersect the infinite line with the shape
    ///
    /// # Return Value
    /// This should return the surface point nearest to the line's anchor ([Line::point1]),
    /// in either direction along the line, else [None]
    fn intersect_line(&self, line: &Line) -> Option<Vector3>;
}

/// A closed set of shapes, using static-dispatch for all the shape traits.
///
/// Prefer this over `dyn` shapes when storing mixed shapes together, it is faster and can be cloned cheaply
#[enum_dispatch(ShapeProperties, IntersectionGeometry, DetailedIntersectionGeometry)]
#[derive(Clone, Debug)]
pub enum ShapeInstance {
    Sphere,
    DynamicShape,
}

// endregion Shape traits

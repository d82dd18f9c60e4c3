//! Ray, line and shape intersection testing.
//!
//! Callers build [Ray](shared::ray::Ray)s and [Line](shared::line::Line)s, then query any shape
//! implementing the [IntersectionGeometry](shape::IntersectionGeometry) contract (yes/no answers)
//! or the [DetailedIntersectionGeometry](shape::DetailedIntersectionGeometry) contract (which also
//! reports the nearest intersection point).
//!
//! All queries are pure functions of the shape and the probe, so shared shapes can be queried from
//! any number of threads at once. Mutating a shared shape needs external synchronisation.

pub mod core;
pub mod shape;
pub mod shared;

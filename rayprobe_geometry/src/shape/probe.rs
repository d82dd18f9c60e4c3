//! A single `intersects()` entry point for every kind of probe.
//!
//! Instead of picking between [IntersectionGeometry::intersects_point], [IntersectionGeometry::intersects_ray]
//! and [IntersectionGeometry::intersects_line], callers can write `shape.intersects(&probe)` with a point,
//! ray or line, and the right query is chosen at compile time.
//!
//! ```
//! use rayprobe_geometry::core::types::Vector3;
//! use rayprobe_geometry::shape::probe::{DetailedIntersectsExt, IntersectsExt};
//! use rayprobe_geometry::shape::sphere::Sphere;
//! use rayprobe_geometry::shared::{line::Line, ray::Ray};
//!
//! let sphere = Sphere::UNIT;
//! let ray = Ray::new(Vector3::new(0., 0., -5.), Vector3::Z).unwrap();
//!
//! assert!(sphere.intersects(&Vector3::ZERO));
//! assert!(sphere.intersects(&ray));
//! assert!(sphere.intersects(&Line::new(Vector3::NEG_ONE, Vector3::ONE)));
//! assert_eq!(sphere.intersection(&ray), Some(Vector3::NEG_Z));
//! ```

use crate::core::types::Vector3;
use crate::shape::{DetailedIntersectionGeometry, IntersectionGeometry};
use crate::shared::line::Line;
use crate::shared::ray::Ray;

/// Something that a shape can be tested against for intersection
pub trait Probe {
    fn probe<G: IntersectionGeometry + ?Sized>(&self, geometry: &G) -> bool;
}

/// A [Probe] that can also find where it hits a shape
pub trait DetailedProbe: Probe {
    fn probe_detailed<G: DetailedIntersectionGeometry + ?Sized>(&self, geometry: &G) -> Option<Vector3>;
}

impl Probe for Vector3 {
    fn probe<G: IntersectionGeometry + ?Sized>(&self, geometry: &G) -> bool { geometry.intersects_point(*self) }
}

impl Probe for Ray {
    fn probe<G: IntersectionGeometry + ?Sized>(&self, geometry: &G) -> bool { geometry.intersects_ray(self) }
}

impl DetailedProbe for Ray {
    fn probe_detailed<G: DetailedIntersectionGeometry + ?Sized>(&self, geometry: &G) -> Option<Vector3> {
        geometry.intersect_ray(self)
    }
}

impl Probe for Line {
    fn probe<G: IntersectionGeometry + ?Sized>(&self, geometry: &G) -> bool { geometry.intersects_line(self) }
}

impl DetailedProbe for Line {
    fn probe_detailed<G: DetailedIntersectionGeometry + ?Sized>(&self, geometry: &G) -> Option<Vector3> {
        geometry.intersect_line(self)
    }
}

/// Adds [IntersectsExt::intersects] to every [IntersectionGeometry]
pub trait IntersectsExt: IntersectionGeometry {
    /// Whether the probe intersects this shape
    fn intersects(&self, probe: &impl Probe) -> bool { probe.probe(self) }
}

impl<G: IntersectionGeometry + ?Sized> IntersectsExt for G {}

/// Adds [DetailedIntersectsExt::intersection] to every [DetailedIntersectionGeometry]
pub trait DetailedIntersectsExt: DetailedIntersectionGeometry {
    /// Where the probe intersects this shape, if it does
    fn intersection(&self, probe: &impl DetailedProbe) -> Option<Vector3> { probe.probe_detailed(self) }
}

impl<G: DetailedIntersectionGeometry + ?Sized> DetailedIntersectsExt for G {}

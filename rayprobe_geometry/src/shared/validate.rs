//! Debug-only assertions for the invariants the geometry relies on.
//!
//! Every check here compiles to nothing in release builds.

use crate::core::types::{Number, Vector3};
use crate::shared::ray::Ray;
use approx::*;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-4;
pub const RELATIVE: Number = 1e-3;

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();

    let val = val.borrow();
    assert!(!val.is_nan(), "should not be nan; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn vector3(v: impl Borrow<Vector3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn normal3(n: impl Borrow<Vector3>) {
    debug_assert_only!();
    let n = n.borrow();
    vector3(n);
    assert!(
        n.is_normalized(),
        "should be normalised; vec: {n:?}, len: {:?}",
        n.length()
    );
}

#[inline(always)]
#[track_caller]
pub fn ray(r: impl Borrow<Ray>) {
    debug_assert_only!();
    let r = r.borrow();
    normal3(r.dir());
}

/// Asserts that a reported intersection lies on the surface of the sphere it was reported for,
/// and on the (infinite) line through the ray
#[inline(always)]
#[track_caller]
pub fn sphere_intersection(ray: impl Borrow<Ray>, dist: Number, point: Vector3, centre: Vector3, radius: Number) {
    debug_assert_only!();

    let ray = ray.borrow();
    number(dist);
    vector3(point);

    assert!(
        Vector3::relative_eq(&point, &ray.at(dist), EPSILON, RELATIVE),
        "intersect position doesn't match ray at intersection dist; point: {point:?}, dist: {dist}, ray: {ray:?}, ray_pos: {r_pos:?}",
        r_pos = ray.at(dist)
    );

    // Scale the tolerance by the distances involved, far-away rays lose a lot of precision
    let tolerance = EPSILON * (1. + radius + dist.abs() + (ray.pos() - centre).length());
    let surface_dist = (point - centre).length();
    assert!(
        abs_diff_eq!(surface_dist, radius, epsilon = tolerance),
        "intersect position isn't on the sphere surface; point: {point:?}, centre: {centre:?}, radius: {radius}, dist_from_centre: {surface_dist}"
    );
}

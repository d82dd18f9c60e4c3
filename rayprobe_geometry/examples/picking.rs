//! Picks the nearest shape under a "cursor" ray, the way an editor viewport selects objects.
//!
//! Run with `RUST_LOG=trace` to see the crate's own trace output as well.

use rayprobe_geometry::core::types::{Number, Vector3};
use rayprobe_geometry::shape::probe::{DetailedIntersectsExt, IntersectsExt};
use rayprobe_geometry::shape::sphere::Sphere;
use rayprobe_geometry::shape::{ShapeInstance, ShapeInvalidError, ShapeProperties};
use rayprobe_geometry::shared::line::Line;
use rayprobe_geometry::shared::ray::Ray;
use std::error::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

rayprobe_geometry::tracing_targets! {
    PICK = "picking",
}

fn scene() -> Result<Vec<ShapeInstance>, ShapeInvalidError> {
    Ok(vec![
        Sphere::new((0., 0., 10.), 2.)?.into(),
        Sphere::new((0., 0., 20.), 5.)?.into(),
        Sphere::new((4., 1., 6.), 0.5)?.into(),
        // Dynamic shapes mix freely with the statically-dispatched ones
        ShapeInstance::from_dyn(Sphere::new((-3., 0., 8.), 1.)?),
    ])
}

/// Finds the shape whose surface is hit closest to the ray's position
fn pick<'a>(shapes: &'a [ShapeInstance], ray: &Ray) -> Option<(usize, &'a ShapeInstance, Vector3)> {
    shapes
        .iter()
        .enumerate()
        .filter_map(|(i, shape)| shape.intersection(ray).map(|hit| (i, shape, hit)))
        .min_by(|(.., a), (.., b)| {
            let dist = |p: &Vector3| -> Number { (*p - ray.pos()).length_squared() };
            dist(a).total_cmp(&dist(b))
        })
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let shapes = scene()?;
    info!(target: PICK, count = shapes.len(), "created scene");

    let eye = Vector3::new(0., 0., -5.);
    for aim in [Vector3::new(0., 0., 1.), Vector3::new(4., 1., 11.), Vector3::new(-3., 0., 13.), Vector3::Y] {
        let ray = Ray::new(eye, aim)?;
        match pick(&shapes, &ray) {
            Some((i, shape, hit)) => info!(target: PICK, i, centre = ?shape.centre(), ?hit, "picked shape"),
            None => info!(target: PICK, dir = ?ray.dir(), "nothing under cursor"),
        }
    }

    // Lines ignore which way they point, so a shape behind the eye is still found
    let behind = Line::new(eye, eye + Vector3::NEG_Z);
    let crossed = shapes.iter().filter(|s| s.intersects(&behind)).count();
    info!(target: PICK, crossed, "shapes along the view axis, both directions");

    // Rejected inputs are errors, not panics
    if let Err(err) = Ray::new(eye, Vector3::ZERO) {
        warn!(target: PICK, %err, "couldn't build ray");
    }
    if let Err(err) = Sphere::new(Vector3::ZERO, -1.) {
        warn!(target: PICK, %err, "couldn't build sphere");
    }

    Ok(())
}

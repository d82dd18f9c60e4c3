use crate::core::types::Vector3;
use crate::shape::{DetailedIntersectionGeometry, IntersectionGeometry, ShapeInstance, ShapeProperties};
use crate::shared::line::Line;
use crate::shared::ray::Ray;
use std::sync::Arc;

/// Shape wrapper around a `dyn` [DetailedIntersectionGeometry]; Delegates everything to the inner shape.
///
/// If possible use the enum variants on [ShapeInstance], so that static-dispatch is used instead of dynamic dispatch
#[derive(Clone, Debug)]
pub struct DynamicShape {
    pub inner: Arc<dyn DetailedIntersectionGeometry>,
}

impl DynamicShape {
    pub fn from(value: impl DetailedIntersectionGeometry + 'static) -> Self { Self { inner: Arc::new(value) } }
}

impl ShapeInstance {
    pub fn from_dyn(value: impl DetailedIntersectionGeometry + 'static) -> Self { Self::from(DynamicShape::from(value)) }
}

impl ShapeProperties for DynamicShape {
    fn centre(&self) -> Vector3 { self.inner.centre() }
}

impl IntersectionGeometry for DynamicShape {
    fn intersects_point(&self, point: Vector3) -> bool { self.inner.intersects_point(point) }

    fn intersects_ray(&self, ray: &Ray) -> bool { self.inner.intersects_ray(ray) }

    fn intersects_line(&self, line: &Line) -> bool { self.inner.intersects_line(line) }
}

impl DetailedIntersectionGeometry for DynamicShape {
    fn intersect_ray(&self, ray: &Ray) -> Option<Vector3> { self.inner.intersect_ray(ray) }

    fn intersect_line(&self, line: &Line) -> Option<Vector3> { self.inner.intersect_line(line) }
}

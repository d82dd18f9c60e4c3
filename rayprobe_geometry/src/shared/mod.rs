use std::fmt::Debug;

pub mod dirtyable;
pub mod line;
pub mod math;
pub mod ray;
pub mod validate;

/// A simple marker trait that enforces a few other traits we need
/// for every shape in the crate
pub trait GeomRequirement: Debug + Send + Sync {}
impl<T: Debug + Send + Sync> GeomRequirement for T {}

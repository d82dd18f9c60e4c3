/// Numeric type used for all geometry calculations in the crate
pub type Number = f32;
/// The 3-component vector used for points, directions and offsets alike
pub type Vector3 = glam::Vec3;

use glam::Vec3;

/// Rotation axis for [`rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotates `v` around the given axis by `angle` radians (right-handed).
/// Returns a new vector; the input is never modified.
pub fn rotate(v: Vec3, angle: f32, axis: Axis) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    match axis {
        Axis::X => Vec3::new(v.x, cos * v.y - sin * v.z, sin * v.y + cos * v.z),
        Axis::Y => Vec3::new(cos * v.x + sin * v.z, v.y, -(sin * v.x) + cos * v.z),
        Axis::Z => Vec3::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y, v.z),
    }
}

use glam::{Vec2, Vec3};

use crate::HALF_VIEW_SIZE;

/// Distance from the eye to the projection plane, in world units.
pub const PROJECTION_PLANE: f32 = 600.0;

// Divisor used when a point sits exactly on the near plane. A true zero
// would produce infinite screen coordinates.
const DEPTH_EPSILON: f32 = 1e-6;

/// Projects a camera-space point onto the screen.
///
/// Returns `None` when the point is behind the camera (negative depth).
/// A point exactly on the near plane projects to a finite position via the
/// epsilon divisor.
pub fn project(v: Vec3) -> Option<Vec2> {
    if v.z < 0.0 {
        return None;
    }
    let depth = if v.z > 0.0 {
        v.z / PROJECTION_PLANE
    } else {
        DEPTH_EPSILON
    };
    Some(Vec2::new(
        v.x / depth + HALF_VIEW_SIZE,
        v.y / depth + HALF_VIEW_SIZE,
    ))
}

/// Projects a camera-space line segment, clipping it against the near plane.
///
/// - Both endpoints behind the camera: the segment is invisible (`None`).
/// - Both in front: each endpoint projects independently.
/// - One behind: the segment is clipped where it crosses the z = 0 plane and
///   the visible portion is projected.
pub fn project_segment(a: Vec3, b: Vec3) -> Option<(Vec2, Vec2)> {
    if a.z < 0.0 && b.z < 0.0 {
        return None;
    }
    if a.z >= 0.0 && b.z >= 0.0 {
        return Some((project(a)?, project(b)?));
    }

    // v1 is the visible endpoint. Intersect with the plane z = 0, normal (0,0,1).
    let (v1, v2) = if a.z > b.z { (a, b) } else { (b, a) };
    let delta = v2 - v1;
    let normal = Vec3::Z;
    let t = -v1.dot(normal) / delta.dot(normal);
    let clipped = v1 + delta * t;

    Some((project(v1)?, project(clipped)?))
}

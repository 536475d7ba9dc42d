use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::math::{project, project_segment, rotate, Axis};
use crate::shape::Shape;
use crate::types::Color;
use crate::world::World;

/// Opacity of filled faces relative to the shape color.
pub const FACE_ALPHA: f32 = 0.20;
/// Accent color for vertex markers.
pub const MARKER_COLOR: Color = Color::GREEN;
/// Frame clear color.
pub const BACKGROUND: Color = Color::BLACK;

/// Sink for the 2D draw commands produced by the render pass. Commands
/// arrive in paint order and must be rasterized in that order; there is no
/// depth testing.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn quad(&mut self, corners: [Vec2; 4], color: Color);
    fn point(&mut self, at: Vec2, color: Color);
}

/// Transforms a shape's local vertices into camera space.
///
/// Composition order: spin around the shape center (if it animates), then
/// the projectile offset (if fired), then translate by the camera position
/// and rotate by the camera yaw.
pub fn camera_space_vertices(shape: &Shape, spin_angle: f32, camera: &Camera) -> Vec<Vec3> {
    let offset = shape.projectile_offset();
    shape
        .vertices
        .iter()
        .map(|&v| {
            let mut vec = v;
            if shape.animates {
                vec = rotate(vec - shape.center, spin_angle, Axis::Y) + shape.center;
            }
            if shape.bullet_angle.is_some() {
                vec += offset;
            }
            rotate(vec + camera.position, camera.yaw, Axis::Y)
        })
        .collect()
}

/// Draws one frame of the world. Read-only: all simulation state was
/// advanced beforehand by [`World::advance`].
///
/// Per shape, in world order: edges as stroked segments (near-plane
/// clipped), faces as translucent filled quads (skipped unless all four
/// corners project), and vertices as accent markers.
pub fn draw_world(world: &World, canvas: &mut dyn Canvas) {
    canvas.clear(BACKGROUND);

    for shape in &world.shapes {
        let vertices = camera_space_vertices(shape, world.spin_angle, &world.camera);

        for edge in &shape.edges {
            if let Some((from, to)) = project_segment(vertices[edge[0]], vertices[edge[1]]) {
                canvas.line(from, to, shape.color);
            }
        }

        let fill = shape.color.with_alpha(FACE_ALPHA);
        for face in &shape.faces {
            let corners = (
                project(vertices[face[0]]),
                project(vertices[face[1]]),
                project(vertices[face[2]]),
                project(vertices[face[3]]),
            );
            if let (Some(p0), Some(p1), Some(p2), Some(p3)) = corners {
                canvas.quad([p0, p1, p2, p3], fill);
            }
        }

        for &vertex in &vertices {
            if let Some(marker) = project(vertex) {
                canvas.point(marker, MARKER_COLOR);
            }
        }
    }
}

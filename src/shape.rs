use glam::Vec3;

use crate::math::{rotate, Axis};
use crate::types::Color;
use crate::FLOOR_HEIGHT;

/// A polyhedral object: local-space vertices plus edges and quad faces that
/// reference them by index.
///
/// Faces are always 4 indices; triangles repeat one index. Spin animation
/// (`animates`) and projectile motion (`bullet_angle`) are independent
/// transform paths and may combine.
#[derive(Debug, Clone)]
pub struct Shape {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[usize; 2]>,
    pub faces: Vec<[usize; 4]>,
    pub color: Color,
    /// Pivot for spin animation.
    pub center: Vec3,
    pub animates: bool,
    /// Present iff the shape is a fired projectile; y holds the yaw at fire time.
    pub bullet_angle: Option<Vec3>,
    /// Elapsed projectile age. Advances each tick until the projectile
    /// reaches the floor, then stays frozen.
    pub shoot_time: f32,
}

impl Shape {
    /// Builds a shape, validating that every edge and face index refers to an
    /// existing vertex.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range index. Malformed geometry is a programming
    /// error, not a recoverable condition.
    pub fn new(
        vertices: Vec<Vec3>,
        edges: Vec<[usize; 2]>,
        faces: Vec<[usize; 4]>,
        color: Color,
        center: Vec3,
        animates: bool,
        bullet_angle: Option<Vec3>,
    ) -> Self {
        let count = vertices.len();
        for edge in &edges {
            assert!(
                edge.iter().all(|&i| i < count),
                "edge {:?} references a vertex index out of range (vertex count {})",
                edge,
                count
            );
        }
        for face in &faces {
            assert!(
                face.iter().all(|&i| i < count),
                "face {:?} references a vertex index out of range (vertex count {})",
                face,
                count
            );
        }
        Self {
            vertices,
            edges,
            faces,
            color,
            center,
            animates,
            bullet_angle,
            shoot_time: 0.0,
        }
    }

    /// Axis-aligned box: `width` in x/z, `height` in y, centered at `center`.
    /// 8 vertices, 12 edges, 6 quad faces.
    pub fn cube(
        width: f32,
        height: f32,
        center: Vec3,
        animated: bool,
        color: Color,
        bullet_angle: Option<Vec3>,
    ) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let vertices: Vec<Vec3> = [
            Vec3::new(-half_w, half_h, -half_w),
            Vec3::new(-half_w, -half_h, -half_w),
            Vec3::new(half_w, -half_h, -half_w),
            Vec3::new(half_w, half_h, -half_w),
            Vec3::new(-half_w, half_h, half_w),
            Vec3::new(-half_w, -half_h, half_w),
            Vec3::new(half_w, -half_h, half_w),
            Vec3::new(half_w, half_h, half_w),
        ]
        .iter()
        .map(|&v| v + center)
        .collect();

        Self::new(
            vertices,
            vec![
                [0, 1],
                [1, 2],
                [2, 3],
                [3, 0],
                [4, 5],
                [5, 6],
                [6, 7],
                [7, 4],
                [0, 4],
                [1, 5],
                [2, 6],
                [3, 7],
            ],
            vec![
                [0, 1, 2, 3],
                [7, 6, 5, 4],
                [4, 5, 1, 0],
                [3, 2, 6, 7],
                [4, 0, 3, 7],
                [1, 5, 6, 2],
            ],
            color,
            center,
            animated,
            bullet_angle,
        )
    }

    /// Square pyramid: 4 base vertices plus an apex, centered at `center`.
    /// The 4 triangular faces are encoded as degenerate quads with the apex
    /// index repeated.
    pub fn pyramid(size: f32, center: Vec3, animated: bool, color: Color) -> Self {
        let half = size / 2.0;
        let vertices: Vec<Vec3> = [
            Vec3::new(-half, -half, half),
            Vec3::new(-half, -half, -half),
            Vec3::new(half, -half, -half),
            Vec3::new(half, -half, half),
            Vec3::new(0.0, half, 0.0),
        ]
        .iter()
        .map(|&v| v + center)
        .collect();

        Self::new(
            vertices,
            vec![
                [0, 1],
                [1, 2],
                [2, 3],
                [3, 0],
                [0, 4],
                [1, 4],
                [2, 4],
                [3, 4],
            ],
            vec![[0, 1, 4, 0], [1, 2, 4, 1], [2, 3, 4, 2], [3, 0, 4, 3]],
            color,
            center,
            animated,
            None,
        )
    }

    /// N x N grid of vertices at floor height. Only the boundary rows and
    /// columns are spanned by edges (not a full mesh), no faces, never
    /// animates.
    pub fn grid_floor(cell_count: usize, cell_size: f32) -> Self {
        let mut vertices = Vec::with_capacity(cell_count * cell_count);
        let half_grid = cell_count as f32 * cell_size / 2.0;
        for xi in 0..cell_count {
            for zi in 0..cell_count {
                let x = xi as f32 * cell_size - half_grid;
                let z = zi as f32 * cell_size - half_grid;
                vertices.push(Vec3::new(x, FLOOR_HEIGHT, z));
            }
        }

        let mut edges = Vec::with_capacity(cell_count * 2);
        for i in 0..cell_count {
            edges.push([i, cell_count * cell_count - cell_count + i]);
            edges.push([i * cell_count, i * cell_count + (cell_count - 1)]);
        }

        Self::new(
            vertices,
            edges,
            Vec::new(),
            Color::GRID_GREEN,
            Vec3::ZERO,
            false,
            None,
        )
    }

    /// World-space displacement of a fired projectile at its current age:
    /// a cubic drop in y and a quadratic advance in z, rotated into the
    /// firing direction. Zero for non-projectiles.
    pub fn projectile_offset(&self) -> Vec3 {
        match self.bullet_angle {
            Some(angle) => {
                let t = self.shoot_time;
                let arc = Vec3::new(0.0, -(t / 2.0).powi(3), 10.0 * t.powi(2));
                rotate(arc, -angle.y, Axis::Y)
            }
            None => Vec3::ZERO,
        }
    }
}

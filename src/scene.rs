use glam::Vec3;

use crate::shape::Shape;
use crate::types::Color;
use crate::{HALF_VIEW_SIZE, QUARTER_VIEW_SIZE, VIEW_SIZE};

/// Builds the default world: a floor grid, a large spinning cube ahead of
/// the starting camera, and pyramid-on-tower landmarks around the horizon.
///
/// List order is draw order. The floor comes first so everything else paints
/// over it; there is no depth buffer.
pub fn create_default_scene(grid_size: usize) -> Vec<Shape> {
    vec![
        Shape::grid_floor(grid_size, QUARTER_VIEW_SIZE),
        Shape::cube(
            HALF_VIEW_SIZE,
            HALF_VIEW_SIZE,
            Vec3::new(0.0, 0.0, VIEW_SIZE),
            true,
            Color::BLUE,
            None,
        ),
        Shape::pyramid(
            VIEW_SIZE,
            Vec3::new(-1200.0, VIEW_SIZE, 800.0),
            false,
            Color::GREEN,
        ),
        Shape::cube(
            QUARTER_VIEW_SIZE,
            VIEW_SIZE,
            Vec3::new(-1200.0, 0.0, 800.0),
            false,
            Color::BROWN,
            None,
        ),
        Shape::pyramid(
            VIEW_SIZE,
            Vec3::new(-1300.0, VIEW_SIZE, -500.0),
            false,
            Color::GREEN,
        ),
        Shape::cube(
            QUARTER_VIEW_SIZE,
            VIEW_SIZE,
            Vec3::new(-1300.0, 0.0, -500.0),
            false,
            Color::BROWN,
            None,
        ),
        Shape::pyramid(
            VIEW_SIZE,
            Vec3::new(600.0, VIEW_SIZE, 1300.0),
            false,
            Color::GREEN,
        ),
        Shape::cube(
            QUARTER_VIEW_SIZE,
            VIEW_SIZE,
            Vec3::new(600.0, 0.0, 1300.0),
            false,
            Color::BROWN,
            None,
        ),
        Shape::pyramid(
            VIEW_SIZE * 0.6,
            Vec3::new(1200.0, 260.0, 600.0),
            false,
            Color::GREEN,
        ),
        Shape::cube(
            QUARTER_VIEW_SIZE * 0.6,
            380.0,
            Vec3::new(1200.0, -100.0, 600.0),
            false,
            Color::BROWN,
            None,
        ),
    ]
}

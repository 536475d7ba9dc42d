use glam::Vec3;
use rand::Rng;

use crate::camera::Camera;
use crate::shape::Shape;
use crate::types::Color;
use crate::FLOOR_HEIGHT;

/// Spin accumulator increment per tick, radians.
pub const SPIN_STEP: f32 = 0.014;
/// Projectile age increment per tick while airborne.
pub const SHOOT_TIME_STEP: f32 = 0.84;
/// Edge length of fired projectile cubes.
pub const BOX_SIZE: f32 = 100.0;
/// Maximum yaw deviation applied to a fired projectile, radians.
pub const FIRE_JITTER: f32 = 0.25;

/// The mutable scene: an ordered shape list (insertion order is draw order,
/// and with it the implicit occlusion order), the camera, and the global spin
/// angle driving all animated shapes.
pub struct World {
    pub shapes: Vec<Shape>,
    pub camera: Camera,
    pub spin_angle: f32,
}

impl World {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            camera: Camera::new(),
            spin_angle: 0.0,
        }
    }

    /// One simulation tick: advance the spin accumulator, integrate camera
    /// input, and age airborne projectiles.
    ///
    /// A projectile ages only while its trajectory keeps it above the floor;
    /// once the computed position reaches `FLOOR_HEIGHT + BOX_SIZE / 2` its
    /// age freezes and the shape rests there. Shapes are never removed.
    pub fn advance(&mut self) {
        self.spin_angle += SPIN_STEP;
        self.camera.update();

        for shape in &mut self.shapes {
            if shape.bullet_angle.is_none() {
                continue;
            }
            let offset = shape.projectile_offset();
            if shape.center.y + offset.y > FLOOR_HEIGHT + BOX_SIZE / 2.0 {
                shape.shoot_time += SHOOT_TIME_STEP;
            }
        }
    }

    /// Spawns a projectile cube at the camera's world position, aimed along
    /// the current yaw with a small random deviation, in a random blend of
    /// magenta and yellow. The cube joins the spin animation and is appended
    /// to the draw order.
    pub fn fire(&mut self) {
        let mut rng = rand::thread_rng();
        let jitter = rng.gen_range(-FIRE_JITTER..=FIRE_JITTER);
        let angle = Vec3::new(0.0, self.camera.yaw + jitter, 0.0);
        let color = Color::MAGENTA.blended(rng.gen_range(0.0..=1.0), Color::YELLOW);

        let cube = Shape::cube(
            BOX_SIZE,
            BOX_SIZE,
            -self.camera.position,
            true,
            color,
            Some(angle),
        );
        self.shapes.push(cube);
    }
}

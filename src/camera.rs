use glam::Vec3;
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::math::{rotate, Axis};

pub const TURN_SPEED: f32 = 0.05;
pub const MOVE_SPEED: f32 = 40.0;

/// Held-key state. Written by keyboard events, read by the next tick.
#[derive(Default, Clone, Copy)]
pub struct MovementState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
}

impl MovementState {
    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Signed yaw rate in radians per tick. Left turn is positive.
    pub const fn turn_rate(&self) -> f32 {
        Self::to_direction(self.turn_left, self.turn_right) * TURN_SPEED
    }

    /// Signed displacement per tick along the view axis. Forward is negative,
    /// matching the camera integration convention below.
    pub const fn move_rate(&self) -> f32 {
        Self::to_direction(self.backward, self.forward) * MOVE_SPEED
    }
}

/// Perspective camera: position plus yaw (rotation around the vertical axis).
/// No pitch or roll.
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub movement: MovementState,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1500.0),
            yaw: 0.0,
            movement: MovementState::default(),
        }
    }

    /// Integrates one tick of held-key input.
    ///
    /// The displacement is the move rate rotated into the current heading.
    /// Its x and y components subtract from the position while z adds; this
    /// asymmetric convention defines the navigation feel and must not change.
    pub fn update(&mut self) {
        self.yaw += self.movement.turn_rate();
        let step = rotate(
            Vec3::new(0.0, 0.0, self.movement.move_rate()),
            self.yaw,
            Axis::Y,
        );
        self.position = Vec3::new(
            self.position.x - step.x,
            self.position.y - step.y,
            self.position.z + step.z,
        );
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::ArrowLeft => self.movement.turn_left = is_pressed,
                KeyCode::ArrowRight => self.movement.turn_right = is_pressed,
                KeyCode::ArrowUp => self.movement.forward = is_pressed,
                KeyCode::ArrowDown => self.movement.backward = is_pressed,
                _ => {}
            }
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

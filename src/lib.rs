pub mod camera;
pub mod cli;
pub mod math;
pub mod render;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod timer;
pub mod types;
pub mod world;

// === Viewport constants (reference units) ===

pub const VIEW_SIZE: f32 = 600.0;
pub const HALF_VIEW_SIZE: f32 = VIEW_SIZE / 2.0;
pub const QUARTER_VIEW_SIZE: f32 = VIEW_SIZE / 4.0;
pub const FLOOR_HEIGHT: f32 = -HALF_VIEW_SIZE;

pub use scene::create_default_scene;

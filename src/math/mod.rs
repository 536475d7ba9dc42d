mod project;
mod rotate;

pub use project::{project, project_segment, PROJECTION_PLANE};
pub use rotate::{rotate, Axis};

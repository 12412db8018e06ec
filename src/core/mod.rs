pub mod animation;
pub mod camera;
pub mod constants;
pub mod fit;
pub mod geometry;
pub mod tween;

pub use animation::*;
pub use camera::PerspectiveCamera;
pub use constants::*;
pub use fit::*;
pub use geometry::*;
pub use tween::*;

// Shaders bundled as string constants
pub static BACKGROUND_WGSL: &str = include_str!("../../shaders/background.wgsl");
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static LINES_WGSL: &str = include_str!("../../shaders/lines.wgsl");

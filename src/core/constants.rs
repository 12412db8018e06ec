use glam::Vec3;

// Scene layout and animation tuning shared by the scene model and the frame loop.

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 3.0, 2.0);

// Sphere
pub const SPHERE_RADIUS: f32 = 0.3;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 20;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 20;

// Bobbing animation: target = |sin(t)| * AMPLITUDE + BASE
pub const BOB_AMPLITUDE: f32 = 3.0;
pub const BOB_BASE: f32 = 0.3;
pub const BOB_TWEEN_SEC: f32 = 0.1; // retarget duration, re-issued every tick

// Helpers
pub const AXES_SIZE: f32 = 10.0;
pub const GRID_SIZE: f32 = 20.0;
pub const GRID_DIVISIONS: u32 = 20;
pub const AXIS_COLORS: [[f32; 3]; 3] = [
    [1.0, 0.0, 0.0], // x
    [0.0, 1.0, 0.0], // y
    [0.0, 0.0, 1.0], // z
];
pub const GRID_CENTER_COLOR: [f32; 3] = [0.27, 0.27, 0.27];
pub const GRID_LINE_COLOR: [f32; 3] = [0.53, 0.53, 0.53];

// Label
pub const LABEL_TEXT: &str = "Cool Logo";
pub const LABEL_HEIGHT: f32 = 0.2; // world units, cap height of the text quad
pub const LABEL_Y: f32 = 3.5;
pub const LABEL_Z: f32 = 0.0;

/// DOM, asset and renderer constants for the web front-end.
///
/// Scene layout and animation tuning live in `core/constants.rs`.

// DOM
pub const CANVAS_SELECTOR: &str = "canvas.landingCanvas";

// Assets (relative to the page)
pub const BACKGROUND_URL: &str = "background/main.png";
pub const FONT_URL: &str = "fonts/helvetiker_regular.woff2";
pub const FONT_FAMILY: &str = "helvetiker";

// Label rasterization: font size in canvas pixels; the quad is scaled to
// LABEL_HEIGHT world units so this only controls sharpness.
pub const LABEL_RASTER_PX: u32 = 96;
pub const LABEL_RASTER_PADDING_PX: u32 = 8;
pub const LABEL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const SPHERE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

use glam::{Mat4, Vec3};

/// Perspective camera with no rotation: it looks down -Z from `position`.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32, position: Vec3) -> Self {
        let mut cam = Self {
            fov_y_deg,
            aspect,
            near,
            far,
            position,
            projection: Mat4::IDENTITY,
        };
        cam.update_projection();
        cam
    }

    /// Sets the aspect ratio and refreshes the projection. Non-positive or
    /// non-finite ratios are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if !(aspect.is_finite() && aspect > 0.0) {
            return;
        }
        self.aspect = aspect;
        self.update_projection();
    }

    pub fn update_projection(&mut self) {
        // WebGPU clip space: depth in 0..1, so not the _gl variant.
        self.projection =
            Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view()
    }
}

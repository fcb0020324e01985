use cgmath::{Deg, InnerSpace, Matrix4, Point3, Quaternion, Rotation, Rotation3, Vector3};

/// Smallest and largest vertical field of view a perspective projection
/// accepts here, in degrees.
pub const FOV_MIN_DEG: f32 = 5.0;
pub const FOV_MAX_DEG: f32 = 175.0;
/// Step applied by [`Camera::widen_fov`] / [`Camera::narrow_fov`].
pub const FOV_STEP_DEG: f32 = 5.0;

/// Perspective look-at camera.  Only the parameters the frustum depends on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov_y: Deg<f32>,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::new(20.0, 15.0, 20.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::unit_y(),
            fov_y: Deg(45.0),
            near: 0.1,
            far: 50.0,
        }
    }
}

impl Camera {
    pub fn new(position: Point3<f32>, target: Point3<f32>) -> Self {
        Self { position, target, ..Self::default() }
    }

    pub fn view(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Matrix4<f32> {
        cgmath::perspective(self.fov_y, aspect, self.near, self.far)
    }

    /// `P * V`; feed this to [`crate::culling::frustum_from_vp`].
    pub fn view_projection(&self, aspect: f32) -> Matrix4<f32> {
        self.projection(aspect) * self.view()
    }

    pub fn set_fov(&mut self, fov_deg: f32) {
        self.fov_y = Deg(fov_deg.clamp(FOV_MIN_DEG, FOV_MAX_DEG));
    }

    pub fn widen_fov(&mut self) {
        self.set_fov(self.fov_y.0 + FOV_STEP_DEG);
    }

    pub fn narrow_fov(&mut self) {
        self.set_fov(self.fov_y.0 - FOV_STEP_DEG);
    }

    /// Swings the eye around `target` about the up axis, keeping distance.
    pub fn orbit(&mut self, angle: Deg<f32>) {
        let axis = self.up.normalize();
        let rot = Quaternion::from_axis_angle(axis, angle);
        let offset = rot.rotate_vector(self.position - self.target);
        self.position = self.target + offset;
    }

    pub fn distance_to_target(&self) -> f32 {
        (self.position - self.target).magnitude()
    }
}

/// Width / height, with a zero height treated as one pixel.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

use nalgebra::{Isometry3, Matrix4, Point3, Vector3};

/// A camera that circles a target in the XZ plane, always looking at it with +Y up.
///
/// At zero rotation the eye sits on the +Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    distance: f32,
    angle: f32,
    target: Point3<f32>,
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        Self {
            distance,
            angle: 0.0,
            target: Point3::origin(),
        }
    }

    pub fn with_target(mut self, target: Point3<f32>) -> Self {
        self.target = target;
        self
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
    }

    /// Accumulated rotation about the Y axis, in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn target(&self) -> Point3<f32> {
        self.target
    }

    pub fn spin_y(&mut self, radians: f32) {
        self.angle += radians;
    }

    pub fn reset(&mut self) {
        self.angle = 0.0;
    }

    pub fn eye(&self) -> Point3<f32> {
        let (sin, cos) = self.angle.sin_cos();
        self.target + Vector3::new(self.distance * sin, 0.0, self.distance * cos)
    }

    /// The right-handed world-to-view transform.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Isometry3::look_at_rh(&self.eye(), &self.target, &Vector3::y()).to_homogeneous()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(super::config::DEFAULT_CAMERA_DISTANCE)
    }
}

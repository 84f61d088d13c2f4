use molscene::engine::config::{
    DEFAULT_BOND_RADIUS, DEFAULT_CAMERA_DISTANCE, DEFAULT_CLOUD_ALPHA, DEFAULT_LABEL_OFFSET,
    DEFAULT_RADIUS_SCALE,
};
use molscene::workflows::view::DEFAULT_SPIN_PER_FRAME;

pub struct DefaultsConfig {
    pub camera_distance: f32,
    pub fit_to_model: bool,
    pub radius_scale: f32,
    pub electron_clouds: bool,
    pub cloud_alpha: f32,
    pub bond_radius: f32,
    pub skip_dangling: bool,
    pub labels: bool,
    pub label_offset: [f32; 3],
    pub frames: u64,
    pub spin_per_frame: f32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            fit_to_model: false,
            radius_scale: DEFAULT_RADIUS_SCALE,
            electron_clouds: true,
            cloud_alpha: DEFAULT_CLOUD_ALPHA,
            bond_radius: DEFAULT_BOND_RADIUS,
            skip_dangling: true,
            labels: true,
            label_offset: DEFAULT_LABEL_OFFSET,
            frames: 1,
            spin_per_frame: DEFAULT_SPIN_PER_FRAME,
        }
    }
}

use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {value}")]
    InvalidValue { name: &'static str, value: String },
}

pub const DEFAULT_CAMERA_DISTANCE: f32 = 5.0;
pub const DEFAULT_RADIUS_SCALE: f32 = 3.0;
pub const DEFAULT_BOND_RADIUS: f32 = 0.05;
pub const DEFAULT_CLOUD_ALPHA: f32 = 0.2;
pub const DEFAULT_LABEL_OFFSET: [f32; 3] = [0.05, -0.05, 0.0];

/// Drawing parameters for a [`Scene`](super::scene::Scene).
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub camera_distance: f32,
    /// Multiplier applied to every element's base radius.
    pub radius_scale: f32,
    pub bond_radius: f32,
    pub electron_clouds: bool,
    pub cloud_alpha: f32,
    pub labels: bool,
    pub label_offset: Vector3<f32>,
    /// Push the camera back far enough to see the whole model.
    pub fit_camera_to_model: bool,
    /// Skip bonds whose atoms are missing instead of failing the render.
    pub skip_dangling_bonds: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            radius_scale: DEFAULT_RADIUS_SCALE,
            bond_radius: DEFAULT_BOND_RADIUS,
            electron_clouds: true,
            cloud_alpha: DEFAULT_CLOUD_ALPHA,
            labels: true,
            label_offset: Vector3::from(DEFAULT_LABEL_OFFSET),
            fit_camera_to_model: false,
            skip_dangling_bonds: true,
        }
    }
}

#[derive(Default)]
pub struct SceneConfigBuilder {
    camera_distance: Option<f32>,
    radius_scale: Option<f32>,
    bond_radius: Option<f32>,
    electron_clouds: Option<bool>,
    cloud_alpha: Option<f32>,
    labels: Option<bool>,
    label_offset: Option<Vector3<f32>>,
    fit_camera_to_model: Option<bool>,
    skip_dangling_bonds: Option<bool>,
}

impl SceneConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera_distance(mut self, distance: f32) -> Self {
        self.camera_distance = Some(distance);
        self
    }
    pub fn radius_scale(mut self, scale: f32) -> Self {
        self.radius_scale = Some(scale);
        self
    }
    pub fn bond_radius(mut self, radius: f32) -> Self {
        self.bond_radius = Some(radius);
        self
    }
    pub fn electron_clouds(mut self, enabled: bool) -> Self {
        self.electron_clouds = Some(enabled);
        self
    }
    pub fn cloud_alpha(mut self, alpha: f32) -> Self {
        self.cloud_alpha = Some(alpha);
        self
    }
    pub fn labels(mut self, enabled: bool) -> Self {
        self.labels = Some(enabled);
        self
    }
    pub fn label_offset(mut self, offset: Vector3<f32>) -> Self {
        self.label_offset = Some(offset);
        self
    }
    pub fn fit_camera_to_model(mut self, enabled: bool) -> Self {
        self.fit_camera_to_model = Some(enabled);
        self
    }
    pub fn skip_dangling_bonds(mut self, enabled: bool) -> Self {
        self.skip_dangling_bonds = Some(enabled);
        self
    }

    /// Fills unset parameters with defaults and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-positive (or non-finite)
    /// camera distance, radius scale or bond radius, a cloud alpha outside
    /// `[0, 1]`, or a non-finite label offset.
    pub fn build(self) -> Result<SceneConfig, ConfigError> {
        let defaults = SceneConfig::default();
        let config = SceneConfig {
            camera_distance: self.camera_distance.unwrap_or(defaults.camera_distance),
            radius_scale: self.radius_scale.unwrap_or(defaults.radius_scale),
            bond_radius: self.bond_radius.unwrap_or(defaults.bond_radius),
            electron_clouds: self.electron_clouds.unwrap_or(defaults.electron_clouds),
            cloud_alpha: self.cloud_alpha.unwrap_or(defaults.cloud_alpha),
            labels: self.labels.unwrap_or(defaults.labels),
            label_offset: self.label_offset.unwrap_or(defaults.label_offset),
            fit_camera_to_model: self
                .fit_camera_to_model
                .unwrap_or(defaults.fit_camera_to_model),
            skip_dangling_bonds: self
                .skip_dangling_bonds
                .unwrap_or(defaults.skip_dangling_bonds),
        };

        require_positive("camera_distance", config.camera_distance)?;
        require_positive("radius_scale", config.radius_scale)?;
        require_positive("bond_radius", config.bond_radius)?;
        if !(0.0..=1.0).contains(&config.cloud_alpha) {
            return Err(ConfigError::InvalidValue {
                name: "cloud_alpha",
                value: config.cloud_alpha.to_string(),
            });
        }
        if !config.label_offset.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::InvalidValue {
                name: "label_offset",
                value: format!("{:?}", config.label_offset.as_slice()),
            });
        }
        Ok(config)
    }
}

fn require_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_defaults() {
        let config = SceneConfigBuilder::new().build().unwrap();
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.camera_distance, 5.0);
        assert_eq!(config.radius_scale, 3.0);
        assert_eq!(config.bond_radius, 0.05);
        assert!(config.electron_clouds && config.labels);
        assert!(!config.fit_camera_to_model);
        assert!(config.skip_dangling_bonds);
    }

    #[test]
    fn builder_overrides_selected_fields() {
        let config = SceneConfigBuilder::new()
            .camera_distance(12.0)
            .labels(false)
            .label_offset(Vector3::new(0.0, 0.1, 0.0))
            .build()
            .unwrap();
        assert_eq!(config.camera_distance, 12.0);
        assert!(!config.labels);
        assert_eq!(config.label_offset, Vector3::new(0.0, 0.1, 0.0));
        assert_eq!(config.radius_scale, DEFAULT_RADIUS_SCALE);
    }

    #[test]
    fn non_positive_lengths_are_rejected() {
        let err = SceneConfigBuilder::new()
            .camera_distance(0.0)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "camera_distance",
                value: "0".to_string()
            }
        );
        assert!(SceneConfigBuilder::new().bond_radius(-1.0).build().is_err());
        assert!(
            SceneConfigBuilder::new()
                .radius_scale(f32::NAN)
                .build()
                .is_err()
        );
    }

    #[test]
    fn cloud_alpha_must_be_a_fraction() {
        assert!(SceneConfigBuilder::new().cloud_alpha(1.0).build().is_ok());
        assert!(SceneConfigBuilder::new().cloud_alpha(0.0).build().is_ok());
        assert!(matches!(
            SceneConfigBuilder::new().cloud_alpha(1.5).build(),
            Err(ConfigError::InvalidValue {
                name: "cloud_alpha",
                ..
            })
        ));
    }
}

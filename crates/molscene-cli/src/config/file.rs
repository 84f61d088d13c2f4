use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileCameraConfig {
    pub distance: Option<f32>,
    pub fit_to_model: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileAtomsConfig {
    pub radius_scale: Option<f32>,
    pub electron_clouds: Option<bool>,
    pub cloud_alpha: Option<f32>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileBondsConfig {
    pub radius: Option<f32>,
    pub skip_dangling: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileLabelsConfig {
    pub enabled: Option<bool>,
    pub offset: Option<[f32; 3]>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileViewConfig {
    pub frames: Option<u64>,
    pub spin_per_frame: Option<f32>,
}

/// The `view` configuration file. Every table and key is optional.
///
/// ```toml
/// [camera]
/// distance = 5.0
/// fit-to-model = false
///
/// [atoms]
/// radius-scale = 3.0
/// electron-clouds = true
/// cloud-alpha = 0.2
///
/// [bonds]
/// radius = 0.05
/// skip-dangling = true
///
/// [labels]
/// enabled = true
/// offset = [0.05, -0.05, 0.0]
///
/// [view]
/// frames = 1
/// spin-per-frame = 0.01
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub camera: Option<FileCameraConfig>,
    pub atoms: Option<FileAtomsConfig>,
    pub bonds: Option<FileBondsConfig>,
    pub labels: Option<FileLabelsConfig>,
    pub view: Option<FileViewConfig>,
}

fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value.trim().parse().map_err(|e| {
        CliError::Config(format!("Invalid value for {}: '{}' ({})", key, value, e))
    })
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| {
            CliError::Config(format!("Failed to parse '{}': {}", path.display(), e))
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Applies `-S key=value` overrides on top of the file contents.
    pub fn apply_set_values(mut self, set_values: &[String]) -> Result<Self> {
        for kv_pair in set_values {
            let Some((key, value)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();

            match key {
                "camera.distance" => {
                    self.camera.get_or_insert_with(Default::default).distance =
                        Some(parse_value(key, value)?);
                }
                "camera.fit-to-model" => {
                    self.camera.get_or_insert_with(Default::default).fit_to_model =
                        Some(parse_value(key, value)?);
                }
                "atoms.radius-scale" => {
                    self.atoms.get_or_insert_with(Default::default).radius_scale =
                        Some(parse_value(key, value)?);
                }
                "atoms.electron-clouds" => {
                    self.atoms.get_or_insert_with(Default::default).electron_clouds =
                        Some(parse_value(key, value)?);
                }
                "atoms.cloud-alpha" => {
                    self.atoms.get_or_insert_with(Default::default).cloud_alpha =
                        Some(parse_value(key, value)?);
                }
                "bonds.radius" => {
                    self.bonds.get_or_insert_with(Default::default).radius =
                        Some(parse_value(key, value)?);
                }
                "bonds.skip-dangling" => {
                    self.bonds.get_or_insert_with(Default::default).skip_dangling =
                        Some(parse_value(key, value)?);
                }
                "labels.enabled" => {
                    self.labels.get_or_insert_with(Default::default).enabled =
                        Some(parse_value(key, value)?);
                }
                "view.frames" => {
                    self.view.get_or_insert_with(Default::default).frames =
                        Some(parse_value(key, value)?);
                }
                "view.spin-per-frame" => {
                    self.view.get_or_insert_with(Default::default).spin_per_frame =
                        Some(parse_value(key, value)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn empty_file_is_all_none() {
        assert_eq!(FileConfig::from_toml("").unwrap(), FileConfig::default());
    }

    #[test]
    fn reads_kebab_case_tables() {
        let config = FileConfig::from_toml(
            r#"
            [camera]
            distance = 8.0
            fit-to-model = true

            [labels]
            offset = [0.0, 0.1, 0.0]

            [view]
            spin-per-frame = 0.25
            "#,
        )
        .unwrap();
        let camera = config.camera.unwrap();
        assert_eq!(camera.distance, Some(8.0));
        assert_eq!(camera.fit_to_model, Some(true));
        assert_eq!(config.labels.unwrap().offset, Some([0.0, 0.1, 0.0]));
        assert_eq!(config.view.unwrap().spin_per_frame, Some(0.25));
        assert!(config.atoms.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml("[camera]\nzoom = 2.0\n").is_err());
        assert!(FileConfig::from_toml("[lighting]\n").is_err());
    }

    #[test]
    fn from_file_reports_parse_errors_as_config_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.toml");
        fs::write(&path, "[camera]\ndistance = \"far\"\n").unwrap();
        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FileConfig::from_file(&dir.path().join("absent.toml")),
            Err(CliError::Io(_))
        ));
    }

    #[test]
    fn set_values_fill_and_override_tables() {
        let config = FileConfig::from_toml("[camera]\ndistance = 8.0\n")
            .unwrap()
            .apply_set_values(&[
                "camera.distance=12".to_string(),
                "atoms.electron-clouds=false".to_string(),
                "view.frames = 4".to_string(),
            ])
            .unwrap();
        assert_eq!(config.camera.unwrap().distance, Some(12.0));
        assert_eq!(config.atoms.unwrap().electron_clouds, Some(false));
        assert_eq!(config.view.unwrap().frames, Some(4));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        let base = FileConfig::default();
        assert!(base.clone().apply_set_values(&["camera.distance".to_string()]).is_err());
        assert!(
            base.clone()
                .apply_set_values(&["camera.zoom=2".to_string()])
                .is_err()
        );
        assert!(
            base.apply_set_values(&["view.frames=many".to_string()])
                .is_err()
        );
    }
}

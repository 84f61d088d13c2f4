use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ViewArgs;
use crate::error::{CliError, Result};
use molscene::engine::config::SceneConfigBuilder;
use molscene::workflows::view::ViewRequest;
use nalgebra::Vector3;

pub fn build_config(args: &ViewArgs) -> Result<AppConfig> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let file_config = file_config.apply_set_values(&args.set_values)?;
    merge(args, file_config, &DefaultsConfig::default())
}

fn merge(
    args: &ViewArgs,
    mut file_config: FileConfig,
    defaults: &DefaultsConfig,
) -> Result<AppConfig> {
    let camera = file_config.camera.take().unwrap_or_default();
    let atoms = file_config.atoms.take().unwrap_or_default();
    let bonds = file_config.bonds.take().unwrap_or_default();
    let labels = file_config.labels.take().unwrap_or_default();
    let view = file_config.view.take().unwrap_or_default();

    let electron_clouds =
        !args.no_clouds && atoms.electron_clouds.unwrap_or(defaults.electron_clouds);
    let labels_enabled = !args.no_labels && labels.enabled.unwrap_or(defaults.labels);
    let label_offset = labels.offset.unwrap_or(defaults.label_offset);

    let scene = SceneConfigBuilder::new()
        .camera_distance(camera.distance.unwrap_or(defaults.camera_distance))
        .fit_camera_to_model(camera.fit_to_model.unwrap_or(defaults.fit_to_model))
        .radius_scale(atoms.radius_scale.unwrap_or(defaults.radius_scale))
        .electron_clouds(electron_clouds)
        .cloud_alpha(atoms.cloud_alpha.unwrap_or(defaults.cloud_alpha))
        .bond_radius(bonds.radius.unwrap_or(defaults.bond_radius))
        .skip_dangling_bonds(bonds.skip_dangling.unwrap_or(defaults.skip_dangling))
        .labels(labels_enabled)
        .label_offset(Vector3::from(label_offset))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let frames = args.frames.or(view.frames).unwrap_or(defaults.frames);
    if frames == 0 {
        return Err(CliError::Argument(
            "the number of frames must be at least 1".to_string(),
        ));
    }
    let request = ViewRequest {
        frames,
        spin_per_frame: args
            .spin
            .or(view.spin_per_frame)
            .unwrap_or(defaults.spin_per_frame),
    };

    Ok(AppConfig { scene, request })
}

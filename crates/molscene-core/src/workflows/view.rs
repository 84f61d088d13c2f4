use crate::core::models::molecule::MolecularModel;
use crate::engine::backend::{SceneBackend, load_model};
use crate::engine::config::SceneConfig;
use crate::engine::error::SceneError;
use crate::engine::frame::Frame;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scene::Scene;
use nalgebra::Point3;
use tracing::{info, instrument};

/// Rotation applied between frames by default, in radians.
pub const DEFAULT_SPIN_PER_FRAME: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRequest {
    pub frames: u64,
    pub spin_per_frame: f32,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            frames: 1,
            spin_per_frame: DEFAULT_SPIN_PER_FRAME,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameSummary {
    pub index: u64,
    pub eye: Point3<f32>,
    pub spheres: usize,
    pub capsules: usize,
    pub labels: usize,
}

impl From<&Frame> for FrameSummary {
    fn from(frame: &Frame) -> Self {
        Self {
            index: frame.index,
            eye: frame.eye,
            spheres: frame.spheres.len(),
            capsules: frame.capsules.len(),
            labels: frame.labels.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewReport {
    pub frames: Vec<FrameSummary>,
    pub last_frame: Frame,
}

/// Loads `model` into a fresh [`Scene`] and renders `request.frames` frames,
/// spinning the camera by `request.spin_per_frame` after each one.
///
/// # Errors
///
/// Returns [`SceneError::InvalidRequest`] for zero frames or a non-finite spin,
/// and any error a render produces.
#[instrument(skip_all, name = "view_workflow", fields(frames = request.frames))]
pub fn run(
    model: &MolecularModel,
    config: &SceneConfig,
    request: &ViewRequest,
    reporter: &ProgressReporter,
) -> Result<ViewReport, SceneError> {
    if request.frames == 0 {
        return Err(SceneError::InvalidRequest(
            "at least one frame must be rendered".to_string(),
        ));
    }
    if !request.spin_per_frame.is_finite() {
        return Err(SceneError::InvalidRequest(format!(
            "spin per frame must be finite, got {}",
            request.spin_per_frame
        )));
    }

    let mut scene = Scene::new(config.clone());
    load_model(&mut scene, model);
    reporter.report(Progress::ModelLoaded {
        atoms: model.atom_count(),
        bonds: model.bond_count(),
    });
    info!(
        "Loaded model with {} atoms and {} bonds.",
        model.atom_count(),
        model.bond_count()
    );
    if model.is_empty() {
        reporter.report(Progress::Message(
            "Model is empty; rendering placeholder spheres.".to_string(),
        ));
    }

    reporter.report(Progress::TaskStart {
        total_steps: request.frames,
    });
    let mut summaries = Vec::new();
    let mut last_frame = None;
    for _ in 0..request.frames {
        let frame = scene.render()?;
        summaries.push(FrameSummary::from(&frame));
        reporter.report(Progress::FrameRendered { index: frame.index });
        last_frame = Some(frame);
        scene.spin_y(request.spin_per_frame);
    }
    reporter.report(Progress::TaskFinish);

    let last_frame = last_frame.ok_or_else(|| {
        SceneError::InvalidRequest("no frame was rendered".to_string())
    })?;
    info!("Rendered {} frames.", summaries.len());
    Ok(ViewReport {
        frames: summaries,
        last_frame,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::SceneConfigBuilder;
    use std::sync::Mutex;

    #[test]
    fn single_frame_by_default() {
        let report = run(
            &MolecularModel::ethanol(),
            &SceneConfig::default(),
            &ViewRequest::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(report.frames.len(), 1);
        assert_eq!(report.frames[0].capsules, 8);
        assert_eq!(report.frames[0].spheres, 18);
        assert_eq!(report.frames[0].labels, 9);
        assert_eq!(report.last_frame.index, 0);
    }

    #[test]
    fn frames_are_numbered_and_the_camera_spins() {
        let request = ViewRequest {
            frames: 4,
            spin_per_frame: 0.5,
        };
        let report = run(
            &MolecularModel::simple(),
            &SceneConfig::default(),
            &request,
            &ProgressReporter::new(),
        )
        .unwrap();

        let indices: Vec<u64> = report.frames.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!((report.frames[0].eye - Point3::new(0.0, 0.0, 5.0)).norm() < 1e-5);
        let expected = Point3::new(5.0 * 1.5_f32.sin(), 0.0, 5.0 * 1.5_f32.cos());
        assert!((report.last_frame.eye - expected).norm() < 1e-4);
    }

    #[test]
    fn zero_frames_is_rejected() {
        let request = ViewRequest {
            frames: 0,
            ..ViewRequest::default()
        };
        let result = run(
            &MolecularModel::simple(),
            &SceneConfig::default(),
            &request,
            &ProgressReporter::new(),
        );
        assert!(matches!(result, Err(SceneError::InvalidRequest(_))));
    }

    #[test]
    fn strict_bond_handling_still_renders_valid_models() {
        let config = SceneConfigBuilder::new()
            .skip_dangling_bonds(false)
            .build()
            .unwrap();
        let report = run(
            &MolecularModel::triad(),
            &config,
            &ViewRequest::default(),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(report.frames[0].capsules, 2);
    }

    #[test]
    fn progress_events_bracket_the_frames() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let request = ViewRequest {
            frames: 2,
            spin_per_frame: 0.01,
        };
        run(
            &MolecularModel::default(),
            &SceneConfig::default(),
            &request,
            &reporter,
        )
        .unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events[0], Progress::ModelLoaded { atoms: 0, bonds: 0 });
        assert!(matches!(events[1], Progress::Message(_)));
        assert_eq!(events[2], Progress::TaskStart { total_steps: 2 });
        assert_eq!(events[3], Progress::FrameRendered { index: 0 });
        assert_eq!(events[4], Progress::FrameRendered { index: 1 });
        assert_eq!(events[5], Progress::TaskFinish);
    }
}

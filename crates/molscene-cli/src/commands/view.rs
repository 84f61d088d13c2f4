use super::source;
use crate::cli::ViewArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use molscene::engine::progress::ProgressReporter;
use molscene::workflows::{self, view::FrameSummary};
use std::io::Write;
use tracing::info;

pub fn run(args: ViewArgs) -> Result<()> {
    let loaded = source::load(&args.source)?;
    info!("Merging configuration from file and CLI arguments...");
    let app_config = config::build_config(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the view workflow...");
    let report = workflows::view::run(
        &loaded.model,
        &app_config.scene,
        &app_config.request,
        &reporter,
    )?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for summary in &report.frames {
        writeln!(out, "{}", format_summary(summary))?;
    }
    if report.last_frame.placeholder {
        writeln!(out, "(empty model: placeholder spheres drawn)")?;
    }
    Ok(())
}

pub fn format_summary(summary: &FrameSummary) -> String {
    format!(
        "frame {:>4}  eye ({:>8.4}, {:>8.4}, {:>8.4})  spheres {:>4}  capsules {:>4}  labels {:>4}",
        summary.index,
        summary.eye.x,
        summary.eye.y,
        summary.eye.z,
        summary.spheres,
        summary.capsules,
        summary.labels
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ModelSource;
    use molscene::core::models::reference::ReferenceMolecule;
    use nalgebra::Point3;

    #[test]
    fn summary_line_is_aligned() {
        let summary = FrameSummary {
            index: 3,
            eye: Point3::new(0.0, 0.0, 5.0),
            spheres: 18,
            capsules: 8,
            labels: 9,
        };
        assert_eq!(
            format_summary(&summary),
            "frame    3  eye (  0.0000,   0.0000,   5.0000)  spheres   18  capsules    8  labels    9"
        );
    }

    #[test]
    fn view_runs_end_to_end_for_a_reference_molecule() {
        let args = ViewArgs {
            source: ModelSource {
                molecule: Some(ReferenceMolecule::Simple),
                input: None,
            },
            config: None,
            frames: Some(2),
            spin: Some(0.1),
            no_labels: true,
            no_clouds: false,
            set_values: vec![],
        };
        run(args).unwrap();
    }
}

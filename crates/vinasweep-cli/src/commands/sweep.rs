use crate::cli::SweepArgs;
use crate::config::builder::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use tracing::{info, warn};
use vinasweep::{
    engine::{progress::ProgressReporter, runner::VinaEngine},
    workflows::{self, sweep::RunMode},
};

pub async fn run(args: SweepArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(&args)?;
    let config = &app_config.core_config;

    let engine = VinaEngine::new(config.engine_executable.clone());
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    eprintln!(
        "Starting docking sweep in {}...",
        config.work_dir.display()
    );
    info!("Invoking the core sweep workflow...");

    let summary = tokio::task::block_in_place(|| {
        workflows::sweep::run(config, &engine, app_config.mode, &reporter)
    })?;

    if app_config.mode == RunMode::DryRun {
        eprintln!(
            "Dry run complete: {} job file(s) written to {}.",
            summary.planned,
            config.work_dir.display()
        );
        return Ok(());
    }

    eprintln!(
        "Sweep complete: {} job(s) planned, {} already done, {} docked.",
        summary.planned,
        summary.skipped,
        summary.submitted - summary.failed
    );
    if summary.failed > 0 {
        warn!("{} job(s) failed and remain pending.", summary.failed);
        eprintln!(
            "Warning: {} job(s) failed; run the sweep again to retry them.",
            summary.failed
        );
    }

    Ok(())
}

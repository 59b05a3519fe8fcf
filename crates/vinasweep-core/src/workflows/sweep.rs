use crate::core::io::job_cache::JobCache;
use crate::core::io::structure::{PdbFile, StructureError, StructureFile};
use crate::core::io::vina_conf::VinaConfigFile;
use crate::core::io::vina_log;
use crate::core::models::bounding_box::BoundingBox;
use crate::core::models::grid::GridPlanner;
use crate::core::models::job::{JobDescriptor, JobParameters};
use crate::engine::config::SweepConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::runner::{DockingEngine, JobOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace};

/// Whether a sweep launches the docking engine or stops once the job files exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Dock,
    DryRun,
}

/// The grid of jobs for one sweep, before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPlan {
    pub receptor_box: BoundingBox,
    pub ligand_box: BoundingBox,
    pub system_box: BoundingBox,
    pub jobs: Vec<JobDescriptor>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub planned: usize,
    /// Jobs whose logs were already complete and were not resubmitted.
    pub skipped: usize,
    pub submitted: usize,
    /// Submitted jobs for which the engine exited unsuccessfully.
    pub failed: usize,
}

#[instrument(skip_all, name = "sweep_workflow")]
pub fn run(
    config: &SweepConfig,
    engine: &impl DockingEngine,
    mode: RunMode,
    reporter: &ProgressReporter,
) -> Result<SweepSummary, EngineError> {
    let plan = reporter.phase("Planning grid", || plan(config))?;
    info!(
        "Planned {} jobs over system box {:?} -> {:?}.",
        plan.jobs.len(),
        plan.system_box.min(),
        plan.system_box.max()
    );

    reporter.phase("Writing job files", || prepare(config, &plan, reporter))?;

    let mut summary = SweepSummary {
        planned: plan.jobs.len(),
        ..Default::default()
    };
    if mode == RunMode::DryRun {
        info!("Dry run requested; not launching the docking engine.");
        reporter.report(Progress::Message(format!(
            "Dry run: {} job(s) prepared, docking skipped.",
            summary.planned
        )));
        return Ok(summary);
    }

    reporter.phase("Docking", || -> Result<(), EngineError> {
        reporter.report(Progress::TaskStart {
            total_steps: plan.jobs.len() as u64,
        });
        for job in &plan.jobs {
            if vina_log::is_complete(&job.log_path) {
                debug!("Job {} already complete, skipping.", job.name);
                summary.skipped += 1;
                reporter.report(Progress::JobSkipped {
                    name: job.name.clone(),
                });
            } else {
                summary.submitted += 1;
                if let JobOutcome::Failed { .. } = engine.dock(job, &config.work_dir)? {
                    summary.failed += 1;
                    reporter.report(Progress::JobFailed {
                        name: job.name.clone(),
                    });
                }
            }
            reporter.report(Progress::TaskIncrement);
        }
        reporter.report(Progress::TaskFinish);
        Ok(())
    })?;

    info!(
        "Sweep finished: {} planned, {} skipped, {} submitted, {} failed.",
        summary.planned, summary.skipped, summary.submitted, summary.failed
    );
    Ok(summary)
}

/// Computes the job grid for `config` without touching the work directory.
pub fn plan(config: &SweepConfig) -> Result<SweepPlan, EngineError> {
    let receptor_box = read_bounding_box(&config.receptor_path)?;
    let ligand_box = read_bounding_box(&config.ligand_path)?;
    let system_box = receptor_box.union(&ligand_box);

    let planner = GridPlanner::new(config.box_size)?;
    let jobs = planner
        .plan(&system_box)
        .iter()
        .map(|cell| {
            trace!(
                "Cell {} at grid point {:?} centered on {:?}",
                cell.index,
                cell.ijk,
                cell.center
            );
            JobDescriptor::for_cell(cell, &config.work_dir)
        })
        .collect();

    Ok(SweepPlan {
        receptor_box,
        ligand_box,
        system_box,
        jobs,
    })
}

/// Creates the work directory, copies the inputs into it, writes one config per
/// job and replaces the job cache.
pub fn prepare(
    config: &SweepConfig,
    plan: &SweepPlan,
    reporter: &ProgressReporter,
) -> Result<(), EngineError> {
    let work_dir = &config.work_dir;
    fs::create_dir_all(work_dir).map_err(|source| EngineError::WorkDir {
        path: work_dir.clone(),
        source,
    })?;
    copy_into(work_dir, &config.receptor_path)?;
    copy_into(work_dir, &config.ligand_path)?;

    let params = JobParameters {
        cpu: config.cpu,
        receptor: config.receptor_file_name()?,
        ligand: config.ligand_file_name()?,
        extra_options: config.extra_options.clone(),
    };

    reporter.report(Progress::TaskStart {
        total_steps: plan.jobs.len() as u64,
    });
    for job in &plan.jobs {
        VinaConfigFile::write_job(job, &params).map_err(|source| EngineError::JobFile {
            path: job.config_path.clone(),
            source,
        })?;
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    let cache = JobCache::new(plan.jobs.iter().map(|job| job.log_path.clone()).collect());
    cache.write_to_path(&JobCache::path_in(work_dir))?;
    Ok(())
}

fn read_bounding_box(path: &Path) -> Result<BoundingBox, EngineError> {
    let to_engine_error = |source| EngineError::Structure {
        path: path.to_path_buf(),
        source,
    };
    let coords = PdbFile::read_from_path(path).map_err(to_engine_error)?;
    debug!("Read {} atoms from {:?}", coords.len(), path);
    coords
        .bounding_box()
        .ok_or_else(|| to_engine_error(StructureError::Empty))
}

fn copy_into(work_dir: &Path, source: &Path) -> Result<PathBuf, EngineError> {
    let file_name = source.file_name().ok_or_else(|| EngineError::WorkDir {
        path: source.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file path"),
    })?;
    let target = work_dir.join(file_name);
    let io_error = |source| EngineError::WorkDir {
        path: target.clone(),
        source,
    };

    if target.exists() {
        let same_file = fs::canonicalize(&target).map_err(io_error)?
            == fs::canonicalize(source).map_err(io_error)?;
        if same_file {
            debug!("{:?} is already in the work directory.", source);
            return Ok(target);
        }
    }
    fs::copy(source, &target).map_err(io_error)?;
    Ok(target)
}

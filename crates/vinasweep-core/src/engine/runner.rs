use super::error::EngineError;
use crate::core::models::job::JobDescriptor;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// What happened when a job was handed to the docking engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The engine exited successfully.
    Finished,
    /// The engine ran but exited unsuccessfully. The job stays eligible for the
    /// next sweep because its log will lack the completion marker.
    Failed { status: Option<i32>, stderr: String },
}

/// A docking program that turns one job config into one job log.
///
/// Implementations block until the job is over.
pub trait DockingEngine {
    fn dock(&self, job: &JobDescriptor, work_dir: &Path) -> Result<JobOutcome, EngineError>;
}

/// Runs `vina --config <job>.conf` inside the work directory.
#[derive(Debug, Clone)]
pub struct VinaEngine {
    executable: PathBuf,
}

impl VinaEngine {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl DockingEngine for VinaEngine {
    fn dock(&self, job: &JobDescriptor, work_dir: &Path) -> Result<JobOutcome, EngineError> {
        debug!(
            "Running {:?} --config {} in {:?}",
            self.executable,
            job.config_file_name(),
            work_dir
        );
        let output = Command::new(&self.executable)
            .arg("--config")
            .arg(job.config_file_name())
            .current_dir(work_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| EngineError::Launch {
                executable: self.executable.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(JobOutcome::Finished);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(
            "Docking engine exited with {} for job {}: {}",
            output.status, job.name, stderr
        );
        Ok(JobOutcome::Failed {
            status: output.status.code(),
            stderr,
        })
    }
}

use crate::core::io::job_cache::JobCache;
use crate::core::io::vina_log;
use crate::core::models::job::job_name_from_log;
use crate::engine::error::EngineError;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepStatus {
    pub total: usize,
    pub complete: usize,
    /// Names of jobs whose logs lack the completion marker, in flat-index order.
    pub pending: Vec<String>,
}

impl SweepStatus {
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}

pub fn run(work_dir: &Path) -> Result<SweepStatus, EngineError> {
    let cache = JobCache::read_from_path(&JobCache::path_in(work_dir))?;
    let mut status = SweepStatus {
        total: cache.logs.len(),
        ..Default::default()
    };
    for log in &cache.logs {
        if vina_log::is_complete(log) {
            status.complete += 1;
        } else {
            status.pending.push(job_name_from_log(log));
        }
    }
    Ok(status)
}

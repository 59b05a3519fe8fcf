use crate::core::io::job_cache::JobCache;
use crate::core::io::vina_log;
use crate::core::models::job::job_name_from_log;
use crate::core::models::results::{self, AggregatedResult, EnergySeries};
use crate::engine::error::EngineError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Parses every listed log that has a complete results table, keyed by job name.
///
/// Logs that are missing, unfinished or malformed are left out; they describe
/// jobs that have no results yet.
pub fn collect_energies(logs: &[PathBuf]) -> BTreeMap<String, EnergySeries> {
    let mut energies = BTreeMap::new();
    for log in logs {
        match vina_log::parse_energies(log) {
            Ok(series) => {
                energies.insert(job_name_from_log(log), series);
            }
            Err(e) => debug!("Skipping {:?}: {}", log, e),
        }
    }
    energies
}

/// Reads the job cache of `work_dir` and returns every binding mode with an
/// energy below `threshold`, sorted by job name.
#[instrument(skip_all, name = "extract_workflow")]
pub fn run(work_dir: &Path, threshold: f64) -> Result<Vec<AggregatedResult>, EngineError> {
    let cache = JobCache::read_from_path(&JobCache::path_in(work_dir))?;
    let energies = collect_energies(&cache.logs);
    info!(
        "Parsed results from {} of {} job logs.",
        energies.len(),
        cache.logs.len()
    );

    let results = results::aggregate(&energies, threshold);
    info!("{} binding modes below {}.", results.len(), threshold);
    Ok(results)
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name of the job cache inside a work directory.
pub const JOB_CACHE_FILE_NAME: &str = "jobs.toml";

#[derive(Debug, Error)]
pub enum JobCacheError {
    #[error("I/O error on job cache '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse job cache '{path}': {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize job cache: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The ordered list of log files a sweep expects, one per grid cell.
///
/// Written wholesale at the start of every sweep so that later tooling can find
/// the logs without re-planning the grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobCache {
    pub logs: Vec<PathBuf>,
}

impl JobCache {
    pub fn new(logs: Vec<PathBuf>) -> Self {
        Self { logs }
    }

    pub fn path_in(work_dir: &Path) -> PathBuf {
        work_dir.join(JOB_CACHE_FILE_NAME)
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), JobCacheError> {
        let content = toml::to_string(self)?;
        fs::write(path, content).map_err(|source| JobCacheError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote job cache with {} entries to {:?}", self.logs.len(), path);
        Ok(())
    }

    pub fn read_from_path(path: &Path) -> Result<Self, JobCacheError> {
        let content = fs::read_to_string(path).map_err(|source| JobCacheError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| JobCacheError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

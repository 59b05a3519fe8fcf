use super::config::ConfigError;
use crate::core::io::job_cache::JobCacheError;
use crate::core::io::structure::StructureError;
use crate::core::models::grid::GridError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read structure '{path}': {source}", path = path.display())]
    Structure {
        path: PathBuf,
        #[source]
        source: StructureError,
    },

    #[error("Grid planning failed: {0}")]
    Grid(#[from] GridError),

    #[error(transparent)]
    JobCache(#[from] JobCacheError),

    #[error("Failed to prepare work directory '{path}': {source}", path = path.display())]
    WorkDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write job file '{path}': {source}", path = path.display())]
    JobFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch docking engine '{executable}': {source}", executable = executable.display())]
    Launch {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

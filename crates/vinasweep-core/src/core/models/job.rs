use super::bounding_box::BoundingBox;
use super::grid::GridCell;
use std::path::{Path, PathBuf};

pub const CONFIG_EXTENSION: &str = "conf";
pub const LOG_EXTENSION: &str = "log";
pub const OUTPUT_EXTENSION: &str = "pdbqt";

/// Parameters shared by every job of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct JobParameters {
    pub cpu: usize,
    /// Receptor file name, relative to the work directory.
    pub receptor: String,
    /// Ligand file name, relative to the work directory.
    pub ligand: String,
    /// Pass-through `key = value` lines appended to every config, in order.
    pub extra_options: Vec<(String, String)>,
}

/// A single docking job derived from one grid cell.
///
/// The job name is the cell's flat index, so two cells never share a name and
/// rerunning the planner over the same inputs reproduces the same file names.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDescriptor {
    pub name: String,
    pub config_path: PathBuf,
    pub log_path: PathBuf,
    pub bbox: BoundingBox,
}

impl JobDescriptor {
    pub fn for_cell(cell: &GridCell, work_dir: &Path) -> Self {
        let name = cell.index.to_string();
        Self {
            config_path: work_dir.join(format!("{name}.{CONFIG_EXTENSION}")),
            log_path: work_dir.join(format!("{name}.{LOG_EXTENSION}")),
            bbox: cell.bbox,
            name,
        }
    }

    /// Config file name as the engine sees it from inside the work directory.
    pub fn config_file_name(&self) -> String {
        format!("{}.{CONFIG_EXTENSION}", self.name)
    }

    pub fn log_file_name(&self) -> String {
        format!("{}.{LOG_EXTENSION}", self.name)
    }

    pub fn output_file_name(&self) -> String {
        format!("{}.{OUTPUT_EXTENSION}", self.name)
    }
}

/// Recovers a job name from a log path: the file name without its `.log` suffix.
pub fn job_name_from_log(log_path: &Path) -> String {
    let file_name = log_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(&format!(".{LOG_EXTENSION}")) {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}

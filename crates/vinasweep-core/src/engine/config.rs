use nalgebra::Vector3;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_ENGINE_EXECUTABLE: &str = "vina";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Everything a sweep needs, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub receptor_path: PathBuf,
    pub ligand_path: PathBuf,
    pub box_size: Vector3<f64>,
    pub cpu: usize,
    pub work_dir: PathBuf,
    pub engine_executable: PathBuf,
    /// Extra `key = value` lines passed through to every Vina config, in order.
    pub extra_options: Vec<(String, String)>,
}

impl SweepConfig {
    /// Receptor file name as referenced from inside the work directory.
    pub fn receptor_file_name(&self) -> Result<String, ConfigError> {
        file_name_of(&self.receptor_path, "receptor")
    }

    /// Ligand file name as referenced from inside the work directory.
    pub fn ligand_file_name(&self) -> Result<String, ConfigError> {
        file_name_of(&self.ligand_path, "ligand")
    }
}

fn file_name_of(path: &Path, name: &'static str) -> Result<String, ConfigError> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ConfigError::InvalidParameter {
            name,
            reason: format!("'{}' does not name a file", path.display()),
        })
}

#[derive(Default)]
pub struct SweepConfigBuilder {
    receptor_path: Option<PathBuf>,
    ligand_path: Option<PathBuf>,
    box_size: Option<Vec<f64>>,
    cpu: Option<usize>,
    work_dir: Option<PathBuf>,
    engine_executable: Option<PathBuf>,
    extra_options: Vec<(String, String)>,
}

impl SweepConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receptor_path(mut self, path: PathBuf) -> Self {
        self.receptor_path = Some(path);
        self
    }
    pub fn ligand_path(mut self, path: PathBuf) -> Self {
        self.ligand_path = Some(path);
        self
    }
    pub fn box_size(mut self, size: Vec<f64>) -> Self {
        self.box_size = Some(size);
        self
    }
    pub fn cpu(mut self, cpu: usize) -> Self {
        self.cpu = Some(cpu);
        self
    }
    pub fn work_dir(mut self, path: PathBuf) -> Self {
        self.work_dir = Some(path);
        self
    }
    pub fn engine_executable(mut self, path: PathBuf) -> Self {
        self.engine_executable = Some(path);
        self
    }
    pub fn extra_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_options.push((key.into(), value.into()));
        self
    }
    pub fn extra_options(mut self, options: Vec<(String, String)>) -> Self {
        self.extra_options.extend(options);
        self
    }

    pub fn build(self) -> Result<SweepConfig, ConfigError> {
        let receptor_path = self
            .receptor_path
            .ok_or(ConfigError::MissingParameter("receptor"))?;
        let ligand_path = self
            .ligand_path
            .ok_or(ConfigError::MissingParameter("ligand"))?;
        let box_size = validate_box_size(
            self.box_size
                .ok_or(ConfigError::MissingParameter("box_size"))?,
        )?;
        let cpu = self.cpu.ok_or(ConfigError::MissingParameter("cpu"))?;
        if cpu == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "cpu",
                reason: "must be at least 1".to_string(),
            });
        }
        let work_dir = self
            .work_dir
            .ok_or(ConfigError::MissingParameter("work_dir"))?;

        let config = SweepConfig {
            receptor_path,
            ligand_path,
            box_size,
            cpu,
            work_dir,
            engine_executable: self
                .engine_executable
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENGINE_EXECUTABLE)),
            extra_options: self.extra_options,
        };
        config.receptor_file_name()?;
        config.ligand_file_name()?;
        Ok(config)
    }
}

fn validate_box_size(size: Vec<f64>) -> Result<Vector3<f64>, ConfigError> {
    let &[x, y, z] = size.as_slice() else {
        return Err(ConfigError::InvalidParameter {
            name: "box_size",
            reason: format!("expected 3 values, got {}", size.len()),
        });
    };
    if [x, y, z].iter().any(|s| !s.is_finite() || *s <= 0.0) {
        return Err(ConfigError::InvalidParameter {
            name: "box_size",
            reason: format!("all values must be positive, got [{x}, {y}, {z}]"),
        });
    }
    Ok(Vector3::new(x, y, z))
}

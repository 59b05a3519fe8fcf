use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileEngineConfig {
    pub executable: Option<PathBuf>,
}

/// The sweep configuration file as written by the user. Every field is optional
/// here; required parameters are enforced after CLI overrides are applied.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub receptor: Option<PathBuf>,
    pub ligand: Option<PathBuf>,
    pub box_size: Option<Vec<f64>>,
    pub cpu: Option<usize>,
    pub work_dir: Option<PathBuf>,
    pub engine: Option<FileEngineConfig>,
    /// Pass-through Vina options, written verbatim into every job config in
    /// the order they appear in the file.
    pub options: Option<toml::Table>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

/// Renders a TOML option value the way Vina expects to read it back.
pub fn option_value_to_string(key: &str, value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        other => Err(CliError::Config(format!(
            "Unsupported value for option '{}': {} (expected a string, number or boolean)",
            key,
            other.type_str()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parses_a_complete_sweep_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.toml");
        fs::write(
            &path,
            r#"
receptor = "inputs/receptor.pdbqt"
ligand = "inputs/ligand.pdbqt"
box-size = [20.0, 20.0, 24.0]
cpu = 8
work-dir = "run"

[engine]
executable = "/opt/vina/bin/vina"

[options]
exhaustiveness = 16
energy_range = 4.5
seed = "42"
"#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.receptor, Some(PathBuf::from("inputs/receptor.pdbqt")));
        assert_eq!(config.box_size, Some(vec![20.0, 20.0, 24.0]));
        assert_eq!(config.cpu, Some(8));
        assert_eq!(
            config.engine.unwrap().executable,
            Some(PathBuf::from("/opt/vina/bin/vina"))
        );
        let options = config.options.unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(
            option_value_to_string("energy_range", &options["energy_range"]).unwrap(),
            "4.5"
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.toml");
        fs::write(&path, "receptr = \"typo.pdbqt\"\n").unwrap();
        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn option_values_render_as_plain_text() {
        assert_eq!(
            option_value_to_string("k", &toml::Value::String("abc".into())).unwrap(),
            "abc"
        );
        assert_eq!(
            option_value_to_string("k", &toml::Value::Integer(16)).unwrap(),
            "16"
        );
        assert_eq!(
            option_value_to_string("k", &toml::Value::Boolean(true)).unwrap(),
            "true"
        );
        assert!(option_value_to_string("k", &toml::Value::Array(vec![])).is_err());
    }
}

use super::defaults::DefaultsConfig;
use super::file::{FileConfig, option_value_to_string};
use super::models::AppConfig;
use crate::cli::SweepArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use std::path::{Path, PathBuf};
use vinasweep::engine::config::SweepConfigBuilder;
use vinasweep::workflows::sweep::RunMode;

const OPTIONS_PREFIX: &str = "options.";

pub fn build_config(args: &SweepArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let mut builder = SweepConfigBuilder::new();
    if let Some(receptor) = args.receptor.clone().or(file_config.receptor.take()) {
        builder = builder.receptor_path(receptor);
    }
    if let Some(ligand) = args.ligand.clone().or(file_config.ligand.take()) {
        builder = builder.ligand_path(ligand);
    }
    if let Some(box_size) = args.box_size.clone().or(file_config.box_size.take()) {
        builder = builder.box_size(box_size);
    }
    if let Some(cpu) = args.cpu.or(file_config.cpu) {
        builder = builder.cpu(cpu);
    }
    if let Some(work_dir) = args.work_dir.clone().or(file_config.work_dir.take()) {
        builder = builder.work_dir(work_dir);
    }

    let engine_file = file_config.engine.take().unwrap_or_default();
    let executable = args
        .vina
        .clone()
        .or(engine_file.executable)
        .unwrap_or_else(|| PathBuf::from(defaults.engine_executable));
    builder = builder.engine_executable(executable);

    let mut extra_options = Vec::new();
    for (key, value) in file_config.options.take().unwrap_or_default() {
        let rendered = option_value_to_string(&key, &value)?;
        extra_options.push((key, rendered));
    }
    builder = builder.extra_options(extra_options);

    let core_config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        core_config,
        mode: if args.dry_run {
            RunMode::DryRun
        } else {
            RunMode::Dock
        },
    })
}

/// Work directory for commands that only read a finished or running sweep.
/// The CLI flag wins over the config file's `work-dir`.
pub fn resolve_work_dir(
    config_path: Option<&Path>,
    cli_work_dir: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(dir) = cli_work_dir {
        return Ok(dir.to_path_buf());
    }
    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    file_config.work_dir.ok_or_else(|| {
        CliError::Config(
            "A work directory is required either via --work-dir or `work-dir` in the config file."
                .to_string(),
        )
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "receptor" => config.receptor = Some(PathBuf::from(value_str)),
            "ligand" => config.ligand = Some(PathBuf::from(value_str)),
            "work-dir" => config.work_dir = Some(PathBuf::from(value_str)),
            "cpu" => {
                config.cpu = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "box-size" => {
                config.box_size = Some(
                    parser::parse_float_list(key, value_str)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "engine.executable" => {
                config
                    .engine
                    .get_or_insert_with(Default::default)
                    .executable = Some(PathBuf::from(value_str));
            }
            _ => match key.strip_prefix(OPTIONS_PREFIX) {
                Some(option) if !option.is_empty() => {
                    config.options.get_or_insert_with(Default::default).insert(
                        option.to_string(),
                        toml::Value::String(value_str.to_string()),
                    );
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            },
        }
    }
    Ok(config)
}

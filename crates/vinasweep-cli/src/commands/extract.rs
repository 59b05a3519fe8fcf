use crate::cli::ExtractArgs;
use crate::config::builder::resolve_work_dir;
use crate::error::{CliError, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::info;
use vinasweep::{core::io::report::write_report, workflows};

pub async fn run(args: ExtractArgs) -> Result<()> {
    let work_dir = resolve_work_dir(args.config.as_deref(), args.work_dir.as_deref())?;
    info!(
        "Extracting binding modes below {} from {:?}",
        args.threshold, &work_dir
    );

    let results =
        tokio::task::block_in_place(|| workflows::extract::run(&work_dir, args.threshold))?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_report(&results, BufWriter::new(file)).map_err(|e| {
                CliError::Other(
                    anyhow::Error::new(e)
                        .context(format!("Failed to write report to {}", path.display())),
                )
            })?;
            eprintln!(
                "✓ {} binding mode(s) written to: {}",
                results.len(),
                path.display()
            );
        }
        None => {
            write_report(&results, io::stdout().lock())
                .map_err(|e| CliError::Other(e.into()))?;
        }
    }

    Ok(())
}

use crate::cli::StatusArgs;
use crate::config::builder::resolve_work_dir;
use crate::error::Result;
use vinasweep::workflows;

pub async fn run(args: StatusArgs) -> Result<()> {
    let work_dir = resolve_work_dir(args.config.as_deref(), args.work_dir.as_deref())?;
    let status = workflows::status::run(&work_dir)?;

    println!(
        "{}/{} job(s) complete, {} pending.",
        status.complete,
        status.total,
        status.pending.len()
    );
    if args.list_pending {
        for name in &status.pending {
            println!("{}", name);
        }
    }
    if status.is_finished() {
        eprintln!("✓ Sweep finished.");
    }

    Ok(())
}

//! Approximates √2 with Newton's method and checks the digits against
//! `SquareRootTwo.txt` in the working directory.
//!
//! Takes no flags and reads no environment; logs go to stderr, the report to
//! stdout.

use anyhow::Result;
use sqrt_two::config::RunConfig;
use sqrt_two::tasks::SqrtCheckTask;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let task = SqrtCheckTask::new(RunConfig::default())?;
    let report = task.run()?;
    print!("{report}");
    Ok(())
}

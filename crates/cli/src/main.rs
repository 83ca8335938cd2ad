// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! harbor - river crossing simulation for hackers and serfs

use anyhow::{bail, Context, Result};
use clap::Parser;
use harbor_core::{audit, AuditOptions, HarborConfig, LogSink, RandomDelay};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

/// Output value that sends the log to standard output
const STDOUT_PATH: &str = "-";

#[derive(Parser)]
#[command(
    name = "harbor",
    version,
    about = "Hackers and serfs cross the river in groups of four",
    allow_negative_numbers = true
)]
struct Cli {
    /// Travelers generated per category (even, at least 2)
    person_count: String,

    /// Maximum pause between generated hackers, in milliseconds
    hacker_gen_time: String,

    /// Maximum pause between generated serfs, in milliseconds
    serf_gen_time: String,

    /// Maximum voyage duration, in milliseconds
    sail_time: String,

    /// Maximum pause before a retreated traveler comes back, in milliseconds
    check_pier: String,

    /// Travelers the pier holds at once (at least 5)
    pier_capacity: String,

    /// Where the event log goes ("-" for standard output)
    #[arg(short, long, default_value = "harbor.out")]
    output: PathBuf,

    /// Audit the log once the run finishes
    #[arg(long)]
    verify: bool,
}

impl Cli {
    fn config(&self) -> Result<HarborConfig> {
        let args = [
            &self.person_count,
            &self.hacker_gen_time,
            &self.serf_gen_time,
            &self.sail_time,
            &self.check_pier,
            &self.pier_capacity,
        ];
        HarborConfig::from_args(&args).context("invalid arguments")
    }

    fn writes_to_stdout(&self) -> bool {
        self.output == Path::new(STDOUT_PATH)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            // --help and --version are not failures
            return Ok(if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };

    setup_logging();

    let config = cli.config()?;
    if cli.verify && cli.writes_to_stdout() {
        bail!("--verify needs a log file, not standard output");
    }

    let sink = if cli.writes_to_stdout() {
        LogSink::stdout()
    } else {
        LogSink::create(&cli.output)
            .with_context(|| format!("failed to open {}", cli.output.display()))?
    };

    let options = AuditOptions::for_config(&config);
    let report = harbor_core::run(config, sink, RandomDelay)
        .await
        .context("simulation failed")?;
    info!(
        events = report.events,
        hackers = report.departed.hackers,
        serfs = report.departed.serfs,
        clean = report.clean_shutdown,
        "run complete"
    );

    if cli.verify {
        verify(&cli.output, &options)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn verify(path: &Path, options: &AuditOptions) -> Result<()> {
    let log = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let audited = audit(&log, options)
        .with_context(|| format!("{} failed the audit", path.display()))?;

    info!(
        events = audited.events,
        groups = audited.groups(),
        mixed = audited.mixed_groups,
        retreats = audited.retreats,
        "log verified"
    );
    eprintln!(
        "verified {} events: {} groups ({} mixed), {} retreats",
        audited.events,
        audited.groups(),
        audited.mixed_groups,
        audited.retreats
    );
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossing::{default_roster, load_roster, CrossingLog, GreedyStrategy, Roster, Strategy};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod render;

#[derive(Parser)]
#[command(name = "crossing")]
#[command(about = "Schedule a group across a two-person bridge at night")]
struct Cmd {
    /// YAML roster (`people: [{name, time}, ...]`); the built-in four when omitted
    input: Option<PathBuf>,

    /// Also write the log as JSON, with a provenance sidecar next to it
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip per-snapshot output; print only the total time
    #[arg(long)]
    quiet: bool,
}

/// What was run; shared by the JSON report and its provenance sidecar.
#[derive(Serialize)]
struct RunParams<'a> {
    strategy: &'a str,
    input: &'a str,
    people: usize,
}

#[derive(Serialize)]
struct Report<'a> {
    params: &'a RunParams<'a>,
    total_time: f64,
    trips: Vec<crossing::Trip>,
    log: &'a CrossingLog,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    let roster = match &cmd.input {
        Some(path) => load_roster(path)
            .with_context(|| format!("loading roster {}", path.display()))?,
        None => default_roster(),
    };
    run(&cmd, roster)
}

fn run(cmd: &Cmd, roster: Roster) -> Result<()> {
    let strategy = GreedyStrategy;
    let input = cmd
        .input
        .as_ref()
        .map_or_else(|| "<default>".to_string(), |p| p.display().to_string());
    let params = RunParams {
        strategy: strategy.name(),
        input: &input,
        people: roster.len(),
    };
    tracing::info!(
        input = params.input,
        people = params.people,
        strategy = params.strategy,
        "run"
    );

    let initial = roster.into_state().context("building the initial state")?;
    let log = strategy
        .solve(&initial)
        .context("strategy broke a crossing rule")?;
    tracing::info!(
        snapshots = log.len(),
        total_time = log.total_time(),
        "done"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::write_log(&mut out, &log, cmd.quiet)?;
    out.flush()?;

    if let Some(path) = &cmd.json {
        write_report(path, &params, &log)?;
    }
    Ok(())
}

fn write_report(path: &Path, params: &RunParams<'_>, log: &CrossingLog) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    let report = Report {
        params,
        total_time: log.total_time(),
        trips: log.trips(),
        log,
    };
    fs::write(path, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", path.display()))?;

    let sidecar = provenance::write_sidecar(path, params, report.total_time)?;
    tracing::info!(report = %path.display(), sidecar = %sidecar.display(), "report");
    Ok(())
}

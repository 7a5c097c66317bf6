// crates/pcm_cli/src/main.rs
//
// Single-invocation CLI: assemble a host pool, run the planner, print
// a report. No subcommands, no persistent state.

mod args;
mod config;
mod report;

use args::CliArgs;
use clap::Parser;
use config::{apply_overrides, load_plan_request, validate, ConfigError, Overrides, PlanRequest};
use pcm_hosts::{make_hosts, HostSource, SyntheticSpec};
use report::{render_json, render_text, LeagueReport};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    install_tracing(&args);

    match run(&args) {
        Ok(true) => ExitCode::from(0),
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("pcm: error: {e}");
            ExitCode::from(2)
        }
    }
}

fn install_tracing(args: &CliArgs) {
    let directive = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "pcm_planner=debug",
            _ => "pcm_planner=trace,pcm_hosts=debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Runs the whole pipeline. Returns `Ok(true)` for a non-empty league,
/// `Ok(false)` for an empty one (exit codes 0 / 1), `Err` for a
/// configuration problem (exit code 2).
fn run(args: &CliArgs) -> Result<bool, ConfigError> {
    let base = match &args.config {
        Some(path) => load_plan_request(path)?,
        None => PlanRequest::default(),
    };

    let host_source_override = host_source_override(args);
    let overrides = Overrides {
        max_hosts_per_team: args.max_hosts_per_team,
        max_teams: args.max_teams,
        max_var_hosts: args.max_var_hosts,
        max_var_teams: args.max_var_teams,
        size_outer: args.size_outer,
        size_inner: args.size_inner,
        aggressive: if args.aggressive { Some(true) } else { None },
        host_source: host_source_override,
    };
    let request = apply_overrides(base, overrides);
    validate(&request)?;

    let mut hosts = make_hosts(&request.host_source).map_err(|e| ConfigError::InvalidField {
        field: "host_source",
        reason: e.to_string(),
    })?;

    let league = pcm_planner::plan(&mut hosts, &request.params);
    let report = LeagueReport::from_league(&league);

    let rendered = match args.format.as_str() {
        "json" => render_json(&report).map_err(|e| ConfigError::Parse {
            path: "<report>".into(),
            reason: e.to_string(),
        })?,
        _ => render_text(&report),
    };
    if !args.quiet {
        print!("{rendered}");
    }

    Ok(!league.is_empty())
}

/// `--fixture` and the tier toggles/seed only matter when no explicit
/// `host_source` came from `--config`; CLI flags here fully replace the
/// config file's host source rather than merging field-by-field, since
/// synthetic-vs-fixture is a single discrete choice.
fn host_source_override(args: &CliArgs) -> Option<HostSource> {
    if args.fixture {
        return Some(HostSource::Fixture);
    }
    let toggles = args.tier_toggles();
    if toggles.cpu.is_none() && toggles.gpu.is_none() && toggles.npu.is_none() && args.seed.is_none() {
        return None;
    }
    Some(HostSource::Synthetic(SyntheticSpec {
        cpu: toggles.cpu.unwrap_or(true),
        gpu: toggles.gpu.unwrap_or(true),
        npu: toggles.npu.unwrap_or(true),
        seed: args.seed,
    }))
}

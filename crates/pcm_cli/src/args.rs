// crates/pcm_cli/src/args.rs
//
// Command-line surface: a single invocation runs host generation,
// planning, and a report. No subcommands.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pcm", about = "Plan a league of compute-host teams")]
pub struct CliArgs {
    /// PlanRequest file (JSON or TOML, by extension). Individual flags
    /// below override fields from this file when both are given.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use the fixed 23-host fixture instead of synthetic generation.
    #[arg(long)]
    pub fixture: bool,

    #[arg(long, action = ArgAction::SetTrue, overrides_with = "no_cpu")]
    pub cpu: bool,
    #[arg(long, action = ArgAction::SetTrue, overrides_with = "cpu")]
    pub no_cpu: bool,

    #[arg(long, action = ArgAction::SetTrue, overrides_with = "no_gpu")]
    pub gpu: bool,
    #[arg(long, action = ArgAction::SetTrue, overrides_with = "gpu")]
    pub no_gpu: bool,

    #[arg(long, action = ArgAction::SetTrue, overrides_with = "no_npu")]
    pub npu: bool,
    #[arg(long, action = ArgAction::SetTrue, overrides_with = "npu")]
    pub no_npu: bool,

    /// Seed for synthetic generation; omitted means OS-entropy seeded.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub max_hosts_per_team: Option<u32>,
    #[arg(long)]
    pub max_teams: Option<u32>,
    #[arg(long)]
    pub max_var_hosts: Option<f64>,
    #[arg(long)]
    pub max_var_teams: Option<f64>,
    #[arg(long)]
    pub size_outer: Option<f64>,
    #[arg(long)]
    pub size_inner: Option<f64>,
    #[arg(long)]
    pub aggressive: bool,

    /// Report format.
    #[arg(long, value_parser = ["text", "json"], default_value = "text")]
    pub format: String,

    /// Increase trace verbosity (repeatable: -v, -vv).
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output.
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Resolve the three `--x`/`--no-x` tier toggles into one `Option`
/// each: `None` means "unspecified, let the config/default decide".
pub struct TierToggles {
    pub cpu: Option<bool>,
    pub gpu: Option<bool>,
    pub npu: Option<bool>,
}

impl CliArgs {
    pub fn tier_toggles(&self) -> TierToggles {
        TierToggles {
            cpu: resolve_toggle(self.cpu, self.no_cpu),
            gpu: resolve_toggle(self.gpu, self.no_gpu),
            npu: resolve_toggle(self.npu, self.no_npu),
        }
    }
}

fn resolve_toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_toggle_prefers_whichever_flag_was_set() {
        assert_eq!(resolve_toggle(false, false), None);
        assert_eq!(resolve_toggle(true, false), Some(true));
        assert_eq!(resolve_toggle(false, true), Some(false));
    }
}

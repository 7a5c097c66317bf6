// crates/pcm_cli/src/config.rs
//
// PlanRequest loading and validation: a JobParams value plus a host
// source, read from an optional JSON/TOML file and overridden by
// individual CLI flags.

use pcm_core::JobParams;
use pcm_hosts::HostSource;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {reason}")]
    Parse { path: String, reason: String },
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

/// The full input to one planning run: algorithm parameters plus where
/// to get hosts from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(flatten)]
    pub params: JobParams,
    pub host_source: HostSource,
}

impl Default for PlanRequest {
    /// The fixture pool under the parameters used throughout the
    /// planner's own test scenarios.
    fn default() -> Self {
        PlanRequest {
            params: JobParams {
                max_hosts_per_team: 20,
                max_teams: 4,
                max_var_hosts: 1.5,
                max_var_teams: 1.4,
                size_outer: 10.0,
                size_inner: 10.0,
                aggressive: false,
            },
            host_source: HostSource::Fixture,
        }
    }
}

/// Read a `PlanRequest` from `path`, dispatching on its extension
/// (`.json` or `.toml`).
pub fn load_plan_request(path: &Path) -> Result<PlanRequest, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    } else {
        serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Per-field overrides layered on top of a base `PlanRequest`. `None`
/// leaves the base field untouched.
#[derive(Default)]
pub struct Overrides {
    pub max_hosts_per_team: Option<u32>,
    pub max_teams: Option<u32>,
    pub max_var_hosts: Option<f64>,
    pub max_var_teams: Option<f64>,
    pub size_outer: Option<f64>,
    pub size_inner: Option<f64>,
    pub aggressive: Option<bool>,
    pub host_source: Option<HostSource>,
}

pub fn apply_overrides(mut base: PlanRequest, overrides: Overrides) -> PlanRequest {
    if let Some(v) = overrides.max_hosts_per_team {
        base.params.max_hosts_per_team = v;
    }
    if let Some(v) = overrides.max_teams {
        base.params.max_teams = v;
    }
    if let Some(v) = overrides.max_var_hosts {
        base.params.max_var_hosts = v;
    }
    if let Some(v) = overrides.max_var_teams {
        base.params.max_var_teams = v;
    }
    if let Some(v) = overrides.size_outer {
        base.params.size_outer = v;
    }
    if let Some(v) = overrides.size_inner {
        base.params.size_inner = v;
    }
    if let Some(v) = overrides.aggressive {
        base.params.aggressive = v;
    }
    if let Some(v) = overrides.host_source {
        base.host_source = v;
    }
    base
}

/// Validate that every `JobParams` field in `req` is finite and within
/// its documented domain.
pub fn validate(req: &PlanRequest) -> Result<(), ConfigError> {
    let p = &req.params;
    if p.max_hosts_per_team < 1 {
        return Err(ConfigError::InvalidField {
            field: "max_hosts_per_team",
            reason: "must be >= 1".into(),
        });
    }
    if p.max_teams < 1 {
        return Err(ConfigError::InvalidField {
            field: "max_teams",
            reason: "must be >= 1".into(),
        });
    }
    check_finite_at_least("max_var_hosts", p.max_var_hosts, 1.0)?;
    check_finite_at_least("max_var_teams", p.max_var_teams, 1.0)?;
    check_finite_at_least("size_outer", p.size_outer, 0.0)?;
    check_finite_at_least("size_inner", p.size_inner, 0.0)?;
    Ok(())
}

fn check_finite_at_least(field: &'static str, value: f64, floor: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidField {
            field,
            reason: "must be finite".into(),
        });
    }
    if value < floor {
        return Err(ConfigError::InvalidField {
            field,
            reason: format!("must be >= {floor}"),
        });
    }
    Ok(())
}

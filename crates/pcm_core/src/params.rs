//! crates/pcm_core/src/params.rs
//! Immutable planning configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters governing one planning run. All fields are set by the
/// caller before planning begins and never change during it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JobParams {
    /// Maximum hosts a single team may hold.
    pub max_hosts_per_team: u32,
    /// Maximum teams a league may hold.
    pub max_teams: u32,
    /// Maximum tolerated ratio of fastest/slowest host within a team.
    pub max_var_hosts: f64,
    /// Maximum tolerated ratio of a team's total against `reference_throughput`.
    pub max_var_teams: f64,
    /// Total outer-data size divided among teams.
    pub size_outer: f64,
    /// Total inner-data size divided among a team's hosts.
    pub size_inner: f64,
    /// If set, suppress the cross-team upper-bound check while extending a team.
    pub aggressive: bool,
}

//! pcm_planner — The three-level grouping search.
//!
//! [`plan`] sorts a host pool and sweeps ceilings ([`find_team_set_top`]),
//! each of which sweeps outer-storage floors ([`find_team_set_2`]), each
//! of which runs one greedy sweep ([`find_team_set`]) that assembles
//! teams under a fixed ceiling and floor. This crate has no knowledge of
//! where hosts come from or how the result is reported.

#![forbid(unsafe_code)]

mod find_team_set;
mod find_team_set_2;
mod find_team_set_top;

pub use find_team_set::find_team_set;
pub use find_team_set_2::find_team_set_2;
pub use find_team_set_top::find_team_set_top;

use pcm_core::{Host, JobParams, League};

/// Plan a league over `hosts` under `params`. Sorts `hosts` in place.
/// Never errors: an infeasible or empty input simply yields an empty
/// league.
pub fn plan<'h>(hosts: &'h mut [Host], params: &JobParams) -> League<'h> {
    let span = tracing::info_span!(
        "plan",
        max_hosts_per_team = params.max_hosts_per_team,
        max_teams = params.max_teams,
        max_var_hosts = params.max_var_hosts,
        max_var_teams = params.max_var_teams,
        size_outer = params.size_outer,
        size_inner = params.size_inner,
        aggressive = params.aggressive,
    );
    let _enter = span.enter();
    find_team_set_top(hosts, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_on_empty_pool_is_empty_league() {
        let mut hosts: Vec<Host> = Vec::new();
        let params = JobParams {
            max_hosts_per_team: 20,
            max_teams: 4,
            max_var_hosts: 1.5,
            max_var_teams: 1.4,
            size_outer: 10.0,
            size_inner: 10.0,
            aggressive: false,
        };
        let league = plan(&mut hosts, &params);
        assert!(league.is_empty());
    }
}

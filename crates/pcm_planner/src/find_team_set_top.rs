//! crates/pcm_planner/src/find_team_set_top.rs
//! Sweeps the team-throughput ceiling upward and keeps the best league.

use crate::find_team_set_2::find_team_set_2;
use pcm_core::{sort_hosts, Host, JobParams, League};

/// Sort `hosts`, then sweep `ceiling` as the cumulative throughput of
/// the top-ranked `1..=min(max_hosts_per_team, pool_size)` hosts,
/// keeping whichever ceiling yields the highest-total-throughput
/// league.
pub fn find_team_set_top<'h>(hosts: &'h mut [Host], params: &JobParams) -> League<'h> {
    sort_hosts(hosts);
    let hosts: &'h [Host] = hosts;

    let mut best = League::new();
    if hosts.is_empty() {
        return best;
    }

    let n = (params.max_hosts_per_team as usize).min(hosts.len());
    let mut ceiling = 0.0;
    for i in 0..n {
        ceiling += hosts[i].throughput;
        let candidate = find_team_set_2(hosts, params, ceiling);
        tracing::debug!(
            i,
            ceiling,
            league_len = candidate.len(),
            league_total = candidate.total_throughput(),
            "ceiling sweep step"
        );

        if candidate.total_throughput() > best.total_throughput() {
            best = candidate.clone();
        }

        if let Some(first_team) = candidate.teams().first() {
            if first_team.size() < i + 1 {
                break;
            }
        }
    }
    best
}

//! crates/pcm_planner/src/find_team_set_2.rs
//! Adapts the outer-storage floor to the team count actually needed.

use crate::find_team_set::find_team_set;
use pcm_core::{Host, JobParams, League};

/// For `i` descending from `params.max_teams` to 1, try `outer_floor =
/// params.size_outer / i` and return the first resulting league with at
/// least `i` teams. An empty league if no tier suffices.
pub fn find_team_set_2<'h>(hosts: &'h [Host], params: &JobParams, ceiling: f64) -> League<'h> {
    for i in (1..=params.max_teams).rev() {
        let outer_floor = params.size_outer / i as f64;
        let league = find_team_set(hosts, params, ceiling, outer_floor);
        tracing::debug!(i, outer_floor, league_len = league.len(), "storage tier step");
        if league.len() >= i as usize {
            return league;
        }
    }
    League::new()
}

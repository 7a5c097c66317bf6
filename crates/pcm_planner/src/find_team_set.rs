//! crates/pcm_planner/src/find_team_set.rs
//! The single greedy sweep that turns a sorted host sequence, a ceiling,
//! and an outer-storage floor into one league.

use pcm_core::{Host, JobParams, League, Team};

/// One forward pass over `hosts`, admitting teams under `ceiling` and
/// `outer_floor`.
///
/// Preconditions: `hosts` is sorted by [`pcm_core::compare_hosts`];
/// `ceiling > 0`; `outer_floor >= 0`.
pub fn find_team_set<'h>(
    hosts: &'h [Host],
    params: &JobParams,
    ceiling: f64,
    outer_floor: f64,
) -> League<'h> {
    let span = tracing::debug_span!("find_team_set", ceiling, outer_floor);
    let _enter = span.enter();

    let mut league = League::new();
    let mut c: Team<'h> = Team::new();

    for h in hosts {
        if league.len() >= params.max_teams as usize {
            tracing::trace!("league reached max_teams, stopping sweep");
            break;
        }
        if h.outer_storage < outer_floor {
            tracing::trace!(host_id = h.id, "insufficient outer storage, skip");
            continue;
        }

        let advance = match league.reference_throughput() {
            None => step_regime_empty_league(&mut league, &mut c, h, params, ceiling),
            Some(reference) => {
                step_regime_nonempty_league(&mut league, &mut c, h, reference, params, ceiling)
            }
        };
        if !advance {
            break;
        }
    }

    finalize_trailing_candidate(&mut league, &mut c, params);
    league
}

/// Regime A (4.D): league is empty, only the ceiling and per-team
/// homogeneity bound constrain `C`. Returns whether the sweep should
/// advance to the next host (always `true`; this regime never
/// terminates the sweep early).
fn step_regime_empty_league<'h>(
    league: &mut League<'h>,
    c: &mut Team<'h>,
    h: &'h Host,
    params: &JobParams,
    ceiling: f64,
) -> bool {
    loop {
        if !c.is_empty() && h.throughput < c.max_throughput() / params.max_var_hosts {
            if c.prune_inner(params.size_inner) {
                continue;
            }
            tracing::debug!(size = c.size(), total = c.total_throughput(), "admit.1");
            league.add(c);
            c.clear();
            c.add(h);
            return true;
        }

        if c.total_throughput() + h.throughput > ceiling {
            if !c.is_empty() {
                if c.prune_inner(params.size_inner) {
                    continue;
                }
                tracing::debug!(size = c.size(), total = c.total_throughput(), "admit.2");
                league.add(c);
            }
            c.clear();
            c.add(h);
            return true;
        }

        c.add(h);
        if c.size() == params.max_hosts_per_team as usize {
            if c.prune_inner(params.size_inner) {
                c.remove_last_if(h);
                continue;
            }
            tracing::debug!(size = c.size(), total = c.total_throughput(), "admit.3");
            league.add(c);
            c.clear();
            return true;
        }
        return true;
    }
}

/// Regime B (4.D): league is non-empty, both the ceiling and the
/// cross-team bound constrain `C`. Returns whether the sweep should
/// advance; `false` signals the single early-termination branch.
fn step_regime_nonempty_league<'h>(
    league: &mut League<'h>,
    c: &mut Team<'h>,
    h: &'h Host,
    reference: f64,
    params: &JobParams,
    ceiling: f64,
) -> bool {
    loop {
        let x = c.total_throughput() + h.throughput;
        let exceeds_cross_team = !params.aggressive && x > reference * params.max_var_teams;

        if x > ceiling || exceeds_cross_team {
            if c.prune_inner(params.size_inner) {
                continue;
            }
            if c.total_throughput() < reference / params.max_var_teams {
                if c.is_empty() {
                    // Nothing left to shrink toward admission; stop trying
                    // to finalize C and start fresh with H instead.
                    c.add(h);
                    return true;
                }
                c.remove_first().expect("c is non-empty by the branch above");
                continue;
            }
            tracing::debug!(size = c.size(), total = c.total_throughput(), "admit.4");
            league.add(c);
            c.clear();
            c.add(h);
            return true;
        }

        if h.throughput < c.max_throughput() / params.max_var_hosts {
            if c.prune_inner(params.size_inner) {
                continue;
            }
            if c.is_empty() {
                c.add(h);
                return true;
            }
            if c.total_throughput() < reference / params.max_var_teams {
                c.remove_first().expect("c is non-empty by the branch above");
                continue;
            }
            tracing::debug!(size = c.size(), total = c.total_throughput(), "admit.5");
            league.add(c);
            c.clear();
            c.add(h);
            return true;
        }

        c.add(h);
        if c.prune_inner(params.size_inner) {
            return true;
        }

        if c.total_throughput() >= reference {
            tracing::debug!(size = c.size(), total = c.total_throughput(), "admit.6");
            league.add(c);
            c.clear();
            return true;
        }

        if c.size() == params.max_hosts_per_team as usize {
            if c.total_throughput() > reference / params.max_var_teams {
                tracing::debug!(size = c.size(), total = c.total_throughput(), "admit.7");
                league.add(c);
                c.clear();
                return true;
            }
            tracing::debug!(
                size = c.size(),
                total = c.total_throughput(),
                "terminate.full_team_too_slow"
            );
            return false;
        }
        return true;
    }
}

/// After the sweep: prune once more and admit the trailing candidate if
/// it clears the cross-team floor. Before any team has ever been
/// admitted there is no floor to clear against, so a non-empty
/// candidate is admitted unconditionally — Regime A never gated
/// admission on a cross-team ratio in the first place.
fn finalize_trailing_candidate<'h>(league: &mut League<'h>, c: &mut Team<'h>, params: &JobParams) {
    if league.len() >= params.max_teams as usize {
        return;
    }
    c.prune_inner(params.size_inner);
    if c.is_empty() {
        return;
    }
    match league.reference_throughput() {
        Some(reference) if c.total_throughput() <= reference / params.max_var_teams => {}
        _ => {
            tracing::debug!(size = c.size(), total = c.total_throughput(), "admit.8");
            league.add(c);
        }
    }
}

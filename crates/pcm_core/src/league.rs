//! crates/pcm_core/src/league.rs
//! An ordered collection of accepted teams.

use crate::team::Team;

/// The outcome of a planning pass: zero or more accepted teams, in
/// acceptance order, plus the throughput anchor used to judge later
/// teams' cross-team homogeneity.
#[derive(Clone, Debug, Default)]
pub struct League<'h> {
    teams: Vec<Team<'h>>,
    total_throughput: f64,
    reference_throughput: Option<f64>,
}

impl<'h> League<'h> {
    pub fn new() -> Self {
        League {
            teams: Vec::new(),
            total_throughput: 0.0,
            reference_throughput: None,
        }
    }

    pub fn teams(&self) -> &[Team<'h>] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn total_throughput(&self) -> f64 {
        self.total_throughput
    }

    /// The first accepted team's total throughput, captured at acceptance
    /// and never updated. `None` iff the league is empty.
    pub fn reference_throughput(&self) -> Option<f64> {
        self.reference_throughput
    }

    /// Deep-copy `team` and append it. If this is the first team admitted,
    /// its total throughput becomes [`reference_throughput`].
    ///
    /// [`reference_throughput`]: League::reference_throughput
    pub fn add(&mut self, team: &Team<'h>) {
        if self.teams.is_empty() {
            self.reference_throughput = Some(team.total_throughput());
        }
        self.total_throughput += team.total_throughput();
        self.teams.push(team.clone());
    }

    /// Empty the league and forget the reference throughput.
    pub fn clear(&mut self) {
        self.teams.clear();
        self.total_throughput = 0.0;
        self.reference_throughput = None;
    }
}

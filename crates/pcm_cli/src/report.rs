// crates/pcm_cli/src/report.rs
//
// Human-readable and JSON summaries of a planned league. `League` and
// `Team` hold borrowed hosts and have no serde impls of their own, so
// this module flattens them into owned summary DTOs first.

use pcm_core::League;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TeamReport {
    pub host_ids: Vec<u64>,
    pub size: usize,
    pub total_throughput: f64,
    pub max_throughput: f64,
}

#[derive(Debug, Serialize)]
pub struct LeagueReport {
    pub teams: Vec<TeamReport>,
    pub total_throughput: f64,
    pub reference_throughput: Option<f64>,
}

impl LeagueReport {
    pub fn from_league(league: &League) -> Self {
        LeagueReport {
            teams: league
                .teams()
                .iter()
                .map(|t| TeamReport {
                    host_ids: t.hosts().iter().map(|h| h.id).collect(),
                    size: t.size(),
                    total_throughput: t.total_throughput(),
                    max_throughput: t.max_throughput(),
                })
                .collect(),
            total_throughput: league.total_throughput(),
            reference_throughput: league.reference_throughput(),
        }
    }
}

pub fn render_text(report: &LeagueReport) -> String {
    let mut out = String::new();
    if report.teams.is_empty() {
        out.push_str("league: empty (no feasible grouping)\n");
        return out;
    }
    out.push_str(&format!(
        "league: {} team(s), total throughput {:.6}\n",
        report.teams.len(),
        report.total_throughput
    ));
    for (i, team) in report.teams.iter().enumerate() {
        out.push_str(&format!(
            "  team {}: {} host(s), total {:.6}, max {:.6}, hosts {:?}\n",
            i + 1,
            team.size,
            team.total_throughput,
            team.max_throughput,
            team.host_ids
        ));
    }
    out
}

pub fn render_json(report: &LeagueReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

//! pcm_core — Core types for the league planner.
//!
//! This crate is pure data + invariant-preserving mutation: `Host`
//! (4.A), `Team` (4.B), `League` (4.C), `JobParams`, and the one host
//! ordering the planner uses (4.G). It has no knowledge of the search
//! algorithm itself (that lives in `pcm_planner`) and no I/O.

#![forbid(unsafe_code)]

mod host;
mod league;
mod ordering;
mod params;
mod team;

pub use host::Host;
pub use league::League;
pub use ordering::{compare_hosts, sort_hosts};
pub use params::JobParams;
pub use team::{Team, TeamError};

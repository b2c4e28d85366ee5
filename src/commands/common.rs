//! Lookups shared by the report builders.

use crate::{
    cli::types::TeamId,
    espn::{
        compute::owner_name,
        types::{League, MatchupSide, Team},
    },
};

/// Placeholder for the missing side of a bye week.
pub const BYE: &str = "BYE";

/// Display name of team `id`, `Team <id>` when the league does not list it.
pub fn team_name(league: &League, id: TeamId) -> String {
    league
        .team(id)
        .map(Team::display_name)
        .unwrap_or_else(|| format!("Team {}", id))
}

/// Resolve a raw team reference from a message-board entry.
pub fn team_by_raw_id(league: &League, raw: Option<i64>) -> Option<&Team> {
    raw.and_then(|id| u32::try_from(id).ok())
        .and_then(|id| league.team(TeamId::new(id)))
}

/// Owners of `team` as `First Last, First Last`; unknown member IDs are skipped.
pub fn owners_of(league: &League, team: &Team) -> String {
    team.owners
        .iter()
        .filter_map(|id| league.member(id))
        .map(owner_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Name and score of one side of a matchup; a bye renders `BYE` with 0.
pub fn side_summary(league: &League, side: Option<&MatchupSide>) -> (String, f64) {
    match side {
        Some(side) => (team_name(league, side.team_id), side.total_points),
        None => (BYE.to_string(), 0.0),
    }
}

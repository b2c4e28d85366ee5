//! Rosters: one record per roster entry, with season and current-week points.

use crate::{
    cli::types::{lineup_slot_name, pro_team_abbrev, Position, Season, Week},
    espn::{
        compute::{applied_points, season_average},
        http::{views, LeagueClient},
        types::{League, StatSource},
    },
    report::{build_report, Column, Report, ReportKind},
    Result,
};

pub struct RosterRow {
    pub team_name: String,
    pub player_name: String,
    pub position: String,
    pub lineup_slot: &'static str,
    pub pro_team: &'static str,
    pub status: String,
    pub season_total: f64,
    pub season_average: f64,
    pub projected_average: f64,
    pub week_points: f64,
}

pub const COLUMNS: &[Column<RosterRow>] = &[
    Column::new("Team Name", |r: &RosterRow| r.team_name.clone().into()),
    Column::new("Player Name", |r: &RosterRow| r.player_name.clone().into()),
    Column::new("Position", |r: &RosterRow| r.position.clone().into()),
    Column::new("Lineup Slot", |r: &RosterRow| r.lineup_slot.into()),
    Column::new("Team", |r: &RosterRow| r.pro_team.into()),
    Column::new("Status", |r: &RosterRow| r.status.clone().into()),
    Column::new("Total Points (Season)", |r: &RosterRow| r.season_total.into()),
    Column::new("Average Points (Season)", |r: &RosterRow| r.season_average.into()),
    // ESPN's projected season average, not a single-week projection.
    Column::new("Projected Points (Week)", |r: &RosterRow| r.projected_average.into()),
    Column::new("Actual Points (Week)", |r: &RosterRow| r.week_points.into()),
];

/// Rows team by team, each roster in ESPN's entry order.
///
/// Entries without an embedded player (rare, mid-transaction) are skipped.
pub fn roster_rows(league: &League, season: Season, week: Week) -> Vec<RosterRow> {
    let mut rows = Vec::new();

    for team in &league.teams {
        let team_name = team.display_name();
        for entry in team.roster_entries() {
            let Some(player) = entry.player() else {
                log::debug!("roster entry {} has no player data", entry.player_id);
                continue;
            };

            rows.push(RosterRow {
                team_name: team_name.clone(),
                player_name: player.name(),
                position: Position::label_for(player.default_position_id),
                lineup_slot: lineup_slot_name(entry.lineup_slot_id),
                pro_team: pro_team_abbrev(player.pro_team_id),
                status: player.injury_status().to_string(),
                season_total: applied_points(player, season, Week::SEASON, StatSource::Actual),
                season_average: season_average(player, season, StatSource::Actual),
                projected_average: season_average(player, season, StatSource::Projected),
                week_points: applied_points(player, season, week, StatSource::Actual),
            });
        }
    }

    rows
}

pub fn rosters_report(league: &League, season: Season) -> Result<Report> {
    let rows = roster_rows(league, season, league.scoring_period_id);
    build_report(ReportKind::Rosters, COLUMNS, &rows)
}

pub async fn build(client: &LeagueClient) -> Result<Report> {
    let league = client.league(&[views::TEAM, views::ROSTER], None).await?;
    rosters_report(&league, client.season())
}

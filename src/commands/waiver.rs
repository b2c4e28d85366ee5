//! Waiver wire: the most-owned free agents and waiver players.

use crate::{
    cli::types::{pro_team_abbrev, Position, Season, Week},
    espn::{
        compute::{applied_points, season_average},
        http::{views, LeagueClient},
        types::{PlayerPoolEntry, StatSource},
    },
    report::{build_report, Column, Report, ReportKind},
    Result,
};

/// How many players the waiver wire report asks ESPN for.
pub const WAIVER_WIRE_SIZE: u32 = 50;

pub struct WaiverRow {
    pub player_name: String,
    pub position: String,
    pub pro_team: &'static str,
    pub status: String,
    pub projected_average: f64,
    pub week_points: f64,
    pub percent_owned: f64,
}

pub const COLUMNS: &[Column<WaiverRow>] = &[
    Column::new("Player Name", |r: &WaiverRow| r.player_name.clone().into()),
    Column::new("Position", |r: &WaiverRow| r.position.clone().into()),
    Column::new("Team", |r: &WaiverRow| r.pro_team.into()),
    Column::new("Status", |r: &WaiverRow| r.status.clone().into()),
    Column::new("Projected Points", |r: &WaiverRow| r.projected_average.into()),
    Column::new("Actual Points", |r: &WaiverRow| r.week_points.into()),
    Column::new("Ownership %", |r: &WaiverRow| r.percent_owned.into()),
];

/// Rows in the order ESPN returned the players (most owned first).
pub fn waiver_rows(players: &[PlayerPoolEntry], season: Season, week: Week) -> Vec<WaiverRow> {
    players
        .iter()
        .map(|entry| {
            let player = &entry.player;
            WaiverRow {
                player_name: player.name(),
                position: Position::label_for(player.default_position_id),
                pro_team: pro_team_abbrev(player.pro_team_id),
                status: player.injury_status().to_string(),
                projected_average: season_average(player, season, StatSource::Projected),
                week_points: applied_points(player, season, week, StatSource::Actual),
                percent_owned: player.percent_owned(),
            }
        })
        .collect()
}

pub fn waiver_report(players: &[PlayerPoolEntry], season: Season, week: Week) -> Result<Report> {
    build_report(ReportKind::WaiverWire, COLUMNS, &waiver_rows(players, season, week))
}

pub async fn build(client: &LeagueClient) -> Result<Report> {
    // Own league request for the scoring period; reports do not share fetches.
    let week = client.league(&[views::SETTINGS], None).await?.scoring_period_id;
    let players = client.free_agents(week, WAIVER_WIRE_SIZE).await?;
    waiver_report(&players, client.season(), week)
}

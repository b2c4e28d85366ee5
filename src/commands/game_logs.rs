//! Player game logs: one record per rostered player and scored week.

use std::collections::HashMap;

use crate::{
    cli::types::{PlayerId, Position, Season, Week},
    espn::{
        compute::select_stats,
        http::{views, LeagueClient},
        types::{League, Player, PlayerPoolEntry, StatSource},
    },
    report::{build_report, Column, Report, ReportKind},
    Result,
};

pub struct GameLogRow {
    pub team_name: String,
    pub player_name: String,
    pub position: String,
    pub week: u16,
    pub points: f64,
    pub projected: f64,
}

pub const COLUMNS: &[Column<GameLogRow>] = &[
    Column::new("Team Name", |r: &GameLogRow| r.team_name.clone().into()),
    Column::new("Player Name", |r: &GameLogRow| r.player_name.clone().into()),
    Column::new("Position", |r: &GameLogRow| r.position.clone().into()),
    Column::new("Week", |r: &GameLogRow| r.week.into()),
    Column::new("Points", |r: &GameLogRow| r.points.into()),
    Column::new("Projected Points", |r: &GameLogRow| r.projected.into()),
];

/// Rows for weeks `1..=current` in which ESPN has an actual or projected
/// weekly block for the player. Stats come from `cards` when the player has
/// one, else from the roster's embedded player.
pub fn game_log_rows(
    league: &League,
    cards: &[PlayerPoolEntry],
    season: Season,
    current: Week,
) -> Vec<GameLogRow> {
    let by_id: HashMap<PlayerId, &Player> = cards.iter().map(|c| (c.player.id, &c.player)).collect();
    let mut rows = Vec::new();

    for team in &league.teams {
        let team_name = team.display_name();
        for entry in team.roster_entries() {
            let Some(player) = by_id.get(&entry.player_id).copied().or_else(|| entry.player())
            else {
                continue;
            };

            for week in current.through() {
                let actual = select_stats(player, season, week, StatSource::Actual);
                let projected = select_stats(player, season, week, StatSource::Projected);
                if actual.is_none() && projected.is_none() {
                    continue;
                }

                rows.push(GameLogRow {
                    team_name: team_name.clone(),
                    player_name: player.name(),
                    position: Position::label_for(player.default_position_id),
                    week: week.as_u16(),
                    points: actual.map(|s| s.applied_total).unwrap_or(0.0),
                    projected: projected.map(|s| s.applied_total).unwrap_or(0.0),
                });
            }
        }
    }

    rows
}

pub fn game_logs_report(
    league: &League,
    cards: &[PlayerPoolEntry],
    season: Season,
) -> Result<Report> {
    let rows = game_log_rows(league, cards, season, league.scoring_period_id);
    build_report(ReportKind::GameLogs, COLUMNS, &rows)
}

pub async fn build(client: &LeagueClient) -> Result<Report> {
    let league = client.league(&[views::TEAM, views::ROSTER], None).await?;

    let ids: Vec<PlayerId> = league
        .teams
        .iter()
        .flat_map(|t| t.roster_entries().iter().map(|e| e.player_id))
        .collect();
    let cards = client.player_cards(&ids, league.scoring_period_id).await?;

    game_logs_report(&league, &cards, client.season())
}

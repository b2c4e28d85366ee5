//! Current matchups and the regular-season matchup schedule.
//!
//! Both reports come from one league fetch with `mMatchupScore`, which
//! carries every scheduled matchup of the season.

use crate::{
    espn::{
        http::{views, LeagueClient},
        types::{League, ScheduleItem},
    },
    report::{build_report, Column, Report, ReportKind},
    FflError, Result,
};

use super::common::{side_summary, team_name};

pub struct MatchupRow {
    pub period: u16,
    pub home_team: String,
    pub home_score: f64,
    pub away_team: String,
    pub away_score: f64,
    pub winner: String,
}

pub const SCHEDULE_COLUMNS: &[Column<MatchupRow>] = &[
    Column::new("Week", |r: &MatchupRow| r.period.into()),
    Column::new("Home Team", |r: &MatchupRow| r.home_team.clone().into()),
    Column::new("Home Score", |r: &MatchupRow| r.home_score.into()),
    Column::new("Away Team", |r: &MatchupRow| r.away_team.clone().into()),
    Column::new("Away Score", |r: &MatchupRow| r.away_score.into()),
    Column::new("Winner", |r: &MatchupRow| r.winner.clone().into()),
];

pub const CURRENT_COLUMNS: &[Column<MatchupRow>] = &[
    Column::new("Home Team", |r: &MatchupRow| r.home_team.clone().into()),
    Column::new("Home Score", |r: &MatchupRow| r.home_score.into()),
    Column::new("Away Team", |r: &MatchupRow| r.away_team.clone().into()),
    Column::new("Away Score", |r: &MatchupRow| r.away_score.into()),
    Column::new("Matchup Period", |r: &MatchupRow| r.period.into()),
];

/// Winner label from ESPN's `winner` field: the winning team's name, `TIE`,
/// or `N/A` while undecided and for byes.
pub fn winner_label(league: &League, item: &ScheduleItem) -> String {
    let (Some(home), Some(away)) = (&item.home, &item.away) else {
        return "N/A".to_string();
    };

    match item.winner.as_deref() {
        Some("HOME") => team_name(league, home.team_id),
        Some("AWAY") => team_name(league, away.team_id),
        Some("TIE") => "TIE".to_string(),
        _ => "N/A".to_string(),
    }
}

fn matchup_row(league: &League, item: &ScheduleItem) -> MatchupRow {
    let (home_team, home_score) = side_summary(league, item.home.as_ref());
    let (away_team, away_score) = side_summary(league, item.away.as_ref());

    MatchupRow {
        period: item.matchup_period_id,
        home_team,
        home_score,
        away_team,
        away_score,
        winner: winner_label(league, item),
    }
}

/// Matchups of one period, in schedule order.
pub fn matchups_in_period(league: &League, period: u16) -> Vec<MatchupRow> {
    league
        .schedule
        .iter()
        .filter(|item| item.matchup_period_id == period)
        .map(|item| matchup_row(league, item))
        .collect()
}

/// Regular-season matchups, period by period.
pub fn schedule_rows(league: &League) -> Result<Vec<MatchupRow>> {
    let periods = league
        .settings
        .as_ref()
        .map(|s| s.schedule_settings.matchup_period_count)
        .ok_or_else(|| FflError::MissingData {
            what: "league schedule settings".to_string(),
        })?;

    Ok((1..=periods)
        .flat_map(|period| matchups_in_period(league, period))
        .collect())
}

pub fn matchup_schedule_report(league: &League) -> Result<Report> {
    build_report(ReportKind::MatchupSchedule, SCHEDULE_COLUMNS, &schedule_rows(league)?)
}

pub fn current_matchups_report(league: &League) -> Result<Report> {
    let rows = matchups_in_period(league, league.current_matchup_period());
    build_report(ReportKind::Matchups, CURRENT_COLUMNS, &rows)
}

/// Each report fetches the schedule itself, so `--export-all` requests it
/// twice; report kinds share no state.
async fn fetch_schedule(client: &LeagueClient) -> Result<League> {
    client
        .league(&[views::TEAM, views::MATCHUP_SCORE, views::SETTINGS], None)
        .await
}

pub async fn build_schedule(client: &LeagueClient) -> Result<Report> {
    matchup_schedule_report(&fetch_schedule(client).await?)
}

pub async fn build_current(client: &LeagueClient) -> Result<Report> {
    current_matchups_report(&fetch_schedule(client).await?)
}

//! League standings: one record per team.

use crate::{
    espn::{
        http::{views, LeagueClient},
        types::League,
    },
    report::{build_report, Column, Report, ReportKind},
    Result,
};

use super::common::owners_of;

pub struct StandingRow {
    pub team_name: String,
    pub owners: String,
    pub wins: u32,
    pub losses: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub streak: i64,
}

pub const COLUMNS: &[Column<StandingRow>] = &[
    Column::new("Team Name", |r: &StandingRow| r.team_name.clone().into()),
    Column::new("Owners", |r: &StandingRow| r.owners.clone().into()),
    Column::new("Wins", |r: &StandingRow| r.wins.into()),
    Column::new("Losses", |r: &StandingRow| r.losses.into()),
    Column::new("Points For", |r: &StandingRow| r.points_for.into()),
    Column::new("Points Against", |r: &StandingRow| r.points_against.into()),
    Column::new("Streak", |r: &StandingRow| r.streak.into()),
];

/// Rows in the order ESPN lists the teams.
pub fn standings_rows(league: &League) -> Vec<StandingRow> {
    league
        .teams
        .iter()
        .map(|team| {
            let record = team.overall();
            StandingRow {
                team_name: team.display_name(),
                owners: owners_of(league, team),
                wins: record.wins,
                losses: record.losses,
                points_for: record.points_for,
                points_against: record.points_against,
                streak: record.streak_length,
            }
        })
        .collect()
}

pub fn standings_report(league: &League) -> Result<Report> {
    build_report(ReportKind::Standings, COLUMNS, &standings_rows(league))
}

pub async fn build(client: &LeagueClient) -> Result<Report> {
    let league = client.league(&[views::TEAM], None).await?;
    standings_report(&league)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{commands::tests::sample_league, report::Scalar};

    #[test]
    fn test_standings_one_record_per_team() {
        let report = standings_report(&sample_league()).unwrap();

        assert_eq!(report.name(), "standings");
        assert_eq!(
            report.fields(),
            ["Team Name", "Owners", "Wins", "Losses", "Points For", "Points Against", "Streak"]
        );
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_standings_values() {
        let report = standings_report(&sample_league()).unwrap();
        let first = &report.records()[0];

        assert_eq!(first.get("Team Name"), Some(&Scalar::from("Air Raid")));
        assert_eq!(first.get("Owners"), Some(&Scalar::from("Jordan Reyes")));
        assert_eq!(first.get("Wins"), Some(&Scalar::Int(7)));
        assert_eq!(first.get("Losses"), Some(&Scalar::Int(3)));
        assert_eq!(first.get("Points For"), Some(&Scalar::Float(1234.5)));
        assert_eq!(first.get("Points Against"), Some(&Scalar::Float(1100.25)));
        assert_eq!(first.get("Streak"), Some(&Scalar::Int(2)));

        let second = &report.records()[1];
        assert_eq!(second.get("Team Name"), Some(&Scalar::from("Gotham Knights")));
        assert_eq!(second.get("Owners"), Some(&Scalar::from("Sam, Unknown Kim")));
    }

    #[test]
    fn test_standings_team_without_record_is_zeroed() {
        let report = standings_report(&sample_league()).unwrap();
        let solo = &report.records()[2];

        assert_eq!(solo.get("Owners"), Some(&Scalar::from("")));
        assert_eq!(solo.get("Wins"), Some(&Scalar::Int(0)));
        assert_eq!(solo.get("Points For"), Some(&Scalar::Float(0.0)));
    }

    #[test]
    fn test_standings_empty_league() {
        let report = standings_report(&League::default()).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.fields().len(), 7);
    }
}

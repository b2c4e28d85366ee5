//! Typed views of ESPN league, player and message-board payloads.
//!
//! Only fields the reports read are modelled; everything else in ESPN's
//! responses is ignored. Most fields default so that partial views
//! (`mTeam` without `mRoster`, etc.) still deserialize.

use crate::cli::types::{PlayerId, Season, TeamId, Week};
use serde::{Deserialize, Serialize};


/// Stat source for ESPN player stats
///     - Actual (game results):    statSourceId = 0
///     - Projected:                statSourceId = 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSource {
    Actual,
    Projected,
}

impl StatSource {
    /// ESPN statSourceId corresponding to this source
    pub fn id(self) -> u8 {
        match self {
            StatSource::Actual => 0,
            StatSource::Projected => 1,
        }
    }
}

/// League payload from `/seasons/{season}/segments/0/leagues/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct League {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    #[serde(default)]
    pub settings: Option<LeagueSettings>,
    #[serde(default)]
    pub status: Option<LeagueStatus>,
    /// Current scoring period (NFL week).
    #[serde(rename = "scoringPeriodId", default)]
    pub scoring_period_id: Week,
}

impl League {
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Matchup period currently being played, falling back to the scoring period.
    pub fn current_matchup_period(&self) -> u16 {
        self.status
            .as_ref()
            .map(|s| s.current_matchup_period)
            .filter(|p| *p > 0)
            .unwrap_or(self.scoring_period_id.as_u16())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Member {
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub record: Option<TeamRecord>,
    #[serde(default)]
    pub roster: Option<Roster>,
    #[serde(rename = "waiverRank", default)]
    pub waiver_rank: i64,
    #[serde(rename = "transactionCounter", default)]
    pub transaction_counter: TransactionCounter,
}

impl Team {
    /// Display name: `name`, else `location nickname`, else `Team <id>`.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        let joined = [self.location.as_deref(), self.nickname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            format!("Team {}", self.id)
        } else {
            joined
        }
    }

    /// Overall record, zeroed if the view did not include it.
    pub fn overall(&self) -> RecordLine {
        self.record
            .as_ref()
            .map(|r| r.overall.clone())
            .unwrap_or_default()
    }

    pub fn roster_entries(&self) -> &[RosterEntry] {
        self.roster.as_ref().map(|r| r.entries.as_slice()).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub overall: RecordLine,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecordLine {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(rename = "pointsFor", default)]
    pub points_for: f64,
    #[serde(rename = "pointsAgainst", default)]
    pub points_against: f64,
    #[serde(rename = "streakLength", default)]
    pub streak_length: i64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct TransactionCounter {
    #[serde(default)]
    pub acquisitions: i64,
    #[serde(default)]
    pub drops: i64,
    #[serde(default)]
    pub trades: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Roster {
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterEntry {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "lineupSlotId", default)]
    pub lineup_slot_id: i64,
    #[serde(rename = "playerPoolEntry", default)]
    pub player_pool_entry: Option<PlayerPoolEntry>,
}

impl RosterEntry {
    pub fn player(&self) -> Option<&Player> {
        self.player_pool_entry.as_ref().map(|e| &e.player)
    }
}

/// A player as listed in a pool: roster entries, free agents, player cards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerPoolEntry {
    pub player: Player,
}

/// Player data from ESPN API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: i64,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: i64,
    #[serde(rename = "injuryStatus", default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub ownership: Option<Ownership>,
    #[serde(default)]
    pub stats: Vec<PlayerStats>,
}

impl Player {
    pub fn name(&self) -> String {
        self.full_name
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }

    pub fn injury_status(&self) -> &str {
        self.injury_status.as_deref().unwrap_or("ACTIVE")
    }

    pub fn percent_owned(&self) -> f64 {
        self.ownership.as_ref().map(|o| o.percent_owned).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Ownership {
    #[serde(rename = "percentOwned", default)]
    pub percent_owned: f64,
}

/// Player statistics for a specific period
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerStats {
    #[serde(rename = "seasonId")]
    pub season_id: Season,
    #[serde(rename = "scoringPeriodId")]
    pub scoring_period_id: Week,
    #[serde(rename = "statSourceId")]
    pub stat_source_id: u8,
    #[serde(rename = "statSplitTypeId")]
    pub stat_split_type_id: u8,
    #[serde(rename = "appliedTotal", default)]
    pub applied_total: f64,
    #[serde(rename = "appliedAverage", default)]
    pub applied_average: Option<f64>,
}

/// Response of player-pool views on the league endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayersEnvelope {
    #[serde(default)]
    pub players: Vec<PlayerPoolEntry>,
}

/// One matchup of the league schedule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleItem {
    #[serde(rename = "matchupPeriodId")]
    pub matchup_period_id: u16,
    #[serde(default)]
    pub home: Option<MatchupSide>,
    #[serde(default)]
    pub away: Option<MatchupSide>,
    /// `HOME`, `AWAY`, `TIE` or `UNDECIDED`
    #[serde(default)]
    pub winner: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchupSide {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "totalPoints", default)]
    pub total_points: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueSettings {
    #[serde(rename = "scheduleSettings", default)]
    pub schedule_settings: ScheduleSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScheduleSettings {
    /// Number of regular-season matchup periods.
    #[serde(rename = "matchupPeriodCount", default)]
    pub matchup_period_count: u16,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueStatus {
    #[serde(rename = "currentMatchupPeriod", default)]
    pub current_matchup_period: u16,
}

/// Response of `/communication/?view=kona_league_communication`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Communication {
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// One activity entry (e.g. a waiver claim with its add and drop).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Topic {
    /// Epoch milliseconds.
    pub date: i64,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    #[serde(rename = "messageTypeId")]
    pub message_type_id: u16,
    #[serde(rename = "targetId", default)]
    pub target_id: Option<PlayerId>,
    #[serde(default)]
    pub from: Option<i64>,
    #[serde(rename = "for", default)]
    pub for_team: Option<i64>,
    #[serde(default)]
    pub to: Option<i64>,
}

//! Transaction history: one record per action in the recent league activity.

use std::collections::{BTreeSet, HashMap};

use chrono::{Local, TimeZone};

use crate::{
    cli::types::PlayerId,
    espn::{
        http::{views, LeagueClient},
        types::{League, Message, PlayerPoolEntry, Topic, TransactionCounter},
    },
    report::{build_report, Column, Report, ReportKind},
    Result,
};

use super::common::team_by_raw_id;

/// How many activity topics the report asks ESPN for.
pub const RECENT_ACTIVITY_SIZE: u32 = 25;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct TransactionRow {
    pub date: String,
    pub team_name: String,
    pub action: &'static str,
    pub player_name: String,
    pub waiver_rank: i64,
    pub counter: TransactionCounter,
}

pub const COLUMNS: &[Column<TransactionRow>] = &[
    Column::new("Date", |r: &TransactionRow| r.date.clone().into()),
    Column::new("Team Name", |r: &TransactionRow| r.team_name.clone().into()),
    Column::new("Action", |r: &TransactionRow| r.action.into()),
    Column::new("Player Name", |r: &TransactionRow| r.player_name.clone().into()),
    Column::new("Waiver Rank", |r: &TransactionRow| r.waiver_rank.into()),
    Column::new("Acquisitions", |r: &TransactionRow| r.counter.acquisitions.into()),
    Column::new("Drops", |r: &TransactionRow| r.counter.drops.into()),
    Column::new("Trades", |r: &TransactionRow| r.counter.trades.into()),
];

/// Action label for an activity `messageTypeId`.
pub fn action_label(message_type_id: u16) -> &'static str {
    match message_type_id {
        178 => "FA ADDED",
        180 => "WAIVER ADDED",
        179 | 181 | 239 => "DROPPED",
        244 => "TRADED",
        _ => "UNKNOWN",
    }
}

/// Raw ID of the team that performed `message`.
pub fn acting_team(message: &Message) -> Option<i64> {
    match message.message_type_id {
        244 => message.from,
        239 => message.for_team,
        _ => message.to,
    }
}

/// Epoch milliseconds as `YYYY-MM-DD HH:MM:SS` in `tz`.
pub fn format_timestamp<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_millis_opt(millis).earliest() {
        Some(dt) => dt.format(DATE_FORMAT).to_string(),
        None => millis.to_string(),
    }
}

/// Player names known to the league rosters plus any extra player cards.
pub fn player_names(league: &League, cards: &[PlayerPoolEntry]) -> HashMap<PlayerId, String> {
    let rostered = league
        .teams
        .iter()
        .flat_map(|t| t.roster_entries())
        .filter_map(|e| e.player());

    rostered
        .chain(cards.iter().map(|c| &c.player))
        .filter_map(|p| p.full_name.clone().map(|name| (p.id, name)))
        .collect()
}

/// Targets of `topics` whose names the league rosters do not provide.
pub fn unnamed_targets(league: &League, topics: &[Topic]) -> Vec<PlayerId> {
    let known = player_names(league, &[]);
    topics
        .iter()
        .flat_map(|t| &t.messages)
        .filter_map(|m| m.target_id)
        .filter(|id| !known.contains_key(id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn transaction_rows<Tz>(
    league: &League,
    topics: &[Topic],
    names: &HashMap<PlayerId, String>,
    tz: &Tz,
) -> Vec<TransactionRow>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut rows = Vec::new();

    for topic in topics {
        let date = format_timestamp(topic.date, tz);
        for message in &topic.messages {
            let team = team_by_raw_id(league, acting_team(message));
            let player_name = match message.target_id {
                Some(id) => names.get(&id).cloned().unwrap_or_else(|| id.to_string()),
                None => String::new(),
            };

            rows.push(TransactionRow {
                date: date.clone(),
                team_name: team.map(|t| t.display_name()).unwrap_or_else(|| "Unknown".to_string()),
                action: action_label(message.message_type_id),
                player_name,
                waiver_rank: team.map(|t| t.waiver_rank).unwrap_or(0),
                counter: team.map(|t| t.transaction_counter).unwrap_or_default(),
            });
        }
    }

    rows
}

pub fn transactions_report<Tz>(
    league: &League,
    topics: &[Topic],
    cards: &[PlayerPoolEntry],
    tz: &Tz,
) -> Result<Report>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let names = player_names(league, cards);
    let rows = transaction_rows(league, topics, &names, tz);
    build_report(ReportKind::Transactions, COLUMNS, &rows)
}

pub async fn build(client: &LeagueClient) -> Result<Report> {
    let league = client.league(&[views::TEAM, views::ROSTER], None).await?;
    let topics = client.recent_activity(RECENT_ACTIVITY_SIZE).await?;

    let missing = unnamed_targets(&league, &topics);
    let cards = client
        .player_cards(&missing, league.scoring_period_id)
        .await?;

    transactions_report(&league, &topics, &cards, &Local)
}

//! Stat-block selection and derived player/team values.

use crate::{
    cli::types::{Season, Week},
    espn::types::{Member, Player, PlayerStats, StatSource},
};


/// Select the stat block for a specific season/period/source.
///
/// `Week::SEASON` (period 0) selects the season-total block
/// (`statSplitTypeId == 0`); any other week selects the weekly block
/// (`statSplitTypeId == 1`).
pub fn select_stats(
    player: &Player,
    season: Season,
    week: Week,
    source: StatSource,
) -> Option<&PlayerStats> {
    let split = if week == Week::SEASON { 0 } else { 1 };
    player.stats.iter().find(|s| {
        s.season_id == season
            && s.scoring_period_id == week
            && s.stat_source_id == source.id()
            && s.stat_split_type_id == split
    })
}

/// Applied fantasy points for the period, 0 when ESPN has no block for it.
pub fn applied_points(player: &Player, season: Season, week: Week, source: StatSource) -> f64 {
    select_stats(player, season, week, source)
        .map(|s| s.applied_total)
        .unwrap_or(0.0)
}

/// Season average of applied points, 0 when ESPN has none.
pub fn season_average(player: &Player, season: Season, source: StatSource) -> f64 {
    select_stats(player, season, Week::SEASON, source)
        .and_then(|s| s.applied_average)
        .unwrap_or(0.0)
}

/// `First Last` for an owner; a missing first name reads `Unknown`.
pub fn owner_name(member: &Member) -> String {
    let first = member
        .first_name
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown");
    let last = member.last_name.as_deref().unwrap_or("");
    format!("{} {}", first, last).trim_end().to_string()
}

//! ESPN `x-fantasy-filter` payloads.
//!
//! ESPN narrows player pools and league message boards server-side based on
//! a JSON document sent in the `x-fantasy-filter` header. Only the filters
//! the exporter needs are modelled:
//!
//! - **players**: free agents by status, player cards by ID
//! - **topics**: recent transaction activity

use crate::{cli::types::Season, Result};
use reqwest::header::HeaderValue;
use serde::Serialize;

/// Wrapper for ESPN-style filter values.
///
/// ESPN API expects filter values to be wrapped in objects with a "value" field.
/// For example: `{"filterActive": {"value": true}}`
#[derive(Debug, Serialize)]
pub struct Val<T> {
    pub value: T,
}

/// A value with ESPN's secondary `additionalValue` list.
#[derive(Debug, Serialize)]
pub struct ValWithExtra<T, U> {
    pub value: T,
    #[serde(rename = "additionalValue")]
    pub additional_value: U,
}

/// Sort directive (`sortPriority` 1 is applied first).
#[derive(Debug, Serialize)]
pub struct Sort {
    #[serde(rename = "sortPriority")]
    pub sort_priority: u8,
    #[serde(rename = "sortAsc")]
    pub sort_asc: bool,
}

/// Filter parameters for player pools on the league endpoint.
#[derive(Debug, Default, Serialize)]
pub struct PlayersFilter {
    #[serde(rename = "filterStatus", skip_serializing_if = "Option::is_none")]
    pub filter_status: Option<Val<Vec<&'static str>>>,

    #[serde(rename = "filterIds", skip_serializing_if = "Option::is_none")]
    pub filter_ids: Option<Val<Vec<i64>>>,

    #[serde(
        rename = "filterStatsForTopScoringPeriodIds",
        skip_serializing_if = "Option::is_none"
    )]
    pub filter_stats_for_top_scoring_period_ids: Option<ValWithExtra<u16, Vec<String>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(rename = "sortPercOwned", skip_serializing_if = "Option::is_none")]
    pub sort_perc_owned: Option<Sort>,
}

/// Filter parameters for the league communication (message board) endpoint.
#[derive(Debug, Serialize)]
pub struct TopicsFilter {
    #[serde(rename = "filterType")]
    pub filter_type: Val<Vec<&'static str>>,
    pub limit: u32,
    #[serde(rename = "limitPerMessageSet")]
    pub limit_per_message_set: Val<u32>,
    pub offset: u32,
    #[serde(rename = "sortMessageDate")]
    pub sort_message_date: Sort,
    #[serde(rename = "sortFor")]
    pub sort_for: Sort,
    #[serde(rename = "filterIncludeMessageTypeIds")]
    pub filter_include_message_type_ids: Val<Vec<u16>>,
}

/// Top-level `x-fantasy-filter` document.
#[derive(Debug, Default, Serialize)]
pub struct FantasyFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<PlayersFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<TopicsFilter>,
}

/// General-purpose helper: any Serialize → JSON → HeaderValue
pub trait IntoHeaderValue {
    fn to_header_value(&self) -> Result<HeaderValue>;
}

impl<T> IntoHeaderValue for T
where
    T: Serialize,
{
    fn to_header_value(&self) -> Result<HeaderValue> {
        let s = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&s)?)
    }
}

/// Message type IDs of transaction activity (adds, drops, trades).
pub const TRANSACTION_MESSAGE_TYPES: [u16; 6] = [178, 180, 179, 239, 181, 244];

/// Free agents and waiver players, most owned first.
pub fn free_agents_filter(limit: u32) -> FantasyFilter {
    FantasyFilter {
        players: Some(PlayersFilter {
            filter_status: Some(Val {
                value: vec!["FREEAGENT", "WAIVERS"],
            }),
            limit: Some(limit),
            sort_perc_owned: Some(Sort {
                sort_priority: 1,
                sort_asc: false,
            }),
            ..Default::default()
        }),
        topics: None,
    }
}

/// Player cards for `ids`, with per-week stats for the season.
pub fn player_cards_filter(ids: &[i64], season: Season, periods: u16) -> FantasyFilter {
    FantasyFilter {
        players: Some(PlayersFilter {
            filter_ids: Some(Val {
                value: ids.to_vec(),
            }),
            filter_stats_for_top_scoring_period_ids: Some(ValWithExtra {
                value: periods,
                // "00<season>" = actual, "10<season>" = projected
                additional_value: vec![format!("00{}", season), format!("10{}", season)],
            }),
            ..Default::default()
        }),
        topics: None,
    }
}

/// Most recent transaction topics on the league message board.
pub fn recent_activity_filter(limit: u32, offset: u32) -> FantasyFilter {
    FantasyFilter {
        players: None,
        topics: Some(TopicsFilter {
            filter_type: Val {
                value: vec!["ACTIVITY_TRANSACTIONS"],
            },
            limit,
            limit_per_message_set: Val { value: 25 },
            offset,
            sort_message_date: Sort {
                sort_priority: 1,
                sort_asc: false,
            },
            sort_for: Sort {
                sort_priority: 2,
                sort_asc: false,
            },
            filter_include_message_type_ids: Val {
                value: TRANSACTION_MESSAGE_TYPES.to_vec(),
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_header_value() {
        let val = Val { value: "test" };
        let header_value = val.to_header_value().unwrap();
        assert_eq!(header_value.to_str().unwrap(), r#"{"value":"test"}"#);
    }

    #[test]
    fn test_fantasy_filter_default_is_empty_object() {
        let json = serde_json::to_string(&FantasyFilter::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_free_agents_filter_serialization() {
        let value = serde_json::to_value(free_agents_filter(50)).unwrap();
        assert_eq!(
            value,
            json!({
                "players": {
                    "filterStatus": {"value": ["FREEAGENT", "WAIVERS"]},
                    "limit": 50,
                    "sortPercOwned": {"sortPriority": 1, "sortAsc": false}
                }
            })
        );
    }

    #[test]
    fn test_player_cards_filter_serialization() {
        let value = serde_json::to_value(player_cards_filter(&[3918298, -16001], Season::new(2024), 17))
            .unwrap();
        assert_eq!(
            value,
            json!({
                "players": {
                    "filterIds": {"value": [3918298, -16001]},
                    "filterStatsForTopScoringPeriodIds": {
                        "value": 17,
                        "additionalValue": ["002024", "102024"]
                    }
                }
            })
        );
    }

    #[test]
    fn test_recent_activity_filter_serialization() {
        let value = serde_json::to_value(recent_activity_filter(25, 0)).unwrap();
        let topics = &value["topics"];
        assert_eq!(topics["filterType"]["value"], json!(["ACTIVITY_TRANSACTIONS"]));
        assert_eq!(topics["limit"], 25);
        assert_eq!(topics["offset"], 0);
        assert_eq!(
            topics["filterIncludeMessageTypeIds"]["value"],
            json!([178, 180, 179, 239, 181, 244])
        );
        assert!(value.get("players").is_none());
    }
}

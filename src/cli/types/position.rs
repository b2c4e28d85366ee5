//! Player positions, lineup slots and pro-team lookups for ESPN IDs.

use crate::error::FflError;
use std::fmt;

/// Fantasy football player positions.
///
/// These are a player's *default* positions. Where a player sits in a
/// fantasy lineup is a separate concept, see [`lineup_slot_name`].
///
/// # Examples
///
/// ```rust
/// use ffl_export::Position;
///
/// assert_eq!(Position::try_from(16).unwrap(), Position::DEF);
/// assert_eq!(Position::DEF.to_string(), "D/ST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    DEF,
    K,
}

impl Position {
    /// Convert an ESPN `defaultPositionId` to a Position.
    pub fn try_from(id: i64) -> Result<Self, FflError> {
        match id {
            0 | 1 => Ok(Position::QB), // ESPN uses both 0 and 1 for QB
            2 => Ok(Position::RB),
            3 => Ok(Position::WR),
            4 | 6 => Ok(Position::TE),
            5 | 17 => Ok(Position::K),
            16 => Ok(Position::DEF),
            _ => Err(FflError::InvalidReport {
                message: format!("unknown position id {}", id),
            }),
        }
    }

    /// Position label for export, `UNKNOWN` for IDs we do not map.
    pub fn label_for(default_position_id: i64) -> String {
        Position::try_from(default_position_id)
            .map(|p| p.to_string())
            .unwrap_or_else(|_| "UNKNOWN".to_string())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DEF => "D/ST",
            Position::K => "K",
        };
        write!(f, "{}", s)
    }
}

/// Name of an ESPN lineup slot (`lineupSlotId`).
pub fn lineup_slot_name(slot_id: i64) -> &'static str {
    match slot_id {
        0 => "QB",
        1 => "TQB",
        2 => "RB",
        3 => "RB/WR",
        4 => "WR",
        5 => "WR/TE",
        6 => "TE",
        7 => "OP",
        8 => "DT",
        9 => "DE",
        10 => "LB",
        11 => "DL",
        12 => "CB",
        13 => "S",
        14 => "DB",
        15 => "DP",
        16 => "D/ST",
        17 => "K",
        18 => "P",
        19 => "HC",
        20 => "BE",
        21 => "IR",
        23 => "RB/WR/TE",
        24 => "ER",
        _ => "UNKNOWN",
    }
}

/// NFL team abbreviation for an ESPN `proTeamId`; free agents are `FA`.
pub fn pro_team_abbrev(pro_team_id: i64) -> &'static str {
    match pro_team_id {
        1 => "ATL",
        2 => "BUF",
        3 => "CHI",
        4 => "CIN",
        5 => "CLE",
        6 => "DAL",
        7 => "DEN",
        8 => "DET",
        9 => "GB",
        10 => "TEN",
        11 => "IND",
        12 => "KC",
        13 => "LV",
        14 => "LAR",
        15 => "MIA",
        16 => "MIN",
        17 => "NE",
        18 => "NO",
        19 => "NYG",
        20 => "NYJ",
        21 => "PHI",
        22 => "ARI",
        23 => "PIT",
        24 => "LAC",
        25 => "SF",
        26 => "SEA",
        27 => "TB",
        28 => "WSH",
        29 => "CAR",
        30 => "JAX",
        33 => "BAL",
        34 => "HOU",
        _ => "FA",
    }
}

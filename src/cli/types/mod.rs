//! Type-safe wrappers and enums for ESPN Fantasy Football data.

pub mod format;
pub mod ids;
pub mod position;
pub mod time;

pub use format::ExportFormat;
pub use ids::{LeagueId, PlayerId, TeamId};
pub use position::{lineup_slot_name, pro_team_abbrev, Position};
pub use time::{Season, Week};

//! Type-safe wrappers and value parsers for ESPN Fantasy Basketball data.

pub mod entries;
pub mod ids;
pub mod time;

pub use entries::{OverrideArg, StatusEntry};
pub use ids::{LeagueId, PlayerId, TeamId};
pub use time::{GameDate, Season};

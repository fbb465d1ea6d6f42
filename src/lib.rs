//! ESPN Fantasy Basketball Library
//!
//! Normalizes ESPN's per-player stat payloads into named per-game stat
//! vectors, and maintains an injury/suspension report alongside.
//!
//! ## Features
//!
//! - **Identifier registries**: fixed mappings between ESPN's opaque stat and
//!   time-window codes and readable names (`PTS`, `30-day`, ...)
//! - **Stat extraction**: per-game averages for any window, with games played
//!   recovered from season totals
//! - **Projection**: 30-day averages with manual per-player overrides on top
//! - **Injury report**: columnar injury/suspension table with manual entries
//!   and spreadsheet export
//!
//! ## Quick Start
//!
//! ```rust
//! use espn_fba::{espn::types::PlayerInfo, player::Player};
//! use serde_json::json;
//!
//! # fn example() -> espn_fba::Result<()> {
//! let info: PlayerInfo = serde_json::from_value(json!({
//!     "id": 1,
//!     "fullName": "Test Player",
//!     "stats": [{
//!         "id": "032020",
//!         "averageStats": { "0": 25.0, "6": 10.0 },
//!         "stats": { "0": 250.0 }
//!     }]
//! }))?;
//!
//! let mut player = Player::new(info);
//! player.set_override("REB", 12.0)?;
//! assert_eq!(player.project(&["PTS", "REB"])?, vec![25.0, 12.0]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Set your ESPN league ID to avoid passing it in every command:
//! ```bash
//! export ESPN_FBA_LEAGUE_ID=368749
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod injury;
pub mod player;
pub mod roster;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Season, TeamId};
pub use error::{EspnError, Result};
pub use espn::registry::{StatName, StatWindow};
pub use injury::InjuryTable;
pub use player::{Player, WindowStats};

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FBA_LEAGUE_ID";

//! Command implementations for the ESPN Fantasy Basketball CLI

pub mod injuries;
pub mod league_data;
pub mod players;

use crate::{EspnError, LeagueId, Result, LEAGUE_ID_ENV_VAR};

/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| EspnError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}

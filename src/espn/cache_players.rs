//! Player payload decoding and the on-disk payload cache.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::{players_cache_path, try_read_to_string, write_string};
use crate::espn::{http::get_players, types::PlayersEnvelope};
use crate::{
    cli::types::{LeagueId, Season},
    Result,
};

/// Decode a raw player payload. An envelope without a `players` array is no data.
pub fn parse_players(raw: Value) -> Result<PlayersEnvelope> {
    if raw.get("players").is_none() {
        return Err(crate::EspnError::NoData);
    }
    Ok(serde_json::from_value(raw)?)
}

/// Try to load the player payload from .cache first. If missing, unreadable or
/// `refresh == true`, fetch from ESPN (`view=kona_player_info`) and re-write the cache.
pub async fn load_or_fetch_players(
    league_id: LeagueId,
    season: Season,
    refresh: bool,
) -> Result<PlayersEnvelope> {
    let path = players_cache_path(season.as_u16(), league_id.as_u32());

    // 1) Try cache (unless refresh)
    if !refresh {
        if let Some(s) = try_read_to_string(&path) {
            match serde_json::from_str::<Value>(&s).map_err(crate::EspnError::from).and_then(parse_players) {
                Ok(envelope) => {
                    info!(path = %path.display(), "player payload loaded from cache");
                    return Ok(envelope);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "ignoring unreadable cache"),
            }
        } else {
            debug!(path = %path.display(), "player cache miss");
        }
    }

    // 2) Fetch from API
    let raw = get_players(league_id, season).await?;

    // 3) Write cache; a failed write only costs a refetch next time
    if let Ok(json_str) = serde_json::to_string(&raw) {
        if let Err(e) = write_string(&path, &json_str) {
            warn!(path = %path.display(), error = %e, "could not write player cache");
        }
    }

    parse_players(raw)
}

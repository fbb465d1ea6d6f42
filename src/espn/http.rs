//! Thin ESPN API fetchers.

use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::debug;

use crate::cli::types::{GameDate, LeagueId, Season};
use crate::core::{http_client, maybe_cookie_header_map};
use crate::espn::types::{ScheduleEnvelope, TeamsEnvelope};
use crate::Result;

/// Base path for ESPN Fantasy Basketball v3 API.
pub const FBA_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/fba";

/// Daily pro basketball scoreboard.
pub const SCOREBOARD_URL: &str = "https://site.api.espn.com/apis/fantasy/v2/games/fba/games";

pub fn league_url(league_id: LeagueId, season: Season) -> String {
    format!(
        "{FBA_BASE_URL}/seasons/{}/segments/0/leagues/{}",
        season, league_id
    )
}

pub fn scoreboard_params(date: &GameDate) -> [(&'static str, String); 3] {
    [
        ("useMap", "true".to_string()),
        ("dates", date.to_string()),
        ("pbpOnly", "true".to_string()),
    ]
}

async fn get_json(url: &str, params: &[(&str, String)]) -> Result<Value> {
    let headers = maybe_cookie_header_map()?.unwrap_or_else(HeaderMap::new);
    debug!(url, "GET");

    let v = http_client()
        .get(url)
        .headers(headers)
        .query(params)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;
    Ok(v)
}

/// Raw `view=kona_player_info` payload: every player with their stat blocks.
pub async fn get_players(league_id: LeagueId, season: Season) -> Result<Value> {
    get_json(
        &league_url(league_id, season),
        &[("view", "kona_player_info".to_string())],
    )
    .await
}

/// League payload holding the fantasy teams.
pub async fn get_teams(league_id: LeagueId, season: Season) -> Result<TeamsEnvelope> {
    let v = get_json(&league_url(league_id, season), &[("view", "mTeam".to_string())]).await?;
    Ok(serde_json::from_value(v)?)
}

/// Pro games scheduled on one day.
pub async fn get_schedule(date: &GameDate) -> Result<ScheduleEnvelope> {
    let v = get_json(SCOREBOARD_URL, &scoreboard_params(date)).await?;
    Ok(serde_json::from_value(v)?)
}

//! Serde models of the ESPN Fantasy Basketball JSON payloads.

use crate::cli::types::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


/// Stat values keyed by ESPN's numeric stat key (`"0"` = points).
pub type StatMap = BTreeMap<String, f64>;

/// One time-window bundle of a player's stats.
///
/// Windows with no recorded games come back without `averageStats`; both maps
/// are optional so that case is explicit.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatBlock {
    /// Six-character window code, see [`crate::espn::registry::StatWindow`].
    pub id: String,
    #[serde(rename = "averageStats", default, skip_serializing_if = "Option::is_none")]
    pub average_stats: Option<StatMap>,
    /// Season totals for the window.
    #[serde(rename = "stats", default, skip_serializing_if = "Option::is_none")]
    pub total_stats: Option<StatMap>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ownership {
    #[serde(rename = "percentOwned", default)]
    pub percent_owned: f64,
}

/// Player data from ESPN's `kona_player_info` view
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerInfo {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership: Option<Ownership>,
    #[serde(default)]
    pub stats: Vec<StatBlock>,
}

/// One entry of the `players` array; `onTeamId` is 0 for free agents.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerEntry {
    pub id: PlayerId,
    #[serde(rename = "onTeamId", default)]
    pub on_team_id: TeamId,
    pub player: PlayerInfo,
}

/// Top-level envelope for `view=kona_player_info`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayersEnvelope {
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FantasyTeam {
    pub id: TeamId,
    #[serde(default)]
    pub abbrev: String,
}

/// Top-level envelope for the league endpoint's `teams` array
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamsEnvelope {
    #[serde(default)]
    pub teams: Vec<FantasyTeam>,
}

/// Pro team taking part in a scheduled game. The scoreboard sends ids as strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Competitor {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameEvent {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

/// Top-level envelope for the daily scoreboard
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScheduleEnvelope {
    #[serde(default)]
    pub events: Vec<GameEvent>,
}

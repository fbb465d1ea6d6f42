//! Player projection command implementation

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    cli::types::{OverrideArg, PlayerId, TeamId},
    core::try_read_to_string,
    espn::{
        cache_players::{load_or_fetch_players, parse_players},
        registry::{StatName, StatWindow, PROJECTION_WINDOW, REGISTRY_SEASON},
        types::PlayersEnvelope,
    },
    roster::{collect_rostered_players, Rosters},
    EspnError, LeagueId, Result, Season,
};

use super::resolve_league_id;

/// Parameters for the players command
#[derive(Debug, Clone)]
pub struct PlayersParams {
    pub league_id: Option<LeagueId>,
    pub season: Season,
    /// Fantasy teams to load; empty means every team found in the payload.
    pub teams: Vec<TeamId>,
    pub stats: Vec<StatName>,
    /// Raw averages for this window instead of the override-aware projection.
    pub window: Option<StatWindow>,
    pub overrides: Vec<OverrideArg>,
    /// Read the `kona_player_info` payload from a file instead of ESPN.
    pub input: Option<PathBuf>,
    pub refresh: bool,
    pub as_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatValue {
    pub stat: StatName,
    pub value: f64,
}

/// One output line: a player's stat vector plus identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub team_id: TeamId,
    pub player_id: PlayerId,
    pub name: String,
    pub pro_team: Option<u32>,
    pub ownership_pct: Option<f64>,
    pub window: StatWindow,
    /// `None` when ESPN has no usable games count for the window.
    pub games_played: Option<u32>,
    pub stats: Vec<StatValue>,
}

/// Fantasy teams present in the payload, in id order.
pub fn rostered_team_ids(envelope: &PlayersEnvelope) -> Vec<TeamId> {
    let mut ids: Vec<TeamId> = envelope
        .players
        .iter()
        .map(|p| p.on_team_id)
        .filter(|id| id.as_u32() != 0)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    ids.sort();
    ids
}

/// Apply CLI overrides. Returns the ones naming players outside the rosters.
pub fn apply_overrides(rosters: &mut Rosters, overrides: &[OverrideArg]) -> Vec<OverrideArg> {
    let mut unmatched = Vec::new();
    for o in overrides {
        match rosters.players.get_mut(&o.player_id) {
            Some(player) => player.set_stat_override(o.stat, o.value),
            None => unmatched.push(*o),
        }
    }
    unmatched
}

/// Build output rows team by team, keeping roster order.
///
/// With `window == None` rows carry the projection (overrides applied) and the
/// projection window's games count; otherwise the raw averages of `window`.
pub fn build_rows(rosters: &Rosters, stats: &[StatName], window: Option<StatWindow>) -> Vec<ProjectionRow> {
    let mut rows = Vec::with_capacity(rosters.players.len());
    for (team_id, roster) in &rosters.teams {
        for player_id in roster {
            let Some(player) = rosters.players.get(player_id) else {
                continue;
            };

            let (window, values, games_played) = match window {
                Some(w) => {
                    let extracted = player.window_stats(w, stats);
                    (w, extracted.values, extracted.games_played)
                }
                None => {
                    let games = player.window_stats(PROJECTION_WINDOW, &[]).games_played;
                    (PROJECTION_WINDOW, player.projection(stats), games)
                }
            };

            rows.push(ProjectionRow {
                team_id: *team_id,
                player_id: *player_id,
                name: player.name().unwrap_or("(unknown)").to_string(),
                pro_team: player.pro_team(),
                ownership_pct: player.ownership_pct(),
                window,
                games_played,
                stats: stats
                    .iter()
                    .zip(values)
                    .map(|(&stat, value)| StatValue { stat, value })
                    .collect(),
            });
        }
    }
    rows
}

pub fn format_row(row: &ProjectionRow) -> String {
    let stats = row
        .stats
        .iter()
        .map(|s| format!("{} {:.2}", s.stat, s.value))
        .collect::<Vec<_>>()
        .join("  ");
    let games = match row.games_played {
        Some(gp) => format!("GP {gp}"),
        None => "GP ?".to_string(),
    };
    format!(
        "team {:>2}  {:<28} [{}]  {}  ({}, {})",
        row.team_id, row.name, row.player_id, stats, row.window, games
    )
}

/// Window codes only match stat blocks from [`REGISTRY_SEASON`]; any other
/// season would load players whose every window reads as empty.
pub fn check_season(season: Season) -> Result<()> {
    if season.as_u16() == REGISTRY_SEASON {
        return Ok(());
    }
    Err(EspnError::InvalidEntry {
        input: season.to_string(),
        reason: format!("stat windows are keyed to the {REGISTRY_SEASON} season"),
    })
}

async fn load_envelope(params: &PlayersParams) -> Result<PlayersEnvelope> {
    if let Some(path) = &params.input {
        let raw = try_read_to_string(path).ok_or_else(|| EspnError::Cache {
            message: format!("could not read {}", path.display()),
        })?;
        return parse_players(serde_json::from_str(&raw)?);
    }

    let league_id = resolve_league_id(params.league_id)?;
    load_or_fetch_players(league_id, params.season, params.refresh).await
}

/// Handle the players command
pub async fn handle_players(params: PlayersParams) -> Result<()> {
    check_season(params.season)?;
    let envelope = load_envelope(&params).await?;

    let teams = if params.teams.is_empty() {
        rostered_team_ids(&envelope)
    } else {
        params.teams.clone()
    };
    let mut rosters = collect_rostered_players(envelope, &teams);

    for o in apply_overrides(&mut rosters, &params.overrides) {
        warn!(player = %o.player_id, stat = %o.stat, "override for a player not on the selected rosters");
    }

    let rows = build_rows(&rosters, &params.stats, params.window);
    info!(rows = rows.len(), "player stats computed");

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}", format_row(row));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope() -> PlayersEnvelope {
        serde_json::from_value(json!({
            "players": [
                {
                    "id": 10, "onTeamId": 2,
                    "player": {
                        "id": 10, "fullName": "Center One", "proTeamId": 5,
                        "ownership": { "percentOwned": 95.0 },
                        "stats": [
                            { "id": "032020",
                              "averageStats": { "0": 20.0, "6": 12.0 },
                              "stats": { "0": 200.0, "6": 120.0 } },
                            { "id": "002019",
                              "averageStats": { "0": 18.0, "6": 10.0 },
                              "stats": { "0": 1296.0 } }
                        ]
                    }
                },
                {
                    "id": 11, "onTeamId": 1,
                    "player": { "id": 11, "fullName": "Rookie Guard", "stats": [] }
                },
                { "id": 12, "onTeamId": 0, "player": { "id": 12, "fullName": "Free Agent" } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_rostered_team_ids_skips_free_agents() {
        assert_eq!(
            rostered_team_ids(&envelope()),
            vec![TeamId::new(1), TeamId::new(2)]
        );
    }

    #[test]
    fn test_build_rows_projection_with_override() {
        let mut rosters = collect_rostered_players(envelope(), &[TeamId::new(1), TeamId::new(2)]);
        let unmatched = apply_overrides(
            &mut rosters,
            &[
                "10:REB=9.5".parse().unwrap(),
                "12:PTS=30".parse().unwrap(),
            ],
        );
        assert_eq!(unmatched.len(), 1);
        assert_eq!(unmatched[0].player_id, PlayerId::new(12));

        let rows = build_rows(&rosters, &[StatName::Points, StatName::Rebounds], None);
        assert_eq!(rows.len(), 2);

        // Team 1 sorts first; the rookie has no 30-day block
        assert_eq!(rows[0].name, "Rookie Guard");
        assert_eq!(rows[0].games_played, None);
        assert_eq!(rows[0].stats[0].value, 0.0);

        assert_eq!(rows[1].player_id, PlayerId::new(10));
        assert_eq!(rows[1].window, StatWindow::ThirtyDay);
        assert_eq!(rows[1].games_played, Some(10));
        assert_eq!(rows[1].stats[0].value, 20.0);
        assert_eq!(rows[1].stats[1].value, 9.5);
        assert_eq!(rows[1].ownership_pct, Some(95.0));
    }

    #[test]
    fn test_build_rows_explicit_window_ignores_overrides() {
        let mut rosters = collect_rostered_players(envelope(), &[TeamId::new(2)]);
        apply_overrides(&mut rosters, &["10:PTS=1".parse().unwrap()]);

        let rows = build_rows(&rosters, &[StatName::Points], Some(StatWindow::LastSeason));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].stats[0].value, 18.0);
        assert_eq!(rows[0].games_played, Some(72));
    }

    #[test]
    fn test_format_row() {
        let rosters = collect_rostered_players(envelope(), &[TeamId::new(2)]);
        let rows = build_rows(&rosters, &[StatName::Points], None);
        let line = format_row(&rows[0]);

        assert!(line.contains("Center One"));
        assert!(line.contains("PTS 20.00"));
        assert!(line.contains("(30-day, GP 10)"));
    }

    #[test]
    fn test_rows_serialize_with_short_names() {
        let rosters = collect_rostered_players(envelope(), &[TeamId::new(2)]);
        let rows = build_rows(&rosters, &[StatName::Rebounds], None);
        let json = serde_json::to_value(&rows).unwrap();

        assert_eq!(json[0]["stats"][0]["stat"], "REB");
        assert_eq!(json[0]["window"], "30-day");
        assert_eq!(json[0]["games_played"], 10);
    }

    #[test]
    fn test_check_season_accepts_registry_season() {
        assert!(check_season(Season::default()).is_ok());
        assert!(check_season(Season::new(2020)).is_ok());
    }

    #[test]
    fn test_check_season_rejects_other_seasons() {
        let err = check_season(Season::new(2021)).unwrap_err();
        assert!(matches!(
            err,
            EspnError::InvalidEntry { ref input, .. } if input == "2021"
        ));
    }

    #[tokio::test]
    async fn test_handle_players_rejects_season_before_loading() {
        let params = PlayersParams {
            league_id: None,
            season: Season::new(2021),
            teams: Vec::new(),
            stats: vec![StatName::Points],
            window: None,
            overrides: Vec::new(),
            input: Some(PathBuf::from("/nonexistent/kona_player_info.json")),
            refresh: false,
            as_json: false,
        };
        let err = handle_players(params).await.unwrap_err();
        assert!(matches!(err, EspnError::InvalidEntry { .. }));
    }
}

//! League-level reductions: rostered players, fantasy team names, pro schedule.

use std::collections::{BTreeMap, HashMap, HashSet};

use rayon::prelude::*;
use tracing::info;

use crate::cli::types::{GameDate, PlayerId, TeamId};
use crate::espn::types::{PlayersEnvelope, ScheduleEnvelope, TeamsEnvelope};
use crate::player::Player;

/// Rostered players keyed by id, plus each fantasy team's roster.
#[derive(Debug, Default)]
pub struct Rosters {
    pub players: HashMap<PlayerId, Player>,
    /// Every requested team is present, possibly with an empty roster.
    pub teams: BTreeMap<TeamId, Vec<PlayerId>>,
}

/// Build a [`Player`] for every entry whose `onTeamId` is one of `team_ids`.
///
/// Records are built in parallel and merged afterwards; roster order follows
/// the payload order.
pub fn collect_rostered_players(envelope: PlayersEnvelope, team_ids: &[TeamId]) -> Rosters {
    let wanted: HashSet<TeamId> = team_ids.iter().copied().collect();

    let built: Vec<(TeamId, Player)> = envelope
        .players
        .into_par_iter()
        .filter(|entry| wanted.contains(&entry.on_team_id))
        .map(|entry| (entry.on_team_id, Player::new(entry.player)))
        .collect();

    let mut rosters = Rosters {
        players: HashMap::with_capacity(built.len()),
        teams: team_ids.iter().map(|&id| (id, Vec::new())).collect(),
    };
    for (team_id, player) in built {
        let player_id = player.id();
        if let Some(roster) = rosters.teams.get_mut(&team_id) {
            roster.push(player_id);
        }
        rosters.players.insert(player_id, player);
    }

    info!(
        players = rosters.players.len(),
        teams = rosters.teams.len(),
        "rostered players loaded"
    );
    rosters
}

/// Fantasy team id → abbreviation.
pub fn team_abbrevs(envelope: &TeamsEnvelope) -> BTreeMap<TeamId, String> {
    envelope
        .teams
        .iter()
        .map(|t| (t.id, t.abbrev.clone()))
        .collect()
}

/// Pro team ids playing on one day: both competitors of every event, in order.
pub fn teams_playing(schedule: &ScheduleEnvelope) -> Vec<String> {
    schedule
        .events
        .iter()
        .flat_map(|e| e.competitors.iter().take(2))
        .map(|c| c.id.clone())
        .collect()
}

/// Merge per-date scoreboards into date → pro team ids.
pub fn daily_schedule<I>(days: I) -> BTreeMap<GameDate, Vec<String>>
where
    I: IntoIterator<Item = (GameDate, ScheduleEnvelope)>,
{
    days.into_iter()
        .map(|(date, schedule)| (date, teams_playing(&schedule)))
        .collect()
}

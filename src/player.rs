//! Player record: raw ESPN stat payload plus manual stat overrides.
//!
//! Extraction ([`Player::extract_stats`]) reads one window's per-game averages.
//! Projection ([`Player::project`]) reads the fixed projection window and then
//! lets overrides replace the matching entries.

use std::collections::BTreeMap;

use tracing::debug;

use crate::cli::types::PlayerId;
use crate::error::Result;
use crate::espn::{
    compute::{average_values, games_played, select_window_block},
    registry::{StatName, StatWindow, PROJECTION_WINDOW},
    types::PlayerInfo,
};


/// Per-game averages for one window, in request order.
///
/// `games_played == None` means the count is unknown. When the window had no
/// populated block at all, `values` is all zeros and `games_played` is `None`;
/// do not read such a vector as a real stat line.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowStats {
    pub values: Vec<f64>,
    pub games_played: Option<u32>,
}

impl WindowStats {
    fn no_data(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
            games_played: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    info: PlayerInfo,
    overrides: BTreeMap<StatName, f64>,
}

impl Player {
    pub fn new(info: PlayerInfo) -> Self {
        Self {
            info,
            overrides: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.info.id
    }

    /// Raw payload this record was built from.
    pub fn info(&self) -> &PlayerInfo {
        &self.info
    }

    pub fn name(&self) -> Option<&str> {
        self.info.full_name.as_deref()
    }

    /// ESPN pro team id.
    pub fn pro_team(&self) -> Option<u32> {
        self.info.pro_team_id
    }

    pub fn ownership_pct(&self) -> Option<f64> {
        self.info.ownership.as_ref().map(|o| o.percent_owned)
    }

    pub fn overrides(&self) -> &BTreeMap<StatName, f64> {
        &self.overrides
    }

    /// Set one override by stat short name. Unknown names are rejected.
    pub fn set_override(&mut self, name: &str, value: f64) -> Result<()> {
        let stat: StatName = name.parse()?;
        self.overrides.insert(stat, value);
        Ok(())
    }

    pub fn set_stat_override(&mut self, stat: StatName, value: f64) {
        self.overrides.insert(stat, value);
    }

    /// Replace the whole override map. Nothing changes if any name is unknown.
    pub fn replace_overrides<I, S>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let parsed = overrides
            .into_iter()
            .map(|(name, value)| name.as_ref().parse::<StatName>().map(|stat| (stat, value)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        self.overrides = parsed;
        Ok(())
    }

    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    /// Per-game averages for `stat_names` over the window labelled `window`.
    ///
    /// Fails with `UnknownWindow` / `UnknownStat` on unregistered names; a
    /// window with no data is not an error (see [`WindowStats`]).
    pub fn extract_stats<S: AsRef<str>>(&self, window: &str, stat_names: &[S]) -> Result<WindowStats> {
        let window = StatWindow::from_label(window)?;
        let stats = StatName::parse_all(stat_names)?;
        Ok(self.window_stats(window, &stats))
    }

    pub fn window_stats(&self, window: StatWindow, stats: &[StatName]) -> WindowStats {
        match select_window_block(&self.info.stats, window) {
            Some(block) => WindowStats {
                values: average_values(block.averages, stats),
                games_played: games_played(block.averages, block.totals),
            },
            None => {
                debug!(player = %self.info.id, %window, "no stat data for window");
                WindowStats::no_data(stats.len())
            }
        }
    }

    /// Projected per-game line for `stat_names`: the 30-day averages with any
    /// overrides for requested stats applied on top.
    pub fn project<S: AsRef<str>>(&self, stat_names: &[S]) -> Result<Vec<f64>> {
        let stats = StatName::parse_all(stat_names)?;
        Ok(self.projection(&stats))
    }

    pub fn projection(&self, stats: &[StatName]) -> Vec<f64> {
        let mut values = self.window_stats(PROJECTION_WINDOW, stats).values;
        for (value, stat) in values.iter_mut().zip(stats) {
            if let Some(&forced) = self.overrides.get(stat) {
                *value = forced;
            }
        }
        values
    }
}

impl From<PlayerInfo> for Player {
    fn from(info: PlayerInfo) -> Self {
        Self::new(info)
    }
}

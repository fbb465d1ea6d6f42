//! Identifier registries for ESPN basketball stat payloads.
//!
//! ESPN keys player stat blocks by an opaque six-character window code
//! (`"032020"` is the last 30 days of the 2020 season) and the stats inside a
//! block by opaque numeric strings (`"0"` is points). Both tables are fixed;
//! an unknown code or name is an error, never a default.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;


/// Season whose stat blocks the window codes identify.
pub const REGISTRY_SEASON: u16 = 2020;

/// Window that backs [`crate::player::Player::project`].
pub const PROJECTION_WINDOW: StatWindow = StatWindow::ThirtyDay;

/// Time window a stat block covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatWindow {
    #[serde(rename = "7-day")]
    SevenDay,
    #[serde(rename = "15-day")]
    FifteenDay,
    #[serde(rename = "30-day")]
    ThirtyDay,
    #[serde(rename = "this-season")]
    ThisSeason,
    #[serde(rename = "last-season")]
    LastSeason,
    #[serde(rename = "this-proj")]
    ThisProjection,
    #[serde(rename = "last-proj")]
    LastProjection,
}

impl StatWindow {
    pub const ALL: [StatWindow; 7] = [
        StatWindow::SevenDay,
        StatWindow::FifteenDay,
        StatWindow::ThirtyDay,
        StatWindow::ThisSeason,
        StatWindow::LastSeason,
        StatWindow::ThisProjection,
        StatWindow::LastProjection,
    ];

    /// ESPN stat block `id` for this window.
    pub fn code(self) -> &'static str {
        match self {
            StatWindow::SevenDay => "012020",
            StatWindow::FifteenDay => "022020",
            StatWindow::ThirtyDay => "032020",
            StatWindow::ThisSeason => "002020",
            StatWindow::LastSeason => "002019",
            StatWindow::ThisProjection => "102020",
            StatWindow::LastProjection => "102019",
        }
    }

    /// Canonical label, e.g. `"30-day"`.
    pub fn label(self) -> &'static str {
        match self {
            StatWindow::SevenDay => "7-day",
            StatWindow::FifteenDay => "15-day",
            StatWindow::ThirtyDay => "30-day",
            StatWindow::ThisSeason => "this-season",
            StatWindow::LastSeason => "last-season",
            StatWindow::ThisProjection => "this-proj",
            StatWindow::LastProjection => "last-proj",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|w| w.code() == code)
            .ok_or_else(|| EspnError::UnknownWindowCode {
                code: code.to_string(),
            })
    }

    pub fn from_label(label: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|w| w.label() == label)
            .ok_or_else(|| EspnError::UnknownWindow {
                label: label.to_string(),
            })
    }
}

impl fmt::Display for StatWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatWindow {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

/// Per-game statistic tracked in ESPN basketball stat blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatName {
    #[serde(rename = "PTS")]
    Points,
    #[serde(rename = "BLK")]
    Blocks,
    #[serde(rename = "STL")]
    Steals,
    #[serde(rename = "AST")]
    Assists,
    #[serde(rename = "REB")]
    Rebounds,
    #[serde(rename = "TO")]
    Turnovers,
    #[serde(rename = "FGM")]
    FieldGoalsMade,
    #[serde(rename = "FGA")]
    FieldGoalsAttempted,
    #[serde(rename = "FTM")]
    FreeThrowsMade,
    #[serde(rename = "FTA")]
    FreeThrowsAttempted,
    #[serde(rename = "3PM")]
    ThreesMade,
    #[serde(rename = "3PA")]
    ThreesAttempted,
    #[serde(rename = "FG%")]
    FieldGoalPct,
    #[serde(rename = "FT%")]
    FreeThrowPct,
    #[serde(rename = "MIN")]
    Minutes,
}

impl StatName {
    /// Standard nine-category head-to-head line.
    pub const NINE_CATEGORIES: [StatName; 9] = [
        StatName::Points,
        StatName::Rebounds,
        StatName::Assists,
        StatName::Steals,
        StatName::Blocks,
        StatName::ThreesMade,
        StatName::FieldGoalPct,
        StatName::FreeThrowPct,
        StatName::Turnovers,
    ];

    pub const ALL: [StatName; 15] = [
        StatName::Points,
        StatName::Blocks,
        StatName::Steals,
        StatName::Assists,
        StatName::Rebounds,
        StatName::Turnovers,
        StatName::FieldGoalsMade,
        StatName::FieldGoalsAttempted,
        StatName::FreeThrowsMade,
        StatName::FreeThrowsAttempted,
        StatName::ThreesMade,
        StatName::ThreesAttempted,
        StatName::FieldGoalPct,
        StatName::FreeThrowPct,
        StatName::Minutes,
    ];

    /// Key of this stat inside `averageStats` / `stats`.
    pub fn code(self) -> &'static str {
        match self {
            StatName::Points => "0",
            StatName::Blocks => "1",
            StatName::Steals => "2",
            StatName::Assists => "3",
            StatName::Rebounds => "6",
            StatName::Turnovers => "11",
            StatName::FieldGoalsMade => "13",
            StatName::FieldGoalsAttempted => "14",
            StatName::FreeThrowsMade => "15",
            StatName::FreeThrowsAttempted => "16",
            StatName::ThreesMade => "17",
            StatName::ThreesAttempted => "18",
            StatName::FieldGoalPct => "19",
            StatName::FreeThrowPct => "20",
            StatName::Minutes => "40",
        }
    }

    /// Short display name, e.g. `"FG%"`.
    pub fn short_name(self) -> &'static str {
        match self {
            StatName::Points => "PTS",
            StatName::Blocks => "BLK",
            StatName::Steals => "STL",
            StatName::Assists => "AST",
            StatName::Rebounds => "REB",
            StatName::Turnovers => "TO",
            StatName::FieldGoalsMade => "FGM",
            StatName::FieldGoalsAttempted => "FGA",
            StatName::FreeThrowsMade => "FTM",
            StatName::FreeThrowsAttempted => "FTA",
            StatName::ThreesMade => "3PM",
            StatName::ThreesAttempted => "3PA",
            StatName::FieldGoalPct => "FG%",
            StatName::FreeThrowPct => "FT%",
            StatName::Minutes => "MIN",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| EspnError::UnknownStatCode {
                code: code.to_string(),
            })
    }

    /// Case-sensitive lookup by short name.
    pub fn from_short_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.short_name() == name)
            .ok_or_else(|| EspnError::UnknownStat {
                name: name.to_string(),
            })
    }

    /// Resolve a list of short names, failing on the first unknown one.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>> {
        names
            .iter()
            .map(|n| Self::from_short_name(n.as_ref()))
            .collect()
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for StatName {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_short_name(s)
    }
}

/// Window label → ESPN block code.
pub fn window_code(label: &str) -> Result<&'static str> {
    StatWindow::from_label(label).map(StatWindow::code)
}

/// ESPN block code → window label.
pub fn window_label(code: &str) -> Result<&'static str> {
    StatWindow::from_code(code).map(StatWindow::label)
}

/// Stat short name → stat key.
pub fn stat_code(name: &str) -> Result<&'static str> {
    StatName::from_short_name(name).map(StatName::code)
}

/// Stat key → stat short name.
pub fn stat_name(code: &str) -> Result<&'static str> {
    StatName::from_code(code).map(StatName::short_name)
}

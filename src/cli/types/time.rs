//! Season and calendar-date types.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
///
/// ESPN names a basketball season by the year it ends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(crate::espn::registry::REGISTRY_SEASON)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Calendar date in the `YYYYMMDD` form the ESPN scoreboard expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameDate(String);

impl GameDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GameDate {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EspnError::InvalidEntry {
                input: s.to_string(),
                reason: "expected a date as YYYYMMDD".to_string(),
            });
        }
        let month: u8 = s[4..6].parse()?;
        let day: u8 = s[6..8].parse()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(EspnError::InvalidEntry {
                input: s.to_string(),
                reason: "month or day out of range".to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

//! Structured CLI values for manual injury rows and stat overrides.

use crate::cli::types::ids::PlayerId;
use crate::error::{EspnError, Result};
use crate::espn::registry::StatName;
use std::str::FromStr;

fn invalid(input: &str, reason: &str) -> EspnError {
    EspnError::InvalidEntry {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// A manual status row: `PLAYER|POS|UPDATED|RETURN` or
/// `PLAYER|POS|UPDATED|INJURY|RETURN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub player: String,
    pub position: String,
    pub updated: String,
    pub injury: Option<String>,
    pub return_date: String,
}

impl FromStr for StatusEntry {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('|').map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(invalid(s, "fields must not be empty"));
        }
        match parts.as_slice() {
            [player, position, updated, return_date] => Ok(Self {
                player: player.to_string(),
                position: position.to_string(),
                updated: updated.to_string(),
                injury: None,
                return_date: return_date.to_string(),
            }),
            [player, position, updated, injury, return_date] => Ok(Self {
                player: player.to_string(),
                position: position.to_string(),
                updated: updated.to_string(),
                injury: Some(injury.to_string()),
                return_date: return_date.to_string(),
            }),
            _ => Err(invalid(
                s,
                "expected PLAYER|POS|UPDATED|RETURN or PLAYER|POS|UPDATED|INJURY|RETURN",
            )),
        }
    }
}

/// A per-player stat override: `PLAYER_ID:STAT=VALUE`, e.g. `3032977:PTS=27.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverrideArg {
    pub player_id: PlayerId,
    pub stat: StatName,
    pub value: f64,
}

impl FromStr for OverrideArg {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        let (id, rest) = s
            .split_once(':')
            .ok_or_else(|| invalid(s, "expected PLAYER_ID:STAT=VALUE"))?;
        let (stat, value) = rest
            .split_once('=')
            .ok_or_else(|| invalid(s, "expected PLAYER_ID:STAT=VALUE"))?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| invalid(s, "override value is not a number"))?;
        if !value.is_finite() {
            return Err(invalid(s, "override value must be finite"));
        }

        Ok(Self {
            player_id: id.trim().parse()?,
            stat: stat.trim().parse()?,
            value,
        })
    }
}

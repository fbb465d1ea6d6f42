//! Injury/suspension report kept as a columnar table.
//!
//! Five named columns hold equal-length value lists; row `i` of every column
//! describes one status entry. All mutation goes through methods that touch
//! every column, so the columns stay in lock-step. A table loaded through
//! serde is checked again by [`InjuryTable::rows`] before export, for both
//! column lengths and column count.

pub mod export;
pub mod parse;


use serde::{Deserialize, Serialize};

use crate::error::{EspnError, Result};

/// Column headers used when the report supplies none.
pub const INJURY_COLUMNS: [&str; 5] = ["Player", "Position", "Updated", "Injury", "Injury Status"];

/// Injury description written for suspensions.
pub const SUSPENSION: &str = "Suspension";

const RETURN_TEMPLATE_PREFIX: &str = "Expected to be out until at least ";

/// Return-column text for a manually entered return date.
pub fn expected_return(return_date: &str) -> String {
    format!("{RETURN_TEMPLATE_PREFIX}{return_date}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
}

impl Column {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryTable {
    columns: Vec<Column>,
}

impl Default for InjuryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl InjuryTable {
    /// Empty table with the standard headers.
    pub fn new() -> Self {
        Self::with_headers(INJURY_COLUMNS)
    }

    /// Empty table with report-supplied headers.
    pub fn with_headers<S: AsRef<str>>(headers: [S; 5]) -> Self {
        Self {
            columns: headers.iter().map(|h| Column::empty(h.as_ref())).collect(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows, as counted by the Player column.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells of row `index`, one per column.
    pub fn row(&self, index: usize) -> Option<Vec<&str>> {
        self.columns
            .iter()
            .map(|c| c.values.get(index).map(String::as_str))
            .collect()
    }

    /// First row whose Player cell equals `player` exactly.
    pub fn position_of(&self, player: &str) -> Option<usize> {
        self.columns
            .first()?
            .values
            .iter()
            .position(|p| p == player)
    }

    /// Append a row exactly as given, one cell per column.
    pub fn push_row(&mut self, cells: [String; 5]) {
        for (column, cell) in self.columns.iter_mut().zip(cells) {
            column.values.push(cell);
        }
    }

    pub fn append_injury(
        &mut self,
        player: &str,
        position: &str,
        updated: &str,
        injury: &str,
        return_date: &str,
    ) {
        self.push_row([
            player.to_string(),
            position.to_string(),
            updated.to_string(),
            injury.to_string(),
            expected_return(return_date),
        ]);
    }

    pub fn append_suspension(&mut self, player: &str, position: &str, updated: &str, return_date: &str) {
        self.append_injury(player, position, updated, SUSPENSION, return_date);
    }

    /// Overwrite the four status cells of `player`'s first row.
    ///
    /// Returns `false` and leaves the table untouched when the player has no row.
    pub fn update_injury(
        &mut self,
        player: &str,
        position: &str,
        updated: &str,
        injury: &str,
        return_date: &str,
    ) -> bool {
        let Some(index) = self.position_of(player) else {
            return false;
        };

        let status = [
            position.to_string(),
            updated.to_string(),
            injury.to_string(),
            expected_return(return_date),
        ];
        for (column, cell) in self.columns.iter_mut().skip(1).zip(status) {
            if let Some(slot) = column.values.get_mut(index) {
                *slot = cell;
            }
        }
        true
    }

    /// Check that every column has as many values as the Player column and
    /// that the table has exactly the five report columns.
    pub fn validate(&self) -> Result<()> {
        let expected = self.len();
        if let Some(column) = self.columns.iter().find(|c| c.values.len() != expected) {
            return Err(EspnError::MalformedTable {
                column: column.name.clone(),
                expected,
                found: column.values.len(),
            });
        }
        if self.columns.len() != INJURY_COLUMNS.len() {
            return Err(EspnError::MalformedColumns {
                expected: INJURY_COLUMNS.len(),
                found: self.columns.len(),
            });
        }
        Ok(())
    }

    /// Row-oriented copy of the data (no header row).
    pub fn rows(&self) -> Result<Vec<Vec<String>>> {
        self.validate()?;
        Ok((0..self.len())
            .map(|i| self.columns.iter().map(|c| c.values[i].clone()).collect())
            .collect())
    }
}

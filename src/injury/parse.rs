//! Turning the CBS Sports injury report into an [`InjuryTable`].
//!
//! The page holds one HTML table per pro team, each starting with its own
//! header row. Rows are filtered as follows:
//! - the first row supplies the column names when it is a header
//! - later header rows (Player cell reads "Player") are skipped
//! - rows without exactly five cells are skipped

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use super::InjuryTable;
use crate::error::{EspnError, Result};

/// Default injury report location.
pub const INJURY_REPORT_URL: &str = "https://www.cbssports.com/nba/injuries/";

pub const CELLS_PER_ROW: usize = 5;

const HEADER_PLAYER_CELL: &str = "Player";

/// Report spellings that differ from ESPN's.
const NAME_CORRECTIONS: &[(&str, &str)] = &[("Moe Wagner", "Moritz Wagner")];

/// The Player cell carries the abbreviated name, a line break, then the full
/// name. Keep the text after the last line break.
pub fn clean_player_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    let full = match trimmed.rfind('\n') {
        Some(idx) => trimmed[idx + 1..].trim(),
        None => trimmed,
    };

    NAME_CORRECTIONS
        .iter()
        .find(|(from, _)| *from == full)
        .map_or_else(|| full.to_string(), |(_, to)| to.to_string())
}

fn is_header(row: &[String]) -> bool {
    row.first()
        .is_some_and(|cell| cell.trim() == HEADER_PLAYER_CELL)
}

/// Build a table from raw row cells (first row may be the header).
pub fn table_from_rows(rows: Vec<Vec<String>>) -> InjuryTable {
    let mut rows = rows.into_iter().peekable();

    let header = rows.next_if(|first| is_header(first) && first.len() == CELLS_PER_ROW);
    let mut table = match header {
        Some(header) => {
            let names: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();
            match <[String; CELLS_PER_ROW]>::try_from(names) {
                Ok(names) => InjuryTable::with_headers(names),
                Err(_) => InjuryTable::new(),
            }
        }
        None => InjuryTable::new(),
    };

    let mut skipped = 0usize;
    for (index, row) in rows.enumerate() {
        if is_header(&row) {
            debug!(row = index, "skipping repeated header");
            continue;
        }
        let Ok(cells) = <[String; CELLS_PER_ROW]>::try_from(row) else {
            skipped += 1;
            debug!(row = index, "skipping row with wrong cell count");
            continue;
        };

        let [player, position, updated, injury, status] = cells;
        table.push_row([
            clean_player_cell(&player),
            position.trim().to_string(),
            updated.trim().to_string(),
            injury.trim().to_string(),
            status.trim().to_string(),
        ]);
    }

    info!(rows = table.len(), skipped, "injury report parsed");
    table
}

/// Text of every direct `td`/`th` child of every `<tr>` on the page.
pub fn extract_rows(html: &str) -> Result<Vec<Vec<String>>> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr").map_err(|e| EspnError::Html {
        message: format!("invalid row selector: {e}"),
    })?;

    Ok(document
        .select(&row_selector)
        .map(|row| {
            row.children()
                .filter_map(ElementRef::wrap)
                .filter(|cell| matches!(cell.value().name(), "td" | "th"))
                .map(|cell| cell.text().collect::<String>())
                .collect()
        })
        .collect())
}

/// Parse a full injury report page.
pub fn parse_report(html: &str) -> Result<InjuryTable> {
    Ok(table_from_rows(extract_rows(html)?))
}

//! Injury report command implementation

use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    cli::types::StatusEntry,
    core::{fetch_text, try_read_to_string},
    injury::{export::write_xlsx, parse::parse_report, InjuryTable},
    EspnError, Result,
};

/// Parameters for the injuries command
#[derive(Debug, Clone)]
pub struct InjuriesParams {
    /// Saved report page; fetched from `url` when absent.
    pub html: Option<PathBuf>,
    pub url: String,
    pub injuries: Vec<StatusEntry>,
    pub suspensions: Vec<StatusEntry>,
    pub updates: Vec<StatusEntry>,
    pub output: PathBuf,
    pub as_json: bool,
}

fn require_injury(entry: &StatusEntry) -> Result<&str> {
    entry
        .injury
        .as_deref()
        .ok_or_else(|| EspnError::InvalidEntry {
            input: entry.player.clone(),
            reason: "injury entries need PLAYER|POS|UPDATED|INJURY|RETURN".to_string(),
        })
}

/// Apply manual rows in order: injuries, then suspensions, then updates.
///
/// Returns the number of updates that matched no player; those leave the
/// table unchanged.
pub fn apply_entries(
    table: &mut InjuryTable,
    injuries: &[StatusEntry],
    suspensions: &[StatusEntry],
    updates: &[StatusEntry],
) -> Result<usize> {
    for e in injuries.iter().chain(updates) {
        require_injury(e)?;
    }
    if let Some(e) = suspensions.iter().find(|e| e.injury.is_some()) {
        return Err(EspnError::InvalidEntry {
            input: e.player.clone(),
            reason: "suspensions take PLAYER|POS|UPDATED|RETURN".to_string(),
        });
    }

    for e in injuries {
        table.append_injury(&e.player, &e.position, &e.updated, require_injury(e)?, &e.return_date);
    }
    for e in suspensions {
        table.append_suspension(&e.player, &e.position, &e.updated, &e.return_date);
    }

    let mut missed = 0;
    for e in updates {
        if !table.update_injury(&e.player, &e.position, &e.updated, require_injury(e)?, &e.return_date) {
            warn!(player = %e.player, "no injury row to update");
            missed += 1;
        }
    }
    Ok(missed)
}

/// Handle the injuries command
pub async fn handle_injuries(params: InjuriesParams) -> Result<()> {
    let html = match &params.html {
        Some(path) => try_read_to_string(path).ok_or_else(|| EspnError::Cache {
            message: format!("could not read {}", path.display()),
        })?,
        None => {
            info!(url = %params.url, "fetching injury report");
            fetch_text(&params.url).await?
        }
    };

    let mut table = parse_report(&html)?;
    apply_entries(&mut table, &params.injuries, &params.suspensions, &params.updates)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    }

    write_xlsx(&table, &params.output)?;
    println!("✓ {} injury rows written to {}", table.len(), params.output.display());
    Ok(())
}

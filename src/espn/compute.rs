use crate::espn::registry::{StatName, StatWindow};
use crate::espn::types::{StatBlock, StatMap};


/// The populated stat maps of one window.
#[derive(Debug, Clone, Copy)]
pub struct WindowBlock<'a> {
    pub averages: &'a StatMap,
    pub totals: Option<&'a StatMap>,
}

/// Select the stat block for a window.
/// Blocks without `averageStats` are skipped; the first populated match wins.
pub fn select_window_block(blocks: &[StatBlock], window: StatWindow) -> Option<WindowBlock<'_>> {
    let code = window.code();
    blocks.iter().find_map(|b| {
        if b.id != code {
            return None;
        }
        b.average_stats.as_ref().map(|averages| WindowBlock {
            averages,
            totals: b.total_stats.as_ref(),
        })
    })
}

/// Read the requested per-game averages in order. Stats ESPN left out of the
/// block read as 0.0.
pub fn average_values(averages: &StatMap, stats: &[StatName]) -> Vec<f64> {
    stats
        .iter()
        .map(|s| averages.get(s.code()).copied().unwrap_or(0.0))
        .collect()
}

/// Recover the game count as total points / average points.
///
/// ESPN exposes no games-played field. Returns `None` when either points entry
/// is missing, the average is zero, or the ratio is not a usable count.
///
/// The ratio is rounded to the nearest integer rather than truncated, so a
/// float average like 25.0001 over 250 total points still counts 10 games.
pub fn games_played(averages: &StatMap, totals: Option<&StatMap>) -> Option<u32> {
    let key = StatName::Points.code();
    let total = *totals?.get(key)?;
    let average = *averages.get(key)?;
    if average == 0.0 {
        return None;
    }

    let ratio = total / average;
    if !ratio.is_finite() || ratio < 0.0 || ratio > u32::MAX as f64 {
        return None;
    }
    Some(ratio.round() as u32)
}

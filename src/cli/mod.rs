//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{GameDate, LeagueId, OverrideArg, Season, StatusEntry, TeamId};

use crate::espn::registry::{StatName, StatWindow};
use crate::injury::{export::DEFAULT_EXPORT_PATH, parse::INJURY_REPORT_URL};

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Per-game stat lines for rostered players.
    ///
    /// Defaults to the projection: 30-day averages with `--override` values on top.
    Players {
        /// League ID (or set `ESPN_FBA_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Season year; stat windows only cover 2020, other years are rejected.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Fantasy team id (repeatable); all rostered teams when omitted.
        #[clap(long = "team", short = 't')]
        teams: Vec<TeamId>,

        /// Stat short name (repeatable): `-S PTS -S REB`.
        #[clap(long = "stat", short = 'S', default_values_t = StatName::NINE_CATEGORIES.to_vec())]
        stats: Vec<StatName>,

        /// Show raw averages for this window (e.g. `this-season`) instead of the projection.
        #[clap(long)]
        window: Option<StatWindow>,

        /// Manual projection value (repeatable): `--override 3032977:PTS=27.5`.
        #[clap(long = "override", short = 'o')]
        overrides: Vec<OverrideArg>,

        /// Read a saved `kona_player_info` payload instead of calling ESPN.
        #[clap(long)]
        input: Option<PathBuf>,

        /// Force refresh from ESPN, overwriting the cache.
        #[clap(long)]
        refresh: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Build the injury/suspension report and export it as a spreadsheet.
    Injuries {
        /// Parse a saved report page instead of fetching `--url`.
        #[clap(long)]
        html: Option<PathBuf>,

        /// Injury report page.
        #[clap(long, default_value = INJURY_REPORT_URL)]
        url: String,

        /// Add an injury row: `PLAYER|POS|UPDATED|INJURY|RETURN`.
        #[clap(long = "injury")]
        injuries: Vec<StatusEntry>,

        /// Add a suspension row: `PLAYER|POS|UPDATED|RETURN`.
        #[clap(long = "suspension")]
        suspensions: Vec<StatusEntry>,

        /// Overwrite a player's row: `PLAYER|POS|UPDATED|INJURY|RETURN`.
        #[clap(long = "update")]
        updates: Vec<StatusEntry>,

        /// Spreadsheet destination.
        #[clap(long, short, default_value = DEFAULT_EXPORT_PATH)]
        output: PathBuf,

        /// Also print the table as JSON.
        #[clap(long)]
        json: bool,
    },

    /// List the league's fantasy teams.
    Teams {
        /// League ID (or set `ESPN_FBA_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Season year (e.g. 2020).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Pro teams playing on the given dates (`YYYYMMDD`).
    Schedule {
        #[clap(required = true)]
        dates: Vec<GameDate>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "espn-fba", about = "ESPN Fantasy Basketball CLI")]
pub struct ESPN {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from ESPN Fantasy Basketball
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

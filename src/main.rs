//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use espn_fba::{
    cli::{Commands, GetCmd, ESPN},
    commands::{
        injuries::{handle_injuries, InjuriesParams},
        league_data::{handle_schedule, handle_teams},
        players::{handle_players, PlayersParams},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let app = ESPN::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Players {
                league_id,
                season,
                teams,
                stats,
                window,
                overrides,
                input,
                refresh,
                json,
            } => {
                handle_players(PlayersParams {
                    league_id,
                    season,
                    teams,
                    stats,
                    window,
                    overrides,
                    input,
                    refresh,
                    as_json: json,
                })
                .await?
            }

            GetCmd::Injuries {
                html,
                url,
                injuries,
                suspensions,
                updates,
                output,
                json,
            } => {
                handle_injuries(InjuriesParams {
                    html,
                    url,
                    injuries,
                    suspensions,
                    updates,
                    output,
                    as_json: json,
                })
                .await?
            }

            GetCmd::Teams {
                league_id,
                season,
                json,
            } => handle_teams(league_id, season, json).await?,

            GetCmd::Schedule { dates, json } => handle_schedule(dates, json).await?,
        },
    }

    Ok(())
}

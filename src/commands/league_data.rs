//! Fantasy team and pro schedule commands

use crate::{
    cli::types::GameDate,
    espn::http::{get_schedule, get_teams},
    roster::{daily_schedule, team_abbrevs},
    LeagueId, Result, Season,
};

use super::resolve_league_id;

/// Print the league's fantasy teams.
pub async fn handle_teams(league_id: Option<LeagueId>, season: Season, as_json: bool) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let teams = team_abbrevs(&get_teams(league_id, season).await?);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
    } else {
        for (id, abbrev) in &teams {
            println!("{id:>3}  {abbrev}");
        }
    }
    Ok(())
}

/// Print the pro teams playing on each requested date.
pub async fn handle_schedule(dates: Vec<GameDate>, as_json: bool) -> Result<()> {
    let mut days = Vec::with_capacity(dates.len());
    for date in dates {
        let schedule = get_schedule(&date).await?;
        days.push((date, schedule));
    }
    let schedule = daily_schedule(days);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        for (date, teams) in &schedule {
            println!("{date}: {} teams playing [{}]", teams.len(), teams.join(", "));
        }
    }
    Ok(())
}

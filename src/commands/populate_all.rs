//! Full population run: schema, teams, then every week of one season.

use crate::{
    cli::types::time::Week,
    config::PopulateConfig,
    espn::http::ScoreboardClient,
    Result,
};

use super::{
    create_tables::create_tables,
    populate_games::{populate_games, WeekOutcome},
    populate_teams::populate_teams,
};

/// Create tables, seed teams, then fetch weeks 1 through
/// `config.through_week` one after another.
///
/// Schema and seeding errors abort the run. A failed week is printed and
/// skipped; the outcome of every week is returned in week order.
pub async fn populate_all(
    config: &PopulateConfig,
    client: &ScoreboardClient,
) -> Result<Vec<(Week, WeekOutcome)>> {
    println!("Starting NFL data population...");

    println!("\n1. Creating tables...");
    create_tables(&config.database_url)?;

    println!("\n2. Populating teams...");
    populate_teams(&config.database_url)?;

    println!("\n3. Populating games for {} season...", config.season);
    let mut outcomes = Vec::new();
    for week in config.through_week.from_first() {
        println!("   Fetching week {}...", week);
        let outcome = populate_games(client, &config.database_url, config.season, Some(week)).await;
        println!("   {}", outcome);
        outcomes.push((week, outcome));
    }

    println!("\nNFL data population completed!");
    Ok(outcomes)
}

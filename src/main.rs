//! Entry point: resolve configuration, then run the full population.

use clap::Parser;
use nfl_populate::{
    cli::NflPopulate,
    commands::populate_all,
    config::{init_env, PopulateConfig},
    espn::http::ScoreboardClient,
    logging::{init_tracing, DEFAULT_LOG_FILTER},
};

/// Run the populator.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_env();
    init_tracing(DEFAULT_LOG_FILTER)?;

    let args = NflPopulate::parse();

    // A missing database URL stops here, before any table is touched.
    let config = PopulateConfig::resolve(args.database_url, args.season, args.through_week)?;
    let client = ScoreboardClient::with_base_url(config.scoreboard_base_url.clone())?;

    populate_all(&config, &client).await?;

    Ok(())
}

//! Seed the team reference table.

use crate::{
    config::DatabaseUrl,
    storage::{NflDatabase, NFL_TEAMS},
    Result,
};

/// Insert all 32 teams, leaving existing abbreviations untouched.
///
/// Returns the number of rows inserted by this run; on an already seeded
/// database that is 0 even though all 32 teams are present.
pub fn populate_teams(database_url: &DatabaseUrl) -> Result<usize> {
    let mut db = NflDatabase::open(database_url)?;
    let inserted = db.seed_teams(&NFL_TEAMS)?;
    db.close()?;

    println!("Inserted {} teams", inserted);
    Ok(inserted)
}

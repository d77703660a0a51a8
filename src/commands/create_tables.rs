//! Create the NFL tables if they do not exist yet.

use crate::{config::DatabaseUrl, storage::NflDatabase, Result};

/// Open a connection, create all four tables, commit and close.
///
/// Safe to run any number of times against the same database.
pub fn create_tables(database_url: &DatabaseUrl) -> Result<()> {
    let mut db = NflDatabase::open(database_url)?;
    db.initialize_schema()?;
    db.close()?;

    println!("Tables created successfully");
    Ok(())
}

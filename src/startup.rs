use dioxus_logger::tracing::Level;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::Error};

/// Install the global logger at the provided level
pub fn init_logger(level: Level) -> Result<(), Error> {
    dioxus_logger::init(level).map_err(|e| Error::InternalError(e.to_string()))
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

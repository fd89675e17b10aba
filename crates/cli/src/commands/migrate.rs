use anyhow::Result;
use pulse_storage::PgStorage;

use crate::get_database_url;

/// Connect and run migrations without starting the server. `PgStorage::new`
/// migrates on connect, so this is just connect-and-drop.
pub(crate) async fn run() -> Result<()> {
    PgStorage::new(&get_database_url()?).await?;
    tracing::info!("Migrations applied");
    Ok(())
}

use std::sync::Arc;

use anyhow::Result;
use pulse_http::{AppState, create_router};
use pulse_storage::PgStorage;

use crate::get_database_url;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage = Arc::new(PgStorage::new(&get_database_url()?).await?);

    let state = Arc::new(AppState { store: storage });
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

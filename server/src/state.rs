use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;
use tracing::info;

use crate::{catalog, config::Config, error::AppError, store};

/// Shared handles for the stateless request handlers. The connection
/// is the only cross-request state; handlers receive it through
/// `axum::extract::State` rather than a process-wide singleton.
pub struct AppState {
    pub config: Config,
    pub db: Mutex<Connection>,
}

impl AppState {
    pub fn init(config: Config) -> Result<Arc<Self>, AppError> {
        let conn = Connection::open(&config.database_path)?;

        store::init_schema(&conn)?;
        let seeded = store::seed_items(&conn, catalog::DISHES)?;
        info!("Catalog ready, {seeded} dishes upserted");

        Ok(Arc::new(Self {
            config,
            db: Mutex::new(conn),
        }))
    }
}

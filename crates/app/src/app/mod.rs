use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::services::AppServices;
use focus_db::Db;
use focus_usage::{DEFAULT_QUERY_TIMEOUT, UsageSnapshotProvider};

/// Storage location and usage query limits.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub snapshot_timeout: Duration,
}

impl AppConfig {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            db_path,
            snapshot_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

/// Application state shared by frontend backends (HTTP API, CLI loop).
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: AppConfig, provider: Arc<dyn UsageSnapshotProvider>) -> Self {
        let services = AppServices::new(&config, provider);
        Self { config, services }
    }

    pub fn is_fresh_db(&self) -> bool {
        !self.config.db_path.exists()
    }

    pub fn setup_db(&self) -> Result<()> {
        setup_db(&self.config.db_path)
    }

    pub fn initialize(&self) -> Result<()> {
        let is_fresh_db = self.is_fresh_db();
        self.setup_db()
            .map_err(|err| AppError::Message(format!("initialize db: {}", err)))?;
        if is_fresh_db {
            tracing::info!(path = %self.config.db_path.display(), "created focus database");
        }
        Ok(())
    }

    pub fn open_db(&self) -> Result<Db> {
        Ok(Db::open(&self.config.db_path)?)
    }
}

pub fn setup_db(path: &std::path::Path) -> Result<()> {
    let mut db = Db::open(path)?;
    db.migrate()?;
    Ok(())
}

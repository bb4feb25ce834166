use std::path::PathBuf;

use crate::Result;

const DB_FILE_NAME: &str = "focus.sqlite";
const SNAPSHOT_FILE_NAME: &str = "usage-snapshot.json";

#[derive(Clone, Debug)]
pub struct AppPaths {
    pub app_data_dir: PathBuf,
    pub db_path: PathBuf,
    /// Default location of the usage snapshot file fed by the device bridge.
    pub snapshot_path: PathBuf,
}

impl AppPaths {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let db_path = app_data_dir.join(DB_FILE_NAME);
        let snapshot_path = app_data_dir.join(SNAPSHOT_FILE_NAME);
        Self {
            app_data_dir,
            db_path,
            snapshot_path,
        }
    }
}

pub fn ensure_app_data_dir(paths: &AppPaths) -> Result<()> {
    std::fs::create_dir_all(&paths.app_data_dir)?;
    Ok(())
}

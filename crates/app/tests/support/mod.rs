#![allow(dead_code)]

use std::sync::Arc;

use focus_app::{AppConfig, AppState};
use focus_core::ForegroundUsage;
use focus_usage::StaticUsageProvider;
use tempfile::TempDir;

pub struct TestApp {
    pub _dir: TempDir,
    pub state: AppState,
    pub provider: Arc<StaticUsageProvider>,
}

pub fn setup_app() -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = AppConfig::new(dir.path().join("focus.sqlite"));
    let provider = Arc::new(StaticUsageProvider::default());
    let state = AppState::new(config, provider.clone());
    state.setup_db().expect("setup db");
    TestApp {
        _dir: dir,
        state,
        provider,
    }
}

pub fn usage_row(package: &str, millis: i64) -> ForegroundUsage {
    ForegroundUsage {
        package_name: package.to_string(),
        total_foreground_millis: millis,
    }
}

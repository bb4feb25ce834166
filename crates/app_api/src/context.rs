use std::path::PathBuf;

use focus_app::AppState;

#[derive(Clone)]
pub struct AppContext {
    pub app_state: AppState,
    pub app_data_dir: PathBuf,
}

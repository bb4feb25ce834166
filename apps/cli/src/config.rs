use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_DIR_NAME: &str = "focus";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_PORT: u16 = 3846;
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;
const DEFAULT_SNAPSHOT_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub port: u16,
    /// Usage export written by the device bridge; defaults to the data dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<String>,
    pub refresh_interval_secs: u64,
    pub snapshot_timeout_ms: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            snapshot_path: None,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            snapshot_timeout_ms: DEFAULT_SNAPSHOT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: CliConfig,
    pub paths: ConfigPaths,
    pub created: bool,
}

pub fn load_or_create() -> Result<ConfigLoad, String> {
    load_or_create_in(&config_dir()?)
}

fn load_or_create_in(dir: &Path) -> Result<ConfigLoad, String> {
    fs::create_dir_all(dir)
        .map_err(|err| format!("create config dir {}: {}", dir.display(), err))?;
    let file = dir.join(CONFIG_FILE_NAME);
    let paths = ConfigPaths { file };

    if paths.file.exists() {
        let contents = fs::read_to_string(&paths.file)
            .map_err(|err| format!("read config {}: {}", paths.file.display(), err))?;
        let config: CliConfig = toml::from_str(&contents)
            .map_err(|err| format!("parse config {}: {}", paths.file.display(), err))?;
        if config.refresh_interval_secs == 0 {
            return Err(format!(
                "refresh_interval_secs in {} must be positive",
                paths.file.display()
            ));
        }
        if config.snapshot_timeout_ms == 0 {
            return Err(format!(
                "snapshot_timeout_ms in {} must be positive",
                paths.file.display()
            ));
        }
        return Ok(ConfigLoad {
            config,
            paths,
            created: false,
        });
    }

    let config = CliConfig::default();
    let contents =
        toml::to_string_pretty(&config).map_err(|err| format!("serialize config: {}", err))?;
    fs::write(&paths.file, contents)
        .map_err(|err| format!("write config {}: {}", paths.file.display(), err))?;

    Ok(ConfigLoad {
        config,
        paths,
        created: true,
    })
}

fn config_dir() -> Result<PathBuf, String> {
    if let Ok(base) = std::env::var("XDG_CONFIG_HOME")
        && !base.is_empty()
    {
        return Ok(PathBuf::from(base).join(CONFIG_DIR_NAME));
    }
    let home = std::env::var("HOME").map_err(|err| format!("resolve HOME: {}", err))?;
    Ok(PathBuf::from(home).join(".config").join(CONFIG_DIR_NAME))
}

/// Expands a leading `~` against `$HOME`.
pub fn expand_home_path(path: &str) -> PathBuf {
    let home = std::env::var("HOME").ok();
    match (path, home) {
        ("~", Some(home)) => PathBuf::from(home),
        (path, Some(home)) if path.starts_with("~/") => PathBuf::from(home).join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_defaults_then_reloads() {
        let dir = tempfile::tempdir().expect("temp dir");
        let created = load_or_create_in(dir.path()).expect("create");
        assert!(created.created);
        assert_eq!(created.config, CliConfig::default());

        let loaded = load_or_create_in(dir.path()).expect("load");
        assert!(!loaded.created);
        assert_eq!(loaded.config, CliConfig::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "port = 4100\nsnapshot_path = \"/data/usage.json\"\n",
        )
        .expect("write config");
        let loaded = load_or_create_in(dir.path()).expect("load");
        assert_eq!(loaded.config.port, 4100);
        assert_eq!(
            loaded.config.snapshot_path.as_deref(),
            Some("/data/usage.json")
        );
        assert_eq!(
            loaded.config.refresh_interval_secs,
            DEFAULT_REFRESH_INTERVAL_SECS
        );
    }

    #[test]
    fn rejects_zero_refresh_interval() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "refresh_interval_secs = 0\n",
        )
        .expect("write config");
        assert!(load_or_create_in(dir.path()).is_err());
    }

    #[test]
    fn rejects_zero_snapshot_timeout() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "snapshot_timeout_ms = 0\n",
        )
        .expect("write config");
        let err = load_or_create_in(dir.path()).err().expect("zero timeout");
        assert!(err.contains("snapshot_timeout_ms"));
    }

    #[test]
    fn plain_paths_are_not_expanded() {
        assert_eq!(
            expand_home_path("/var/lib/focus/usage.json"),
            PathBuf::from("/var/lib/focus/usage.json")
        );
    }
}

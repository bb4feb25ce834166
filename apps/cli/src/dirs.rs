use std::path::PathBuf;

const DB_FILE_NAME: &str = "focus.sqlite";
const DATA_DIR_NAME: &str = "focus";

#[derive(Debug, Clone)]
pub struct DataDirResolution {
    pub dir: PathBuf,
    pub matched_existing: bool,
}

/// `$FOCUS_DATA_DIR`, else `$XDG_DATA_HOME/focus`, else
/// `~/.local/share/focus`.
pub fn resolve_data_dir() -> Result<DataDirResolution, String> {
    let dir = match std::env::var("FOCUS_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => default_data_dir()?,
    };
    let matched_existing = dir.join(DB_FILE_NAME).exists();
    Ok(DataDirResolution {
        dir,
        matched_existing,
    })
}

fn default_data_dir() -> Result<PathBuf, String> {
    if let Ok(base) = std::env::var("XDG_DATA_HOME")
        && !base.is_empty()
    {
        return Ok(PathBuf::from(base).join(DATA_DIR_NAME));
    }
    let home = std::env::var("HOME").map_err(|err| format!("resolve HOME: {}", err))?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join(DATA_DIR_NAME))
}

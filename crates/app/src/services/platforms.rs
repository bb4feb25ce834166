use crate::error::{AppError, Result};
use crate::services::{SharedConfig, missing_platform, open_db};
use focus_core::{Platform, builtin_platform, merge_platforms};
use focus_db::Db;

#[derive(Clone)]
pub struct PlatformService {
    config: SharedConfig,
}

impl PlatformService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    /// Built-ins first, then stored platforms in insertion order.
    pub fn list(&self) -> Result<Vec<Platform>> {
        let db = self.db()?;
        Ok(merge_platforms(db.list_platforms()?))
    }

    pub fn get(&self, id: &str) -> Result<Option<Platform>> {
        if let Some(platform) = builtin_platform(id) {
            return Ok(Some(platform));
        }
        let db = self.db()?;
        Ok(db.get_platform(id)?)
    }

    pub fn require(&self, id: &str) -> Result<Platform> {
        self.get(id)?.ok_or_else(|| missing_platform(id))
    }

    pub fn add(&self, platform: &Platform) -> Result<()> {
        validate(platform)?;
        let db = self.db()?;
        db.insert_platform(platform)?;
        tracing::debug!(platform = %platform.id, "platform stored");
        Ok(())
    }

    /// Returns `false` when no stored row matched; built-ins are never stored.
    pub fn update(&self, platform: &Platform) -> Result<bool> {
        validate(platform)?;
        let db = self.db()?;
        Ok(db.update_platform(platform)?)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        let db = self.db()?;
        Ok(db.delete_platform(id)?)
    }

    pub fn set_enabled(&self, id: &str, enabled: bool) -> Result<bool> {
        let db = self.db()?;
        Ok(db.set_platform_enabled(id, enabled)?)
    }
}

fn validate(platform: &Platform) -> Result<()> {
    if platform.id.trim().is_empty() {
        return Err(AppError::InvalidInput("platform id is required".to_string()));
    }
    if platform.name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "platform name is required".to_string(),
        ));
    }
    Ok(())
}

use crate::error::{AppError, Result};
use crate::services::{PlatformService, SharedConfig, open_db};
use crate::util::time::now_ms;
use focus_core::{
    FALLBACK_SEARCH_URL_TEMPLATE, SearchHistoryEntry, SearchResult, fill_search_template,
};
use focus_db::{Db, RECENT_SEARCH_LIMIT};

#[derive(Clone)]
pub struct SearchService {
    config: SharedConfig,
    platforms: PlatformService,
}

impl SearchService {
    pub(super) fn new(config: SharedConfig, platforms: PlatformService) -> Self {
        Self { config, platforms }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    /// Search link for `keyword` on `platform_id`. Unknown platforms fall
    /// back to a web search.
    pub fn search_url(&self, keyword: &str, platform_id: &str) -> Result<String> {
        let template = match self.platforms.get(platform_id)? {
            Some(platform) if !platform.search_url_template.trim().is_empty() => {
                platform.search_url_template
            }
            _ => FALLBACK_SEARCH_URL_TEMPLATE.to_string(),
        };
        Ok(fill_search_template(&template, keyword.trim()))
    }

    /// Builds the search link and records the keyword. A blank keyword is
    /// reported in the result rather than as an error.
    pub fn perform(&self, keyword: &str, platform_id: &str) -> Result<SearchResult> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(SearchResult {
                keyword: String::new(),
                platform: platform_id.to_string(),
                url: String::new(),
                is_success: false,
                error_message: Some("search keyword is empty".to_string()),
            });
        }
        let url = self.search_url(keyword, platform_id)?;
        let now = now_ms();
        self.save(&SearchHistoryEntry {
            id: 0,
            keyword: keyword.to_string(),
            platform: platform_id.to_string(),
            search_time: now,
            created_at: now,
        })?;
        tracing::info!(keyword, platform = platform_id, "search performed");
        Ok(SearchResult {
            keyword: keyword.to_string(),
            platform: platform_id.to_string(),
            url,
            is_success: true,
            error_message: None,
        })
    }

    pub fn save(&self, entry: &SearchHistoryEntry) -> Result<i64> {
        if entry.keyword.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "search keyword is required".to_string(),
            ));
        }
        let db = self.db()?;
        Ok(db.insert_search_history(entry)?)
    }

    /// The ten most recent searches, newest first.
    pub fn recent(&self) -> Result<Vec<SearchHistoryEntry>> {
        let db = self.db()?;
        Ok(db.recent_search_history(RECENT_SEARCH_LIMIT)?)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let db = self.db()?;
        Ok(db.delete_search_history(id)?)
    }

    pub fn clear(&self) -> Result<usize> {
        let db = self.db()?;
        Ok(db.clear_search_history()?)
    }
}

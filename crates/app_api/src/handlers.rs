use focus_app::{AppError, RangeParams, Result, SettingsPatch, now_ms};
use focus_core::{
    DEFAULT_REMINDER_THRESHOLD_MS, MINUTE_MS, Platform, ReminderInfo, SearchHistoryEntry,
    SearchResult, TimeRange, UsageRecord, UserSettings, builtin_platform, format_duration,
};

use crate::{
    AppContext, ClearedResponse, DashboardResponse, DeletedResponse, DismissResponse, IdRequest,
    PlatformEnableRequest, PlatformIdRequest, PlatformRequest, RangeRequest,
    RefreshResponse, ReminderCheckRequest, ReminderCheckResponse, ReminderDismissRequest,
    SearchRequest, SearchUrlResponse, SettingsPutRequest, SettingsResponse, ToggleSettingRequest,
    UpdatedResponse,
};

fn resolve_range(range: Option<String>, start: Option<i64>, end: Option<i64>) -> Result<TimeRange> {
    focus_app::resolve_range(&RangeParams { range, start, end })
}

fn flag(value: bool) -> i64 {
    i64::from(value)
}

/// Stored totals for today plus the live 24 hour snapshot. The reminder flag
/// is evaluated for the default platform's own usage today.
pub async fn dashboard(ctx: &AppContext) -> Result<DashboardResponse> {
    let services = &ctx.app_state.services;
    let live = services.usage.snapshot().await;
    let usage_stats = services.usage.stats()?;
    let settings = services.settings.get()?;
    let platform_today = usage_stats
        .platform_usage
        .get(&settings.default_platform)
        .copied()
        .unwrap_or(0);
    let should_show_reminder = services
        .reminders
        .should_show(&settings.default_platform, platform_today)?;
    Ok(DashboardResponse {
        today_usage: usage_stats.today_usage,
        platform_usage: usage_stats.platform_usage.clone(),
        usage_stats,
        live,
        settings,
        should_show_reminder,
        dismissed_until: services.reminders.dismissed_until()?,
    })
}

/// Pulls the latest OS totals into the store, then records reminders for
/// platforms over the threshold.
pub async fn refresh(ctx: &AppContext) -> Result<RefreshResponse> {
    let services = &ctx.app_state.services;
    let stats = services.usage.refresh().await?;
    let reminders = services
        .reminders
        .check_usage(&stats.snapshot.platform_usage, now_ms())?;
    tracing::debug!(
        records = stats.records_inserted,
        reminders = reminders.len(),
        "refresh finished"
    );
    Ok(RefreshResponse { stats, reminders })
}

/// Text shown to the user when a reminder fires.
pub fn reminder_message(reminder: &ReminderInfo) -> String {
    let name = builtin_platform(&reminder.app_name)
        .map(|platform| platform.name)
        .unwrap_or_else(|| reminder.app_name.clone());
    format!(
        "You have spent {} on {} today",
        format_duration(reminder.usage_time),
        name
    )
}

pub fn usage_records(ctx: &AppContext, req: RangeRequest) -> Result<Vec<UsageRecord>> {
    let range = resolve_range(req.range, req.start, req.end)?;
    ctx.app_state.services.usage.records(&range)
}

pub fn usage_delete(ctx: &AppContext, req: IdRequest) -> Result<DeletedResponse> {
    let deleted = ctx.app_state.services.usage.delete_record(req.id)?;
    Ok(DeletedResponse {
        deleted: flag(deleted),
    })
}

pub fn usage_clear(ctx: &AppContext) -> Result<ClearedResponse> {
    let cleared = ctx.app_state.services.usage.clear()?;
    Ok(ClearedResponse {
        cleared: cleared as i64,
    })
}

fn search_platform(ctx: &AppContext, platform: Option<String>) -> Result<String> {
    match platform.map(|value| value.trim().to_string()) {
        Some(platform) if !platform.is_empty() => Ok(platform),
        _ => Ok(ctx.app_state.services.settings.get()?.default_platform),
    }
}

pub fn search(ctx: &AppContext, req: SearchRequest) -> Result<SearchResult> {
    let platform = search_platform(ctx, req.platform)?;
    ctx.app_state.services.search.perform(&req.keyword, &platform)
}

pub fn search_url(ctx: &AppContext, req: SearchRequest) -> Result<SearchUrlResponse> {
    let keyword = req.keyword.trim().to_string();
    if keyword.is_empty() {
        return Err(AppError::InvalidInput("keyword is required".to_string()));
    }
    let platform = search_platform(ctx, req.platform)?;
    let url = ctx.app_state.services.search.search_url(&keyword, &platform)?;
    Ok(SearchUrlResponse {
        keyword,
        platform,
        url,
    })
}

pub fn search_history(ctx: &AppContext) -> Result<Vec<SearchHistoryEntry>> {
    ctx.app_state.services.search.recent()
}

pub fn search_history_delete(ctx: &AppContext, req: IdRequest) -> Result<DeletedResponse> {
    let deleted = ctx.app_state.services.search.delete(req.id)?;
    Ok(DeletedResponse {
        deleted: flag(deleted),
    })
}

pub fn search_history_clear(ctx: &AppContext) -> Result<ClearedResponse> {
    let cleared = ctx.app_state.services.search.clear()?;
    Ok(ClearedResponse {
        cleared: cleared as i64,
    })
}

pub fn platforms_list(ctx: &AppContext) -> Result<Vec<Platform>> {
    ctx.app_state.services.platforms.list()
}

pub fn platform_get(ctx: &AppContext, req: PlatformIdRequest) -> Result<Platform> {
    ctx.app_state.services.platforms.require(req.id.trim())
}

pub fn platform_add(ctx: &AppContext, req: PlatformRequest) -> Result<Platform> {
    let platform = Platform::from(req);
    ctx.app_state.services.platforms.add(&platform)?;
    Ok(platform)
}

pub fn platform_update(ctx: &AppContext, req: PlatformRequest) -> Result<UpdatedResponse> {
    let platform = Platform::from(req);
    let updated = ctx.app_state.services.platforms.update(&platform)?;
    Ok(UpdatedResponse {
        updated: flag(updated),
    })
}

pub fn platform_delete(ctx: &AppContext, req: PlatformIdRequest) -> Result<DeletedResponse> {
    let deleted = ctx.app_state.services.platforms.delete(req.id.trim())?;
    Ok(DeletedResponse {
        deleted: flag(deleted),
    })
}

pub fn platform_enable(ctx: &AppContext, req: PlatformEnableRequest) -> Result<UpdatedResponse> {
    let updated = ctx
        .app_state
        .services
        .platforms
        .set_enabled(req.id.trim(), req.enabled)?;
    Ok(UpdatedResponse {
        updated: flag(updated),
    })
}

pub fn select_platform(ctx: &AppContext, req: PlatformIdRequest) -> Result<SettingsResponse> {
    ctx.app_state
        .services
        .settings
        .update_default_platform(req.id.trim())?;
    settings_get(ctx)
}

fn settings_response(ctx: &AppContext, settings: UserSettings) -> SettingsResponse {
    SettingsResponse {
        settings,
        db_path: ctx.app_state.config.db_path.to_string_lossy().to_string(),
        app_data_dir: ctx.app_data_dir.to_string_lossy().to_string(),
    }
}

pub fn settings_get(ctx: &AppContext) -> Result<SettingsResponse> {
    let settings = ctx.app_state.services.settings.get()?;
    Ok(settings_response(ctx, settings))
}

pub fn settings_put(ctx: &AppContext, req: SettingsPutRequest) -> Result<SettingsResponse> {
    let settings = ctx.app_state.services.settings.patch(SettingsPatch::from(req))?;
    Ok(settings_response(ctx, settings))
}

pub fn toggle_setting(ctx: &AppContext, req: ToggleSettingRequest) -> Result<SettingsResponse> {
    let settings = ctx
        .app_state
        .services
        .settings
        .toggle(req.setting, req.enabled)?;
    Ok(settings_response(ctx, settings))
}

pub fn reminder_check(
    ctx: &AppContext,
    req: ReminderCheckRequest,
) -> Result<ReminderCheckResponse> {
    let app_name = req.app_name.trim().to_string();
    if app_name.is_empty() {
        return Err(AppError::InvalidInput("app_name is required".to_string()));
    }
    let current_usage = match req.current_usage {
        Some(usage) => usage,
        None => ctx.app_state.services.usage.today_usage()?,
    };
    let should_show = ctx
        .app_state
        .services
        .reminders
        .should_show(&app_name, current_usage)?;
    let message = should_show.then(|| {
        reminder_message(&ReminderInfo {
            id: 0,
            app_name: app_name.clone(),
            usage_time: current_usage,
            threshold: DEFAULT_REMINDER_THRESHOLD_MS,
            timestamp: now_ms(),
        })
    });
    Ok(ReminderCheckResponse {
        app_name,
        current_usage,
        threshold: DEFAULT_REMINDER_THRESHOLD_MS,
        should_show,
        message,
    })
}

/// Suppresses reminders until `until`, for `minutes`, or by default for one
/// configured reminder interval.
pub fn reminder_dismiss(
    ctx: &AppContext,
    req: ReminderDismissRequest,
) -> Result<DismissResponse> {
    let now = now_ms();
    let until = match (req.until, req.minutes) {
        (Some(until), _) => until,
        (None, Some(minutes)) if minutes > 0 => minutes
            .checked_mul(MINUTE_MS)
            .and_then(|span| now.checked_add(span))
            .ok_or_else(|| {
                AppError::InvalidInput(format!("minutes out of range, got {}", minutes))
            })?,
        (None, Some(minutes)) => {
            return Err(AppError::InvalidInput(format!(
                "minutes must be positive, got {}",
                minutes
            )));
        }
        (None, None) => {
            let interval = ctx.app_state.services.settings.get()?.reminder_interval;
            now.checked_add(interval).ok_or_else(|| {
                AppError::InvalidInput(format!("reminder interval out of range, got {}", interval))
            })?
        }
    };
    ctx.app_state.services.reminders.set_dismissed_until(until)?;
    Ok(DismissResponse {
        dismissed_until: until,
    })
}

pub fn reminders_list(ctx: &AppContext) -> Result<Vec<ReminderInfo>> {
    ctx.app_state.services.reminders.list()
}

pub fn reminders_latest(ctx: &AppContext) -> Result<Vec<ReminderInfo>> {
    ctx.app_state.services.reminders.latest_per_app()
}

pub fn reminder_delete(ctx: &AppContext, req: IdRequest) -> Result<DeletedResponse> {
    let deleted = ctx.app_state.services.reminders.delete(req.id)?;
    Ok(DeletedResponse {
        deleted: flag(deleted),
    })
}

pub fn reminders_clear(ctx: &AppContext) -> Result<ClearedResponse> {
    let cleared = ctx.app_state.services.reminders.clear()?;
    Ok(ClearedResponse {
        cleared: cleared as i64,
    })
}

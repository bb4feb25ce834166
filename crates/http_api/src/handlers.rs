use axum::{
    extract::{Json, State},
    http::Uri,
    response::IntoResponse,
};

use app_api::{
    EmptyRequest, IdRequest, PlatformEnableRequest, PlatformIdRequest, PlatformRequest,
    RangeRequest, ReminderCheckRequest, ReminderDismissRequest, SearchRequest,
    SettingsPutRequest, ToggleSettingRequest,
};

use crate::{errors::HttpError, state::HttpState};

pub async fn dashboard(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::dashboard(&state.context).await?;
    Ok(Json(response))
}

pub async fn refresh(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::refresh(&state.context).await?;
    Ok(Json(response))
}

pub async fn usage_records(
    State(state): State<HttpState>,
    Json(req): Json<RangeRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let context = state.context.clone();
    let records = tokio::task::spawn_blocking(move || app_api::usage_records(&context, req))
        .await
        .map_err(|err| HttpError::internal(err.to_string()))??;
    Ok(Json(records))
}

pub async fn usage_clear(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::usage_clear(&state.context)?;
    Ok(Json(response))
}

pub async fn usage_delete(
    State(state): State<HttpState>,
    Json(req): Json<IdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::usage_delete(&state.context, req)?;
    Ok(Json(response))
}

pub async fn search(
    State(state): State<HttpState>,
    Json(req): Json<SearchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::search(&state.context, req)?;
    Ok(Json(response))
}

pub async fn search_url(
    State(state): State<HttpState>,
    Json(req): Json<SearchRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::search_url(&state.context, req)?;
    Ok(Json(response))
}

pub async fn search_history(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::search_history(&state.context)?;
    Ok(Json(response))
}

pub async fn search_history_delete(
    State(state): State<HttpState>,
    Json(req): Json<IdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::search_history_delete(&state.context, req)?;
    Ok(Json(response))
}

pub async fn search_history_clear(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::search_history_clear(&state.context)?;
    Ok(Json(response))
}

pub async fn platforms_list(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::platforms_list(&state.context)?;
    Ok(Json(response))
}

pub async fn platform_get(
    State(state): State<HttpState>,
    Json(req): Json<PlatformIdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::platform_get(&state.context, req)?;
    Ok(Json(response))
}

pub async fn platform_add(
    State(state): State<HttpState>,
    Json(req): Json<PlatformRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::platform_add(&state.context, req)?;
    Ok(Json(response))
}

pub async fn platform_update(
    State(state): State<HttpState>,
    Json(req): Json<PlatformRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::platform_update(&state.context, req)?;
    Ok(Json(response))
}

pub async fn platform_delete(
    State(state): State<HttpState>,
    Json(req): Json<PlatformIdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::platform_delete(&state.context, req)?;
    Ok(Json(response))
}

pub async fn platform_enable(
    State(state): State<HttpState>,
    Json(req): Json<PlatformEnableRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::platform_enable(&state.context, req)?;
    Ok(Json(response))
}

pub async fn select_platform(
    State(state): State<HttpState>,
    Json(req): Json<PlatformIdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::select_platform(&state.context, req)?;
    Ok(Json(response))
}

pub async fn settings_get(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::settings_get(&state.context)?;
    Ok(Json(response))
}

pub async fn settings_put(
    State(state): State<HttpState>,
    Json(req): Json<SettingsPutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::settings_put(&state.context, req)?;
    Ok(Json(response))
}

pub async fn toggle_setting(
    State(state): State<HttpState>,
    Json(req): Json<ToggleSettingRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::toggle_setting(&state.context, req)?;
    Ok(Json(response))
}

pub async fn reminder_check(
    State(state): State<HttpState>,
    Json(req): Json<ReminderCheckRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::reminder_check(&state.context, req)?;
    Ok(Json(response))
}

pub async fn reminder_dismiss(
    State(state): State<HttpState>,
    Json(req): Json<ReminderDismissRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::reminder_dismiss(&state.context, req)?;
    Ok(Json(response))
}

pub async fn reminders_list(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::reminders_list(&state.context)?;
    Ok(Json(response))
}

pub async fn reminders_latest(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::reminders_latest(&state.context)?;
    Ok(Json(response))
}

pub async fn reminders_clear(
    State(state): State<HttpState>,
    Json(_): Json<EmptyRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::reminders_clear(&state.context)?;
    Ok(Json(response))
}

pub async fn reminder_delete(
    State(state): State<HttpState>,
    Json(req): Json<IdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::reminder_delete(&state.context, req)?;
    Ok(Json(response))
}

pub async fn not_found(uri: Uri) -> HttpError {
    HttpError::not_found(format!("no route for {}", uri.path()))
}

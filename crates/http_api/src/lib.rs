mod errors;
mod handlers;
mod middleware;
mod state;

use axum::{Router, middleware as axum_middleware, routing::post};

pub use middleware::CSRF_HEADER;
pub use state::{HttpState, generate_csrf_token};

pub fn router(state: HttpState) -> Router<()> {
    let api = Router::new()
        .route("/dashboard", post(handlers::dashboard))
        .route("/refresh", post(handlers::refresh))
        .route("/usage_records", post(handlers::usage_records))
        .route("/usage_clear", post(handlers::usage_clear))
        .route("/usage_delete", post(handlers::usage_delete))
        .route("/search", post(handlers::search))
        .route("/search_url", post(handlers::search_url))
        .route("/search_history", post(handlers::search_history))
        .route("/search_history_delete", post(handlers::search_history_delete))
        .route("/search_history_clear", post(handlers::search_history_clear))
        .route("/platforms_list", post(handlers::platforms_list))
        .route("/platform_get", post(handlers::platform_get))
        .route("/platform_add", post(handlers::platform_add))
        .route("/platform_update", post(handlers::platform_update))
        .route("/platform_delete", post(handlers::platform_delete))
        .route("/platform_enable", post(handlers::platform_enable))
        .route("/select_platform", post(handlers::select_platform))
        .route("/settings_get", post(handlers::settings_get))
        .route("/settings_put", post(handlers::settings_put))
        .route("/toggle_setting", post(handlers::toggle_setting))
        .route("/reminder_check", post(handlers::reminder_check))
        .route("/reminder_dismiss", post(handlers::reminder_dismiss))
        .route("/reminders_list", post(handlers::reminders_list))
        .route("/reminders_latest", post(handlers::reminders_latest))
        .route("/reminders_clear", post(handlers::reminders_clear))
        .route("/reminder_delete", post(handlers::reminder_delete))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_csrf,
        ));

    Router::new()
        .nest("/api", api)
        .fallback(handlers::not_found)
        .with_state(state)
}

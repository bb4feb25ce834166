mod args;
mod config;
mod dirs;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use app_api::AppContext;
use focus_app::{AppConfig, AppPaths, AppState, ensure_app_data_dir};
use focus_core::join_reminder_methods;
use focus_usage::JsonFileProvider;
use http_api::{HttpState, generate_csrf_token};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::parse_args().map_err(|err| {
        eprintln!("{err}");
        args::print_help();
        io::Error::new(io::ErrorKind::InvalidInput, "invalid arguments")
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("focus=info,app_api=info,http_api=info")
            }),
        )
        .init();

    let config = config::load_or_create().map_err(io::Error::other)?;
    if config.created {
        tracing::info!(
            path = %config.paths.file.display(),
            port = config.config.port,
            "created default config"
        );
    }

    let data_dir = dirs::resolve_data_dir().map_err(io::Error::other)?;
    tracing::info!(
        dir = %data_dir.dir.display(),
        existing = data_dir.matched_existing,
        "using data dir"
    );

    let port = args.port.unwrap_or(config.config.port);

    let paths = AppPaths::new(data_dir.dir.clone());
    ensure_app_data_dir(&paths).map_err(|err| io::Error::other(err.to_string()))?;

    let snapshot_path = args
        .snapshot
        .or_else(|| {
            config
                .config
                .snapshot_path
                .as_deref()
                .map(config::expand_home_path)
        })
        .unwrap_or_else(|| paths.snapshot_path.clone());
    tracing::info!(path = %snapshot_path.display(), "reading usage exports");

    let app_config = AppConfig {
        db_path: paths.db_path.clone(),
        snapshot_timeout: Duration::from_millis(config.config.snapshot_timeout_ms),
    };
    let app_state = AppState::new(app_config, Arc::new(JsonFileProvider::new(snapshot_path)));
    if let Err(err) = app_state.initialize() {
        return Err(io::Error::other(format!("failed to initialize database: {}", err)).into());
    }

    let context = AppContext {
        app_state,
        app_data_dir: data_dir.dir,
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let refresh_every = Duration::from_secs(config.config.refresh_interval_secs);
    let refresh_task = tokio::spawn(refresh_loop(context.clone(), refresh_every, shutdown_rx));

    let csrf_token = generate_csrf_token();
    let state = HttpState::new(context, csrf_token.clone());
    let router = http_api::router(state);

    let (listener, actual_port, used_fallback) = bind_port(port).await?;
    if used_fallback {
        tracing::warn!(
            configured = port,
            actual = actual_port,
            "configured port was unavailable"
        );
    }

    println!("Focus is running at http://127.0.0.1:{actual_port}/api");
    println!("Send the header {}: {}", http_api::CSRF_HEADER, csrf_token);
    println!("Press Ctrl+C to stop.");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    let _ = refresh_task.await;
    Ok(())
}

/// Periodically pulls usage into the store and surfaces new reminders.
async fn refresh_loop(context: AppContext, every: Duration, mut shutdown: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tracing::info!(every_secs = every.as_secs(), "refresh loop scheduled");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match app_api::refresh(&context).await {
                    Ok(response) => {
                        let methods = match context.app_state.services.settings.get() {
                            Ok(settings) => join_reminder_methods(&settings.reminder_methods),
                            Err(_) => String::new(),
                        };
                        for reminder in &response.reminders {
                            tracing::warn!(
                                app = %reminder.app_name,
                                usage_ms = reminder.usage_time,
                                methods = %methods,
                                "{}",
                                app_api::reminder_message(reminder)
                            );
                        }
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "usage refresh failed");
                    }
                }
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    tracing::info!("refresh loop shutting down");
                    break;
                }
            }
        }
    }
}

async fn bind_port(port: u16) -> Result<(tokio::net::TcpListener, u16, bool), io::Error> {
    if port == 0 {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let actual_port = listener.local_addr()?.port();
        return Ok((listener, actual_port, false));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => Ok((listener, port, false)),
        Err(_) => {
            let listener =
                tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
            let actual_port = listener.local_addr()?.port();
            Ok((listener, actual_port, true))
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

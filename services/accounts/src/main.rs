use std::time::Duration;

use sea_orm::{ConnectOptions, Database};
use tracing::info;

use aurum_accounts::config::AccountsConfig;
use aurum_accounts::infra::mailer::HttpMailer;
use aurum_accounts::router::build_router;
use aurum_accounts::state::AppState;

#[tokio::main]
async fn main() {
    aurum_core::tracing::init_tracing();

    let config = AccountsConfig::from_env();

    let mut options = ConnectOptions::new(config.database_url);
    options
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5));
    let db = Database::connect(options)
        .await
        .expect("failed to connect to database");

    let mailer = HttpMailer::new(
        config.mail_api_url,
        config.mail_api_key,
        config.mail_from_name,
        config.mail_from_email,
    )
    .expect("failed to build mail client");

    let state = AppState {
        db,
        mailer,
        jwt_secret: config.jwt_secret,
        bcrypt_cost: config.bcrypt_cost,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("accounts service listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

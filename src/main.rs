mod catalog;
mod config;
mod error;
mod routes;
mod state;

use catalog::Catalog;
use config::ServerConfig;
use error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "avesafe stopped");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let catalog = Catalog::load(&config.courses_path)?;
    tracing::info!(
        courses = catalog.courses().len(),
        path = %config.courses_path.display(),
        admins = config.client.admin_emails.len(),
        "catalog loaded"
    );

    let state = state::AppState::new(catalog, config.client.clone());
    let app = routes::leptos_app(state, &config.site_dir)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "avesafe listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}

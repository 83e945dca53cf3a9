mod config;
mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    let site = client::site::SiteMeta::from_urls(&config.site_urls);
    tracing::info!(base_url = %site.base_url, "site metadata resolved");

    let state = state::AppState::new(pool, site);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "shaderstudio listening");
    axum::serve(listener, app).await.expect("server failed");
}

use metro_server::cache::CacheConfig;
use metro_server::config::{DataSource, ServerConfig};
use metro_server::data::TransitData;
use metro_server::metro_api::MetroClient;
use metro_server::network::{la_metro, load_from_path};
use metro_server::planner::FinderConfig;
use metro_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");
    let finder_config = FinderConfig::default();
    let cache_config = CacheConfig::default();
    let builtin = la_metro().expect("Built-in dataset is invalid");

    // Load the dataset (fail fast on a bad file)
    let data = match &config.source {
        DataSource::Builtin => {
            info!("using built-in LA Metro dataset");
            TransitData::new(builtin, finder_config, cache_config)
        }
        DataSource::File(path) => {
            let network = load_from_path(path).expect("Failed to load dataset file");
            TransitData::new(network, finder_config, cache_config)
        }
        DataSource::Api(client_config) => {
            let client =
                MetroClient::new(client_config.clone()).expect("Failed to create Metro API client");
            TransitData::fetch_or(client, builtin, finder_config, cache_config).await
        }
    };

    // Spawn background task to refresh the dataset
    if data.can_refresh() {
        let data_refresh = data.clone();
        let period = config.refresh_interval;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match data_refresh.refresh().await {
                    Ok(count) => info!(stations = count, "refreshed dataset"),
                    Err(e) => error!(error = %e, "failed to refresh dataset"),
                }
            }
        });
    }

    let app = create_router(AppState::new(data), &config.static_dir);

    let addr = config.bind_addr;
    info!("LA Metro Route Finder listening on http://{addr}");
    info!("  GET /api/routes/search?origin=&destination=  - Find routes");
    info!("  GET /api/stations/search?q=                   - Search stations");
    info!("  GET /api/routes, /api/stations                 - Dataset");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}

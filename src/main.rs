use bike_dashboard::{load_datasets, resolve_data_paths, router, AppState};
use std::{env, net::SocketAddr};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let paths = resolve_data_paths();
    let data = match load_datasets(&paths).await {
        Ok(data) => data,
        Err(err) => {
            error!("failed to load data: {err}");
            std::process::exit(1);
        }
    };

    let bounds = data.date_bounds();
    info!(start = %bounds.start, end = %bounds.end, "data covers range");
    let app = router(AppState::new(data));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

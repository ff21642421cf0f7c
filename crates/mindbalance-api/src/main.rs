use tracing_subscriber::EnvFilter;

use mindbalance_api::config::{ApiConfig, LogFormat};
use mindbalance_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env();
    init_tracing(config.log_format);

    let app = mindbalance_api::router(AppState::new());

    if config.lambda {
        tracing::info!("starting lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        // Structured JSON logging for CloudWatch
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

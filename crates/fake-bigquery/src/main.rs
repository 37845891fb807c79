use clap::Parser;
use fake_bigquery::config::Config;
use fake_bigquery::server::MockServer;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let server = MockServer::bind(&config).await?;
    server.run().await
}

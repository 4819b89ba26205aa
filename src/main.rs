use clap::Parser;
use github_status::config::{Cli, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_cli(Cli::parse());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!(
        "high frequency: {:?}, low frequency: {:?}",
        config.strategy.high_frequency,
        config.strategy.low_frequency
    );

    let monitor = github_status::create_monitor(&config).await?;
    tracing::info!("Monitoring {}", config.status_url);

    monitor.run().await;
    Ok(())
}

use anyhow::Result;
use legal_relay::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds the log filter. A set `RUST_LOG` wins over `server.logs.level`
/// and may hold full directives; the config value must be a plain level.
/// Either one failing to parse stops startup.
fn log_filter(rust_log: Option<&str>, config_level: &str) -> Result<EnvFilter> {
    if let Some(directives) = rust_log {
        return EnvFilter::try_new(directives)
            .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG '{}': {}", directives, e));
    }

    config_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                config_level
            )
        })?;
    Ok(EnvFilter::try_new(config_level)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Config comes first so its log level can drive the subscriber.
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match log_filter(rust_log.as_deref(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        provider = %config.llm.provider,
        model = %config.llm.model,
        api_key_configured = config.llm.has_api_key(),
        "Starting legal relay server"
    );

    server::run(config).await?;

    Ok(())
}

use anyhow::Context;
use clap::Parser;
use radio_api::create_app;
use radio_core::RadioConfig;
use std::collections::HashMap;
use std::path::PathBuf;

/// Command line arguments for the radio-jukebox server
#[derive(Parser, Debug)]
#[command(name = "radio-jukebox")]
#[command(about = "Background radio stations for a 2D RPG host")]
struct Args {
    /// Path to the radio configuration JSON file
    #[arg(short, long)]
    config: PathBuf,

    /// Read the file as the host's flat plugin parameter table
    #[arg(long)]
    plugin_params: bool,

    /// Port to bind the server to
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

fn parse_config(content: &str, plugin_params: bool) -> anyhow::Result<RadioConfig> {
    if plugin_params {
        let params: HashMap<String, String> =
            serde_json::from_str(content).context("Plugin parameters must be a string map")?;
        Ok(RadioConfig::from_plugin_parameters(&params)?)
    } else {
        let config: RadioConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt().pretty().init();

    // Load radio configuration from file
    let config_content = tokio::fs::read_to_string(&args.config)
        .await
        .with_context(|| format!("Failed to read config file '{}'", args.config.display()))?;

    let radio_config = parse_config(&config_content, args.plugin_params)
        .with_context(|| format!("Failed to parse config file '{}'", args.config.display()))?;

    tracing::info!(
        "Loaded radio config from {}: {} stations",
        args.config.display(),
        radio_config.stations.len()
    );

    let app = create_app(radio_config);

    let bind_addr = format!("0.0.0.0:{}", args.port);
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use apify_client::ApifyClient;
use clap::Parser;
use tracing::info;

use outreach_core::{ApifyBackend, ProfileFetcher};
use outreach_server::{
    http, load_config, logging, stdio, AppConfig, FileConfig, McpServer, OutreachTools, Transport,
};

#[derive(Parser)]
#[command(name = "outreach-server", about = "Social outreach MCP tool server")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "OUTREACH_CONFIG")]
    config: Option<PathBuf>,

    /// Transport to serve on (overrides MCP_TRANSPORT and the config file)
    #[arg(long, value_enum)]
    transport: Option<Transport>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env first so RUST_LOG and LOG_FORMAT from it apply.
    dotenvy::dotenv().ok();
    logging::init();

    info!("Social outreach server starting...");

    let env = AppConfig::from_env()?;
    let file_config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading config file");
            load_config(path)?
        }
        None => FileConfig::default(),
    };
    let config = file_config.with_overrides(&env, cli.transport);

    let mut client = ApifyClient::new(env.apify_api_token.clone())
        .with_page_size(config.backend.dataset_page_size);
    if let Some(base_url) = &config.backend.base_url {
        client = client.with_base_url(base_url.clone());
    }
    let backend = ApifyBackend::new(client).with_job_timeout(config.backend.job_timeout());

    let variant = config.prompts.variant;
    info!(variant = %variant, "Prompt variant selected");
    let fetcher = Arc::new(ProfileFetcher::new(Arc::new(backend), variant));
    let server = McpServer::new(OutreachTools::new(fetcher, config.defaults));

    match config.server.transport {
        Transport::Stdio => stdio::serve(server).await,
        Transport::Http => {
            http::serve(
                server,
                &config.server.host,
                config.server.port,
                &config.server.path,
            )
            .await
        }
    }
}

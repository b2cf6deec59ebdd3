//! Pokedex - An interactive PokeAPI explorer
//!
//! Starts the REPL on stdin/stdout. Logs go to stderr.

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{run_repl, Cache, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration
/// 3. Create the API client and the response cache (starts the reaper)
/// 4. Run the REPL until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_base_url={}, catch_ceiling={}",
        config.api_base_url, config.catch_ceiling
    );

    let api = PokeApiClient::new(config.api_base_url.clone())?;
    let cache = Cache::new(config.cache_interval());
    info!("Response cache started: expiry_interval={:?}", cache.expiry_interval());
    let mut session = Session::new(api, cache, &config);

    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    run_repl(&mut session, input, &mut output).await?;

    info!("Pokedex closed");
    Ok(())
}

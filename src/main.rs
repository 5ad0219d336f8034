//! Pokedex CLI - An interactive PokeAPI client
//!
//! Browses location areas, explores them and catches Pokemon, memoizing every
//! API response in a TTL cache swept by a background task.

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::{repl, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, so stdout stays clean)
/// 2. Load configuration from environment variables
/// 3. Create the API client and its response cache (starts the reaper)
/// 4. Run the REPL on stdin/stdout until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, http_timeout={}s, api_base_url={}",
        config.cache_interval, config.http_timeout, config.api_base_url
    );

    let client = PokeApiClient::from_config(&config).context("failed to build HTTP client")?;
    let mut session = Session::new(client, config.catch_threshold);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&mut session, stdin, &mut stdout)
        .await
        .context("terminal I/O failed")?;

    // Dropping the session drops the cache, which aborts its reaper
    drop(session);
    info!("Pokedex closed");
    Ok(())
}

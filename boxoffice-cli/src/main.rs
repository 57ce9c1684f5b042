use std::io;

use anyhow::Context;
use boxoffice_cli::{build_catalog, Config, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let catalog = build_catalog(&config).context("Failed to seed the movie catalog")?;
    tracing::info!("Starting box office with {} movies", catalog.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(catalog, stdin.lock(), stdout.lock());
    session.run().context("Booking session aborted")?;

    Ok(())
}

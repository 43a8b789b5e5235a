use std::io;
use tracing_subscriber::EnvFilter;

mod error;
mod flow;
mod seed;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // initialize tracing, stdout is reserved for the session itself
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let users = seed::sample_users()?;
    tracing::info!(users = users.len(), "sample users loaded");

    flow::run(users, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}

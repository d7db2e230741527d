mod client;
mod commands;
mod config;
mod error;
mod render;
mod source;

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let (settings, command) = config::load()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!(
            "finsight={level},aggregator={level}",
            level = settings.level
        ))
        .init();

    tracing::debug!(?command, "running command");
    let output = commands::run(&settings, &command).await?;
    println!("{output}");
    Ok(())
}

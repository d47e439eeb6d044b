mod age;
mod aggregator;
mod config;
mod format;
mod github;
mod logging;
mod stats;
mod svg;
mod template;
mod theme;

use anyhow::{Context, Result};
use chrono::Utc;
use config::Config;
use github::GithubClient;
use std::fs;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::setup_logging("info");

    let config = Config::from_env();
    if config.token.is_none() {
        info!(
            "{} is not set; using unauthenticated GitHub API requests",
            config::TOKEN_ENV
        );
    }

    // Read and validate the template before touching the network
    let source = fs::read_to_string(&config.template_path)
        .with_context(|| format!("Failed to read {}", config.template_path.display()))?;
    let env = template::card_environment(&source)
        .with_context(|| format!("Invalid template {}", config.template_path.display()))?;
    let card_template = env.get_template(template::CARD_TEMPLATE)?;

    // GitHub API client
    let client = GithubClient::new(&config);
    let stats = aggregator::aggregate(&client, &config.username, Utc::now()).await?;

    let theme_name = match config.theme.as_deref() {
        Some(name) => name,
        None => theme::random_theme_name(&mut rand::thread_rng()),
    };
    let theme = theme::select_theme(Some(theme_name));

    let card = svg::render(&stats, theme, &card_template).context("Failed to render card")?;
    svg::write_card(&config.output_path, &card)?;

    info!(
        theme = theme.name,
        commits = stats.commits,
        "Generated {}",
        config.output_path.display()
    );

    Ok(())
}

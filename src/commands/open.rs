//! Open command - Launch a card's deep link

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::sync::Arc;

use super::utils;
use profile_cards::cards::launcher::{Launcher, SystemClock, SystemNavigator, ThreadScheduler};
use profile_cards::cards::{build_links, DeepLinks};
use profile_cards::config::Config;

/// Open the card matching `key` (id or username)
///
/// With `dry_run` only the links are printed.
pub fn execute(config: &Config, key: &str, dry_run: bool) -> Result<DeepLinks> {
    let app = utils::load_app(config)?;
    let profile = app
        .find(key)
        .with_context(|| format!("No profile matches: {}", key))?;

    if dry_run {
        let links = build_links(&profile.username);
        println!("App: {}", links.app_url);
        println!("Web: {}", links.web_url.dimmed());
        return Ok(links);
    }

    let launcher = Launcher::new(
        Arc::new(SystemClock),
        Arc::new(SystemNavigator),
        config.timing,
    );
    let scheduler = ThreadScheduler::new();

    println!("Opening {} (@{})", profile.name, profile.username);
    let links = launcher.open(&profile.username, &scheduler);

    // Stay alive until the fallback check has run
    scheduler.join_all();
    Ok(links)
}

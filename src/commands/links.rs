//! Links command - Print deep links for a username

use profile_cards::cards::{build_links, DeepLinks};

pub fn execute(username: &str) -> DeepLinks {
    let links = build_links(username.strip_prefix('@').unwrap_or(username));
    println!("App: {}", links.app_url);
    println!("Web: {}", links.web_url);
    links
}

//! Normalize command - Reduce a profile URL to its username

use anyhow::{Context, Result};

use profile_cards::cards::normalize;

pub fn execute(url: &str) -> Result<String> {
    let normalized = normalize(url.trim())
        .with_context(|| format!("Not a valid Instagram profile URL: {}", url))?;
    println!("{}", normalized.username);
    Ok(normalized.username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_command() {
        assert_eq!(
            execute(" https://www.instagram.com/alice/ ").unwrap(),
            "alice"
        );
        assert!(execute("https://instagram.com/").is_err());
    }
}

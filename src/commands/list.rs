//! List command - Render all profile cards

use anyhow::Result;

use super::utils::{self, TableSurface};
use profile_cards::config::Config;

/// Execute the list command and return formatted output
pub fn execute(config: &Config, with_id: bool) -> Result<String> {
    let app = utils::load_app(config)?;
    let mut surface = TableSurface::new(with_id);
    app.render(&mut surface);
    Ok(surface.to_table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_cards::cards::launcher::LaunchTiming;
    use profile_cards::cards::{KeyValueStore, SqliteStore, STORAGE_KEY};

    fn config_in(dir: &tempfile::TempDir) -> Config {
        Config {
            store_path: dir.path().join("storage.db"),
            timing: LaunchTiming::default(),
        }
    }

    #[test]
    fn test_list_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let out = execute(&config_in(&dir), false).unwrap();
        assert!(out.contains("+ Add a profile"));
        assert!(out.ends_with("0 profiles"));
    }

    #[test]
    fn test_list_corrupt_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        SqliteStore::open(&config.store_path)
            .unwrap()
            .set_item(STORAGE_KEY, "{oops")
            .unwrap();

        let out = execute(&config, false).unwrap();
        assert!(out.ends_with("0 profiles"));
    }
}

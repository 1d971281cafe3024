//! Shared utilities for commands

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use profile_cards::cards::image::data_url_mime;
use profile_cards::cards::render::{CardSurface, Element};
use profile_cards::cards::{App, ProfileRepository, SqliteStore};
use profile_cards::config::Config;

/// Open the configured store and load the application state
pub fn load_app(config: &Config) -> Result<App<SqliteStore>> {
    let store = SqliteStore::open(&config.store_path)
        .with_context(|| format!("Failed to open store: {}", config.store_path.display()))?;
    Ok(App::load(ProfileRepository::new(store)))
}

/// Surface that renders the card row as a terminal table
#[derive(Debug, Default)]
pub struct TableSurface {
    elements: Vec<Element>,
    /// Show the card id column
    pub with_id: bool,
}

impl TableSurface {
    pub fn new(with_id: bool) -> Self {
        Self {
            elements: Vec::new(),
            with_id,
        }
    }

    pub fn card_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Card(_)))
            .count()
    }

    /// Format the current row for display
    pub fn to_table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut header = vec![];
        if self.with_id {
            header.push(Cell::new("ID"));
        }
        header.push(Cell::new("Name"));
        header.push(Cell::new("Username"));
        header.push(Cell::new("Avatar"));
        table.set_header(header);

        for element in &self.elements {
            let mut row = vec![];
            match element {
                Element::Card(card) => {
                    if self.with_id {
                        row.push(Cell::new(card.data_id.as_str()));
                    }
                    let avatar = card
                        .background_image
                        .as_deref()
                        .and_then(|bg| bg.strip_prefix("url("))
                        .and_then(data_url_mime)
                        .unwrap_or("-");
                    row.push(Cell::new(&card.name));
                    row.push(Cell::new(&card.handle));
                    row.push(Cell::new(avatar));
                }
                Element::AddProfile => {
                    if self.with_id {
                        row.push(Cell::new(""));
                    }
                    row.push(Cell::new("+ Add a profile"));
                    row.push(Cell::new(""));
                    row.push(Cell::new(""));
                }
            }
            table.add_row(row);
        }

        let mut output = table.to_string();
        output.push_str(&format!("\n\n{} profiles", self.card_count()));
        output
    }
}

impl CardSurface for TableSurface {
    fn replace_all(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }
}

//! Add command - Submit the add-profile form

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use std::path::PathBuf;

use super::utils::{self, TableSurface};
use profile_cards::cards::Profile;
use profile_cards::config::Config;

/// Values entered into the add-profile form
#[derive(Debug, Clone)]
pub struct AddOptions {
    pub name: String,
    pub url: String,
    pub image: Option<PathBuf>,
}

/// Open the form, fill it, and submit
///
/// On success prints the refreshed card list. A form error is printed inline
/// and turned into a command failure.
pub async fn execute(config: &Config, options: AddOptions) -> Result<Profile> {
    let mut app = utils::load_app(config)?;

    app.open_form();
    let fields = app.form_mut().fields_mut();
    fields.name = options.name;
    fields.url = options.url;
    fields.image = options.image;

    let mut surface = TableSurface::new(false);
    match app.submit(&mut surface).await {
        Ok(profile) => {
            println!(
                "{} {} (@{})",
                "Added:".green(),
                profile.name,
                profile.username
            );
            println!("{}", surface.to_table());
            Ok(profile)
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            app.cancel_form();
            bail!("profile was not added")
        }
    }
}

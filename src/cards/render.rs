//! Card rendering
//!
//! Rendering is a full replace: every call builds one element per profile
//! plus the trailing add affordance and hands the whole set to the surface.

use super::instagram::{build_links, DeepLinks};
use super::profile::{Profile, ProfileId};

/// A rendered profile card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Written for external addressability (`data-id`)
    pub data_id: ProfileId,
    pub name: String,
    /// `@username`
    pub handle: String,
    /// `url(<data url>)`, present only when the profile has an image
    pub background_image: Option<String>,
    /// Targets for the open-action
    pub links: DeepLinks,
}

/// One element in the card row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Card(Card),
    /// Always last; activating it opens the add-profile form
    AddProfile,
}

/// Host environment that displays the card row
pub trait CardSurface {
    /// Discard every current element and show `elements` instead
    fn replace_all(&mut self, elements: Vec<Element>);
}

/// Build the card for a single profile
pub fn card_for(profile: &Profile) -> Card {
    Card {
        data_id: profile.id.clone(),
        name: profile.name.clone(),
        handle: format!("@{}", profile.username),
        background_image: profile
            .image_data_url
            .as_ref()
            .map(|data| format!("url({})", data)),
        links: build_links(&profile.username),
    }
}

/// Project the profile list onto the surface
pub fn render(profiles: &[Profile], surface: &mut dyn CardSurface) {
    let elements = profiles
        .iter()
        .map(|p| Element::Card(card_for(p)))
        .chain(std::iter::once(Element::AddProfile))
        .collect();
    surface.replace_all(elements);
}

//! Application state and the add-profile round trip

use super::form::{AddProfileForm, FormError};
use super::image;
use super::profile::{Profile, ProfileId};
use super::render::{self, CardSurface};
use super::repository::ProfileRepository;
use super::store::KeyValueStore;

/// Explicit application state with storage as an outside collaborator
///
/// Storage is read in [`App::load`] and at submission time, and written only
/// after a successful submission.
pub struct App<S> {
    repo: ProfileRepository<S>,
    profiles: Vec<Profile>,
    form: AddProfileForm,
    next_id: Box<dyn FnMut() -> ProfileId>,
}

impl<S: KeyValueStore> App<S> {
    /// Build the state from whatever is stored
    pub fn load(repo: ProfileRepository<S>) -> Self {
        let profiles = repo.load();
        tracing::debug!(count = profiles.len(), "loaded profiles");
        Self {
            repo,
            profiles,
            form: AddProfileForm::new(),
            next_id: Box::new(ProfileId::generate),
        }
    }

    /// Replace the id source used for new profiles
    pub fn with_id_generator(
        mut self,
        next_id: impl FnMut() -> ProfileId + 'static,
    ) -> Self {
        self.next_id = Box::new(next_id);
        self
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn form(&self) -> &AddProfileForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AddProfileForm {
        &mut self.form
    }

    pub fn repository(&self) -> &ProfileRepository<S> {
        &self.repo
    }

    pub fn render(&self, surface: &mut dyn CardSurface) {
        render::render(&self.profiles, surface);
    }

    /// Activation of the add affordance
    pub fn open_form(&mut self) {
        self.form.open();
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// Find a card by id, falling back to a username match
    pub fn find(&self, key: &str) -> Option<&Profile> {
        let id = ProfileId::from(key);
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .or_else(|| {
                let handle = key.strip_prefix('@').unwrap_or(key);
                self.profiles
                    .iter()
                    .find(|p| p.username.eq_ignore_ascii_case(handle))
            })
    }

    /// Submit the add form
    ///
    /// Validation, image read, and save failures leave the form open with the
    /// matching error and write nothing. On success the new profile is
    /// appended to the stored list, saved, and the cards re-rendered.
    pub async fn submit(&mut self, surface: &mut dyn CardSurface) -> Result<Profile, FormError> {
        let submission = self.form.begin_submit()?;

        let image_data_url = match image::read_optional(submission.image.as_deref()).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "image read failed");
                return Err(self.form.fail(FormError::ImageRead));
            }
        };

        let mut profiles = self.repo.load();
        let mut id = (self.next_id)();
        while profiles.iter().any(|p| p.id == id) {
            id = (self.next_id)();
        }
        let profile = Profile {
            id,
            name: submission.name,
            username: submission.username,
            image_data_url,
        };
        profiles.push(profile.clone());

        if let Err(e) = self.repo.save(&profiles) {
            tracing::error!(error = %e, "failed to save profiles");
            return Err(self.form.fail(FormError::Save));
        }

        tracing::info!(id = %profile.id, username = %profile.username, "added profile");
        self.profiles = profiles;
        self.render(surface);
        self.form.complete();
        Ok(profile)
    }
}

//! Add-profile form state machine
//!
//! `Closed -> Open -> Submitting -> Closed`, with validation failures
//! returning to `Open` and showing a single inline error.

use std::path::PathBuf;
use thiserror::Error;

use super::instagram;

/// Inline form errors; `Display` is the text shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a name.")]
    MissingName,
    #[error("Please enter a valid Instagram profile URL.")]
    InvalidUrl,
    #[error("Could not read the selected image.")]
    ImageRead,
    #[error("Could not save the profile.")]
    Save,
    #[error("The add-profile form is not open.")]
    NotOpen,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub url: String,
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Open { error: Option<FormError> },
    Submitting,
}

/// A validated submission ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub username: String,
    pub image: Option<PathBuf>,
}

#[derive(Debug)]
pub struct AddProfileForm {
    state: FormState,
    fields: FormFields,
}

impl Default for AddProfileForm {
    fn default() -> Self {
        Self {
            state: FormState::Closed,
            fields: FormFields::default(),
        }
    }
}

impl AddProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, FormState::Closed)
    }

    /// The error currently shown, if any
    pub fn error(&self) -> Option<&FormError> {
        match &self.state {
            FormState::Open { error } => error.as_ref(),
            _ => None,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    /// Show the form with no error
    pub fn open(&mut self) {
        self.state = FormState::Open { error: None };
    }

    /// Close the form and drop anything entered
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
        self.fields = FormFields::default();
    }

    /// Validate the fields and move to `Submitting`
    ///
    /// On failure the form stays open with exactly that error shown.
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if !matches!(self.state, FormState::Open { .. }) {
            return Err(FormError::NotOpen);
        }
        self.state = FormState::Open { error: None };

        let name = self.fields.name.trim().to_string();
        if name.is_empty() {
            return Err(self.fail(FormError::MissingName));
        }

        let Some(normalized) = instagram::normalize(self.fields.url.trim()) else {
            return Err(self.fail(FormError::InvalidUrl));
        };

        let submission = Submission {
            name,
            username: normalized.username,
            image: self.fields.image.clone(),
        };
        self.state = FormState::Submitting;
        Ok(submission)
    }

    /// Return to `Open` showing `error`, which is handed back to the caller
    pub fn fail(&mut self, error: FormError) -> FormError {
        self.state = FormState::Open {
            error: Some(error.clone()),
        };
        error
    }

    /// Finish a successful submission: close and reset the fields
    pub fn complete(&mut self) {
        self.state = FormState::Closed;
        self.fields = FormFields::default();
    }
}

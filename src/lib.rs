//! profile-cards library
//!
//! Stores a small list of people (display name, Instagram handle, optional
//! avatar) in a local key-value store and renders them as cards that deep-link
//! into the Instagram app, falling back to the website.

pub mod cards;
pub mod config;

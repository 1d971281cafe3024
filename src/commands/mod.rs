//! CLI commands

pub mod add;
pub mod links;
pub mod list;
pub mod normalize;
pub mod open;
pub mod utils;

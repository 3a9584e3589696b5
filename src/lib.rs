pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod prune;
pub mod resolve;
pub mod ui;
pub mod version;

pub use error::{DevTagsError, Result};

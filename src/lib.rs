pub mod config;
pub mod error;
pub mod git;
pub mod notes;
pub mod release;
pub mod siblings;
pub mod ui;
pub mod version;
pub mod warning;

pub use error::{Result, TagReleaseError};

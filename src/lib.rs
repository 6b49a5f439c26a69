pub mod config;
pub mod domain;
pub mod error;
pub mod hooks;
pub mod manifest;
pub mod preflight;
pub mod process;
pub mod release;
pub mod ui;

pub use error::{ReleaseError, Result};

//! Domain logic - pure version rules independent of any external command

pub mod version;

pub use version::{compute_next_versions, NextVersionSet, Version, VersionBump};

//! Pre-release hook
//!
//! Lets the consuming project build, lint or test before the operator is
//! asked to confirm the release. A failing hook aborts the run.

pub mod before_release;

pub use before_release::BeforeRelease;

//! Core domain types for gusr, a Git user switcher.

pub mod commands;
pub mod git;
pub mod identity;
pub mod prompt;
pub mod store;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Testing infrastructure for loma integration tests.
//!
//! - `TestWorld`: isolated workspace plus a configured `loma` command
//! - `fixtures`: listing record builders and catalog files
//! - `assertions`: checks over rendered pages

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

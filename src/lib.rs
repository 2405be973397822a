//! Generate Nix dev-shell flakes from a project name and language.

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod hooks;
pub mod packages;
pub mod platform;

pub use descriptor::Descriptor;
pub use error::{FlakeError, Result};
pub use generator::{generate, FlakeGenerator};

#[cfg(feature = "cli")]
pub mod cli;
pub mod manifest;
pub mod sink;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, LogFormat};

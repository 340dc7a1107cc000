//! Configuration loading and validation.
//!
//! Settings live in a TOML file at `~/.config/guidedesk/config.toml` and
//! fall back to defaults matching the public content site when absent.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, BrowseConfig, CarouselConfig, Config};

//! Terminal front-end for the navigator engine.
//!
//! Collects two-digit score entries, confirms resets, persists the session and
//! can replay a seeded random shoe through the strategy.

pub mod config;
pub mod console;
pub mod entry;
pub mod render;
pub mod simulate;
pub mod store;

pub use config::{Config, ConfigError, ValidatedConfig};
pub use console::{Command, Console, ConsoleError};
pub use simulate::Summary;

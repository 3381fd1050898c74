//! # Core Module
//!
//! Shared configuration used by the cursor controller and its hosts.

pub mod config;

// Re-export commonly used config types
pub use config::{
    CursorConfig,
    GridConfig,
    Config,
    ConfigError,
};

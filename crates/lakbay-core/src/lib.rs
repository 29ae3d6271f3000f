//! # lakbay-core
//!
//! Core types, settings, and error types for the lakbay admin platform.
//! This crate has no domain knowledge and provides the foundation for all
//! other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Deployment settings and global configuration
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{Error, Result, ValidationFailure};
pub use settings::{Settings, SETTINGS};

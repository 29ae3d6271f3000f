//! # lakbay
//!
//! Administrative content-management core for a tourism platform.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `lakbay` to get everything, or depend on
//! individual crates for finer-grained control.

/// Core types, settings, logging, and error types.
pub use lakbay_core as core;

/// Business-listing domain model: categories, geography, lifecycle, store.
#[cfg(feature = "listings")]
pub use lakbay_listings as listings;

/// Multi-step form engine: schema registry, sessions, and the step wizard.
#[cfg(feature = "forms")]
pub use lakbay_forms as forms;

/// Role-based route permissions and sidebar navigation.
#[cfg(feature = "admin")]
pub use lakbay_admin as admin;

// Third-party re-exports, so downstream crates can match the versions
// this workspace was built against without naming them directly.
pub use async_trait;
pub use chrono;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;
pub use tracing_subscriber;
pub use uuid;

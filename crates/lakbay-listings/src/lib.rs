//! # lakbay-listings
//!
//! Business-listing domain model for the lakbay admin platform: the typed
//! business categories, the geographic point codec, the stored record and
//! submission payload shapes, the registration-status lifecycle, and the
//! [`ListingStore`](store::ListingStore) persistence trait with an in-memory
//! implementation for tests and demos.

pub mod geo;
pub mod record;
pub mod status;
pub mod store;
pub mod types;

pub use geo::GeoPoint;
pub use record::{BusinessRecord, ListingPayload};
pub use status::RegistrationStatus;
pub use store::{InMemoryListingStore, ListingStore};
pub use types::BusinessType;

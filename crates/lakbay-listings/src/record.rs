//! Stored record and submission payload shapes.
//!
//! [`BusinessRecord`] is the shape the persistence collaborator returns and
//! the edit screen loads from; [`ListingPayload`] is the persistence-ready
//! shape the form wizard produces at submit time. Optional contact fields in
//! the payload serialize as explicit JSON `null`, never as empty strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::RegistrationStatus;
use crate::types::BusinessType;

/// A stored business listing as returned by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    /// Primary key.
    pub id: Uuid,
    /// Business name.
    pub name: String,
    /// Category.
    pub business_type: BusinessType,
    /// Long-form description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// City or municipality.
    pub city: String,
    /// Province.
    pub province: String,
    /// Postal code, if provided.
    pub postal_code: Option<String>,
    /// Location as `POINT(<lon> <lat>)` text, if the record has one.
    pub location: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Contact email address.
    pub email: Option<String>,
    /// Website URL.
    pub website: Option<String>,
    /// Facebook page URL.
    pub facebook: Option<String>,
    /// Review state of the registration.
    pub status: RegistrationStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// The persistence-ready record produced from a completed form session.
///
/// Identifier, status, and timestamps are the store's concern; the payload
/// carries only what the user edited. `location` is always present here:
/// the location step cannot be passed without valid coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPayload {
    /// Business name.
    pub name: String,
    /// Category.
    pub business_type: BusinessType,
    /// Long-form description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// City or municipality.
    pub city: String,
    /// Province.
    pub province: String,
    /// Postal code; `None` when left blank.
    pub postal_code: Option<String>,
    /// Location as `POINT(<lon> <lat>)` text.
    pub location: String,
    /// Contact phone number; `None` when left blank.
    pub phone: Option<String>,
    /// Contact email address; `None` when left blank.
    pub email: Option<String>,
    /// Website URL; `None` when left blank.
    pub website: Option<String>,
    /// Facebook page URL; `None` when left blank.
    pub facebook: Option<String>,
}

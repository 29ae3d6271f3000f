//! The listing persistence collaborator.
//!
//! [`ListingStore`] is the boundary the form wizard submits through and the
//! list/detail screens read through. The trait is async because real
//! implementations call the hosted backend over the network; the bundled
//! [`InMemoryListingStore`] backs tests and demos.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use lakbay_core::error::{Error, Result};

use crate::record::{BusinessRecord, ListingPayload};
use crate::status::RegistrationStatus;

/// Persistence operations for business listings.
///
/// `create` and `update` are the submit targets of the form wizard; the
/// remaining operations back the admin list, detail, and review screens.
/// Implementations must not retry internally: failures propagate unchanged
/// so the caller can leave the form intact for correction and resubmit.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Creates a new listing from a submission payload.
    async fn create(&self, payload: ListingPayload) -> Result<BusinessRecord>;

    /// Replaces the editable fields of an existing listing.
    async fn update(&self, id: Uuid, payload: ListingPayload) -> Result<BusinessRecord>;

    /// Fetches one listing by id.
    async fn get(&self, id: Uuid) -> Result<BusinessRecord>;

    /// Lists all listings, ordered by creation time.
    async fn list(&self) -> Result<Vec<BusinessRecord>>;

    /// Deletes one listing by id.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Moves a registration to a new review status.
    async fn set_status(&self, id: Uuid, status: RegistrationStatus) -> Result<BusinessRecord>;
}

/// An in-memory [`ListingStore`] for tests and demos.
#[derive(Debug, Default)]
pub struct InMemoryListingStore {
    records: Mutex<HashMap<Uuid, BusinessRecord>>,
}

impl InMemoryListingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored listings.
    pub fn len(&self) -> usize {
        self.records.lock().expect("store lock poisoned").len()
    }

    /// Returns `true` if the store holds no listings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn record_from_payload(id: Uuid, payload: ListingPayload) -> BusinessRecord {
    let now = Utc::now();
    BusinessRecord {
        id,
        name: payload.name,
        business_type: payload.business_type,
        description: payload.description,
        address: payload.address,
        city: payload.city,
        province: payload.province,
        postal_code: payload.postal_code,
        location: Some(payload.location),
        phone: payload.phone,
        email: payload.email,
        website: payload.website,
        facebook: payload.facebook,
        status: RegistrationStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl ListingStore for InMemoryListingStore {
    async fn create(&self, payload: ListingPayload) -> Result<BusinessRecord> {
        let record = record_from_payload(Uuid::new_v4(), payload);
        tracing::debug!(id = %record.id, name = %record.name, "created listing");
        self.records
            .lock()
            .expect("store lock poisoned")
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, payload: ListingPayload) -> Result<BusinessRecord> {
        let mut records = self.records.lock().expect("store lock poisoned");
        let existing = records
            .get(&id)
            .ok_or_else(|| Error::NotFound(format!("listing {id}")))?;

        // Status and creation time survive edits; only updated_at moves.
        let mut record = record_from_payload(id, payload);
        record.status = existing.status;
        record.created_at = existing.created_at;
        record.updated_at = Utc::now();

        records.insert(id, record.clone());
        tracing::debug!(id = %id, "updated listing");
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<BusinessRecord> {
        self.records
            .lock()
            .expect("store lock poisoned")
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("listing {id}")))
    }

    async fn list(&self) -> Result<Vec<BusinessRecord>> {
        let mut records: Vec<BusinessRecord> = self
            .records
            .lock()
            .expect("store lock poisoned")
            .values()
            .cloned()
            .collect();
        records.sort_by_key(|r| r.created_at);
        Ok(records)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.records
            .lock()
            .expect("store lock poisoned")
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("listing {id}")))
    }

    async fn set_status(&self, id: Uuid, status: RegistrationStatus) -> Result<BusinessRecord> {
        let mut records = self.records.lock().expect("store lock poisoned");
        let record = records
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound(format!("listing {id}")))?;
        record.status = record.status.transition_to(status)?;
        record.updated_at = Utc::now();
        tracing::info!(id = %id, status = %record.status, "registration status changed");
        Ok(record.clone())
    }
}

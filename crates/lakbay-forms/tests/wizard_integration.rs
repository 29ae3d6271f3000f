//! Integration tests for the listing form engine.
//!
//! These tests exercise the schema registry, form session, and step wizard
//! together, covering:
//! 1. Schema partition and validation semantics
//! 2. Create and edit seeding, including geography decode fallback
//! 3. Wizard navigation, the re-entrancy guard, and cancel
//! 4. End-to-end create and edit submissions against a store

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use lakbay_core::error::{Error, Result};
use lakbay_forms::listing_form::{
    build_payload, create_session, edit_session, edit_wizard, listing_schema, new_wizard,
};
use lakbay_forms::wizard::{FormWizard, NavOutcome};
use lakbay_listings::geo::GeoPoint;
use lakbay_listings::record::{BusinessRecord, ListingPayload};
use lakbay_listings::status::RegistrationStatus;
use lakbay_listings::store::{InMemoryListingStore, ListingStore};
use lakbay_listings::types::BusinessType;

// ============================================================================
// Shared helpers
// ============================================================================

fn fill_step(wizard: &mut FormWizard<'_>, fields: &[(&str, &str)]) {
    for (name, value) in fields {
        wizard.session_mut().set_field(name, *value).unwrap();
    }
}

fn fill_basics(wizard: &mut FormWizard<'_>) {
    let description = "A cozy riverside cafe serving local Bicolano dishes, \
        single-origin coffee, and homemade pastries. Family-run since 1998, \
        with a shaded garden terrace overlooking the Naga River and weekly \
        acoustic nights featuring local musicians from the university."
        .to_string();
    assert!(description.len() >= 200);
    wizard
        .session_mut()
        .set_field("business_name", "Sample Cafe")
        .unwrap();
    wizard.session_mut().set_field("business_type", "shop").unwrap();
    wizard
        .session_mut()
        .set_field("description", description)
        .unwrap();
}

fn fill_location(wizard: &mut FormWizard<'_>) {
    fill_step(
        wizard,
        &[
            ("address", "123 Rizal Street, Barangay Centro"),
            ("city", "Naga"),
            ("province", "Camarines Sur"),
            ("latitude", "13.6218"),
            ("longitude", "123.1948"),
        ],
    );
}

/// A store that always fails, for propagation tests.
struct FailingStore;

#[async_trait]
impl ListingStore for FailingStore {
    async fn create(&self, _payload: ListingPayload) -> Result<BusinessRecord> {
        Err(Error::Store("backend unavailable".into()))
    }

    async fn update(&self, _id: Uuid, _payload: ListingPayload) -> Result<BusinessRecord> {
        Err(Error::Store("backend unavailable".into()))
    }

    async fn get(&self, id: Uuid) -> Result<BusinessRecord> {
        Err(Error::NotFound(format!("listing {id}")))
    }

    async fn list(&self) -> Result<Vec<BusinessRecord>> {
        Ok(Vec::new())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        Err(Error::NotFound(format!("listing {id}")))
    }

    async fn set_status(&self, id: Uuid, _status: RegistrationStatus) -> Result<BusinessRecord> {
        Err(Error::NotFound(format!("listing {id}")))
    }
}

// ============================================================================
// Schema and validation properties
// ============================================================================

#[test]
fn test_every_field_in_exactly_one_step() {
    let schema = listing_schema();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for step in schema.steps() {
        for name in step.fields {
            *seen.entry(name).or_default() += 1;
        }
    }
    assert_eq!(seen.len(), schema.fields().len());
    for field in schema.fields() {
        assert_eq!(seen.get(field.name), Some(&1), "field {}", field.name);
    }
}

#[test]
fn test_optional_empty_is_always_valid() {
    let schema = listing_schema();
    for name in ["email", "website", "facebook", "phone", "postal_code"] {
        assert_eq!(schema.validate(name, "").unwrap(), Ok(()), "field {name}");
    }
}

#[test]
fn test_business_name_bounds() {
    let schema = listing_schema();
    assert!(schema.validate("business_name", "ab").unwrap().is_err());
    assert!(schema.validate("business_name", "abc").unwrap().is_ok());
    assert!(schema
        .validate("business_name", &"x".repeat(100))
        .unwrap()
        .is_ok());
    assert!(schema
        .validate("business_name", &"x".repeat(101))
        .unwrap()
        .is_err());
}

#[test]
fn test_coordinate_round_trip_exact() {
    let cases = [
        (13.6218, 123.1948),
        (-90.0, -180.0),
        (90.0, 180.0),
        (0.0, 0.0),
        (-13.584_726_1, 144.939_162_8),
    ];
    for (lat, lon) in cases {
        let p = GeoPoint::new(lat, lon);
        let back = GeoPoint::parse_wkt(&p.to_wkt()).unwrap();
        assert_eq!(back.latitude, lat);
        assert_eq!(back.longitude, lon);
    }
}

#[test]
fn test_malformed_geography_falls_back_to_center() {
    let record = BusinessRecord {
        id: Uuid::new_v4(),
        name: "Sample Cafe".into(),
        business_type: BusinessType::Restaurant,
        description: "d".repeat(200),
        address: "123 Rizal Street, Barangay Centro".into(),
        city: "Naga".into(),
        province: "Camarines Sur".into(),
        postal_code: None,
        location: Some("not-a-point".into()),
        phone: None,
        email: None,
        website: None,
        facebook: None,
        status: RegistrationStatus::Pending,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };
    let session = edit_session(&record);
    assert_eq!(session.value("latitude"), Some("13.6218"));
    assert_eq!(session.value("longitude"), Some("123.1948"));
}

// ============================================================================
// Wizard navigation properties
// ============================================================================

#[test]
fn test_no_skip_on_invalid_next() {
    let mut wizard = new_wizard(GeoPoint::DEFAULT_CENTER, || {});
    // business_name is empty on a fresh Create session.
    assert_eq!(wizard.next(), NavOutcome::Invalid);
    assert_eq!(wizard.active_step(), 1);
    let error = wizard.session().error("business_name").unwrap();
    assert!(!error.is_empty());
}

#[test]
fn test_reentrancy_guard_allows_at_most_one_advance() {
    let mut wizard = new_wizard(GeoPoint::DEFAULT_CENTER, || {});
    fill_basics(&mut wizard);
    fill_location(&mut wizard);
    wizard.next();
    wizard.next();
    assert_eq!(wizard.active_step(), 3);

    // A pending submit holds the guard; navigation requests during the
    // window are ignored rather than queued.
    let _payload = wizard.begin_submit().unwrap();
    assert_eq!(wizard.next(), NavOutcome::Busy);
    assert_eq!(wizard.next(), NavOutcome::Busy);
    assert_eq!(wizard.previous(), NavOutcome::Busy);
    assert_eq!(wizard.active_step(), 3);
    wizard.finish_submit();

    // At the last step a clean next() clamps instead of advancing.
    assert_eq!(wizard.next(), NavOutcome::AtBoundary);
    assert_eq!(wizard.active_step(), 3);
}

#[test]
fn test_cancel_is_unconditional_and_mutates_nothing() {
    let calls = Arc::new(AtomicUsize::new(0));

    for step_up in 0..2 {
        let counter = Arc::clone(&calls);
        let mut wizard = new_wizard(GeoPoint::DEFAULT_CENTER, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        if step_up == 1 {
            fill_basics(&mut wizard);
            wizard.next();
        }
        let step_before = wizard.active_step();
        let values_before = wizard.session().values().clone();

        let before = calls.load(Ordering::SeqCst);
        wizard.cancel();
        assert_eq!(calls.load(Ordering::SeqCst), before + 1);
        assert_eq!(wizard.active_step(), step_before);
        assert_eq!(wizard.session().values(), &values_before);
    }
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[tokio::test]
async fn test_create_end_to_end_with_empty_optionals() {
    let store = InMemoryListingStore::new();
    let mut wizard = new_wizard(GeoPoint::DEFAULT_CENTER, || {});

    fill_basics(&mut wizard);
    assert_eq!(wizard.next(), NavOutcome::Moved);
    assert_eq!(wizard.active_step(), 2);

    fill_location(&mut wizard);
    assert_eq!(wizard.next(), NavOutcome::Moved);
    assert_eq!(wizard.active_step(), 3);

    // Step 3 optionals stay empty.
    assert!(wizard.can_submit());
    let record = wizard.submit(&store).await.unwrap();

    assert_eq!(record.name, "Sample Cafe");
    assert_eq!(record.business_type, BusinessType::Shop);
    assert_eq!(record.phone, None);
    assert_eq!(record.email, None);
    assert_eq!(record.website, None);
    assert_eq!(record.facebook, None);
    assert_eq!(record.location.as_deref(), Some("POINT(123.1948 13.6218)"));
    assert_eq!(record.status, RegistrationStatus::Pending);

    // Empty optionals persist as explicit nulls, not empty strings.
    let json = serde_json::to_value(&record).unwrap();
    assert!(json["phone"].is_null());
    assert!(json["email"].is_null());
    assert!(json["website"].is_null());

    // The wizard has no terminal state.
    assert!(!wizard.is_navigating());
    assert_eq!(wizard.active_step(), 3);
}

#[tokio::test]
async fn test_edit_end_to_end_round_trips_location() {
    let store = InMemoryListingStore::new();

    // Seed a record through the create path.
    let mut create = new_wizard(GeoPoint::DEFAULT_CENTER, || {});
    fill_basics(&mut create);
    create.next();
    fill_location(&mut create);
    create.next();
    let original = create.submit(&store).await.unwrap();

    // Edit it: seeding decodes the stored point into the two fields.
    let mut wizard = edit_wizard(&original, || {});
    assert_eq!(wizard.active_step(), 1);
    assert_eq!(wizard.session().value("latitude"), Some("13.6218"));
    assert_eq!(wizard.session().value("longitude"), Some("123.1948"));

    wizard
        .session_mut()
        .set_field("business_name", "Renamed Cafe")
        .unwrap();
    wizard.next();
    wizard.next();
    let updated = wizard.submit(&store).await.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, "Renamed Cafe");
    // The decode-on-load / encode-on-submit round trip is lossless.
    assert_eq!(updated.location, original.location);
    assert_eq!(updated.created_at, original.created_at);
}

#[tokio::test]
async fn test_store_failure_leaves_form_intact() {
    let mut wizard = new_wizard(GeoPoint::DEFAULT_CENTER, || {});
    fill_basics(&mut wizard);
    wizard.next();
    fill_location(&mut wizard);
    wizard.next();

    let values_before = wizard.session().values().clone();
    let err = wizard.submit(&FailingStore).await.unwrap_err();
    assert!(matches!(err, Error::Store(_)));
    assert!(err.to_string().contains("backend unavailable"));

    // Step, values, and the guard are all back where they were, so the
    // user can correct and resubmit.
    assert_eq!(wizard.active_step(), 3);
    assert_eq!(wizard.session().values(), &values_before);
    assert!(!wizard.is_navigating());
    assert!(wizard.can_submit());

    // And a resubmit against a working store succeeds.
    let store = InMemoryListingStore::new();
    let record = wizard.submit(&store).await.unwrap();
    assert_eq!(record.name, "Sample Cafe");
}

#[test]
fn test_build_payload_blocked_until_all_steps_valid() {
    let mut session = create_session(GeoPoint::DEFAULT_CENTER);
    let err = build_payload(&mut session).unwrap_err();
    let Error::SubmissionBlocked(failure) = err else {
        panic!("expected SubmissionBlocked, got {err}");
    };
    assert!(failure.field_errors.contains_key("business_name"));
    assert!(failure.field_errors.contains_key("description"));
    assert!(failure.field_errors.contains_key("address"));
    // Coordinates were seeded from the center, so they are not offenders.
    assert!(!failure.field_errors.contains_key("latitude"));
    assert!(!failure.field_errors.contains_key("longitude"));
}

//! The concrete business-listing form.
//!
//! Binds the schema-generic engine to the listing domain: the three-step
//! field layout, session seeding for create and edit, and the payload
//! builder that re-encodes the coordinate pair into location text at
//! submit time.
//!
//! ## Steps
//!
//! 1. **Basics** - name, category, long-form description
//! 2. **Location** - address, city, province, postal code, coordinates
//! 3. **Contact** - phone, email, website, Facebook page

use std::collections::HashMap;
use std::sync::LazyLock;

use lakbay_core::error::{Error, Result, ValidationFailure};
use lakbay_listings::geo::{GeoPoint, LATITUDE_RANGE, LONGITUDE_RANGE};
use lakbay_listings::record::{BusinessRecord, ListingPayload};
use lakbay_listings::types::BusinessType;

use crate::schema::{FieldKind, FieldSpec, FormSchema, StepDefinition};
use crate::session::FormSession;
use crate::wizard::FormWizard;

static LISTING_SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| {
    FormSchema::new(
        vec![
            FieldSpec {
                name: "business_name",
                label: "Business name",
                kind: FieldKind::Text {
                    min_length: Some(3),
                    max_length: Some(100),
                },
                required: true,
            },
            FieldSpec {
                name: "business_type",
                label: "Business type",
                kind: FieldKind::Choice {
                    choices: BusinessType::choices(),
                },
                required: true,
            },
            FieldSpec {
                name: "description",
                label: "Description",
                kind: FieldKind::Text {
                    min_length: Some(200),
                    max_length: Some(1000),
                },
                required: true,
            },
            FieldSpec {
                name: "address",
                label: "Street address",
                kind: FieldKind::Text {
                    min_length: Some(10),
                    max_length: Some(200),
                },
                required: true,
            },
            FieldSpec {
                name: "city",
                label: "City / municipality",
                kind: FieldKind::Text {
                    min_length: None,
                    max_length: Some(100),
                },
                required: true,
            },
            FieldSpec {
                name: "province",
                label: "Province",
                kind: FieldKind::Text {
                    min_length: None,
                    max_length: Some(100),
                },
                required: true,
            },
            FieldSpec {
                name: "postal_code",
                label: "Postal code",
                kind: FieldKind::PostalCode,
                required: false,
            },
            FieldSpec {
                name: "latitude",
                label: "Latitude",
                kind: FieldKind::Number {
                    min: LATITUDE_RANGE.0,
                    max: LATITUDE_RANGE.1,
                },
                required: true,
            },
            FieldSpec {
                name: "longitude",
                label: "Longitude",
                kind: FieldKind::Number {
                    min: LONGITUDE_RANGE.0,
                    max: LONGITUDE_RANGE.1,
                },
                required: true,
            },
            FieldSpec {
                name: "phone",
                label: "Phone",
                kind: FieldKind::Phone,
                required: false,
            },
            FieldSpec {
                name: "email",
                label: "Email",
                kind: FieldKind::Email,
                required: false,
            },
            FieldSpec {
                name: "website",
                label: "Website",
                kind: FieldKind::Url,
                required: false,
            },
            FieldSpec {
                name: "facebook",
                label: "Facebook page",
                kind: FieldKind::Url,
                required: false,
            },
        ],
        vec![
            StepDefinition {
                index: 1,
                title: "Basics",
                fields: &["business_name", "business_type", "description"],
            },
            StepDefinition {
                index: 2,
                title: "Location",
                fields: &[
                    "address",
                    "city",
                    "province",
                    "postal_code",
                    "latitude",
                    "longitude",
                ],
            },
            StepDefinition {
                index: 3,
                title: "Contact",
                fields: &["phone", "email", "website", "facebook"],
            },
        ],
    )
    .expect("built-in listing schema is valid")
});

/// Returns the business-listing schema. One immutable instance per process.
pub fn listing_schema() -> &'static FormSchema {
    &LISTING_SCHEMA
}

/// Creates a Create-mode session.
///
/// Everything starts empty except the coordinate fields, which carry the
/// injected map center. Pass the deployment's configured center
/// (`Settings::default_center`) or [`GeoPoint::DEFAULT_CENTER`].
pub fn create_session(center: GeoPoint) -> FormSession<'static> {
    let mut seeds: HashMap<&str, String> = HashMap::new();
    seeds.insert("latitude", center.latitude.to_string());
    seeds.insert("longitude", center.longitude.to_string());
    FormSession::create(listing_schema(), &seeds)
}

/// Creates an Edit-mode session seeded from an existing record.
///
/// The stored location text is decoded into the separate coordinate
/// fields; malformed or absent text degrades to the default center rather
/// than failing the load. Blank optional fields seed as empty strings.
pub fn edit_session(record: &BusinessRecord) -> FormSession<'static> {
    let point = GeoPoint::parse_wkt_or_center(record.location.as_deref());

    let mut seeds: HashMap<&str, String> = HashMap::new();
    seeds.insert("business_name", record.name.clone());
    seeds.insert("business_type", record.business_type.tag().to_string());
    seeds.insert("description", record.description.clone());
    seeds.insert("address", record.address.clone());
    seeds.insert("city", record.city.clone());
    seeds.insert("province", record.province.clone());
    seeds.insert("postal_code", record.postal_code.clone().unwrap_or_default());
    seeds.insert("latitude", point.latitude.to_string());
    seeds.insert("longitude", point.longitude.to_string());
    seeds.insert("phone", record.phone.clone().unwrap_or_default());
    seeds.insert("email", record.email.clone().unwrap_or_default());
    seeds.insert("website", record.website.clone().unwrap_or_default());
    seeds.insert("facebook", record.facebook.clone().unwrap_or_default());

    FormSession::edit(listing_schema(), &seeds, record.id)
}

/// Builds the persistence-ready payload from a session.
///
/// Runs a full validation pass first, then trims text fields, re-encodes
/// the coordinate pair into location text, and maps empty optional fields
/// to `None` so they persist as explicit nulls.
///
/// # Errors
///
/// Returns [`Error::SubmissionBlocked`] listing the offending fields if
/// any field in any step holds an error. The wizard prevents reaching this
/// through normal interaction; the check here is the session's own
/// re-assertion of the invariant.
pub fn build_payload(session: &mut FormSession<'_>) -> Result<ListingPayload> {
    if !session.validate_all() {
        let mut failure = ValidationFailure::new("the form has invalid fields");
        for index in 1..=session.schema().step_count() {
            for (field, message) in session.errors_for_step(index) {
                failure.add_field(field, message);
            }
        }
        return Err(Error::SubmissionBlocked(failure));
    }

    let required = |name: &str| -> String {
        session
            .value(name)
            .expect("every schema field has a value entry")
            .trim()
            .to_string()
    };
    let optional = |name: &str| -> Option<String> {
        let trimmed = required(name);
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    };
    let coordinate = |name: &str| -> Result<f64> {
        required(name).parse().map_err(|_| {
            let mut failure = ValidationFailure::new("the form has invalid fields");
            failure.add_field(name, "Enter a number.");
            Error::SubmissionBlocked(failure)
        })
    };

    let business_type: BusinessType = required("business_type").parse()?;
    let point = GeoPoint::new(coordinate("latitude")?, coordinate("longitude")?);

    Ok(ListingPayload {
        name: required("business_name"),
        business_type,
        description: required("description"),
        address: required("address"),
        city: required("city"),
        province: required("province"),
        postal_code: optional("postal_code"),
        location: point.to_wkt(),
        phone: optional("phone"),
        email: optional("email"),
        website: optional("website"),
        facebook: optional("facebook"),
    })
}

/// Creates a Create-mode wizard at step 1.
pub fn new_wizard(
    center: GeoPoint,
    on_discard: impl Fn() + Send + Sync + 'static,
) -> FormWizard<'static> {
    FormWizard::new(create_session(center), on_discard)
}

/// Creates an Edit-mode wizard at step 1. Editing never resumes mid-wizard.
pub fn edit_wizard(
    record: &BusinessRecord,
    on_discard: impl Fn() + Send + Sync + 'static,
) -> FormWizard<'static> {
    FormWizard::new(edit_session(record), on_discard)
}

//! # lakbay-forms
//!
//! The multi-step form engine behind the admin listing screens. Three
//! cooperating pieces:
//!
//! - [`schema`] - the immutable field schema registry: per-field validation
//!   rules grouped into ordered steps
//! - [`session`] - the mutable form session: current values and per-field
//!   errors, seeded from defaults or from an existing record
//! - [`wizard`] - the step controller: gates forward navigation on
//!   validation of the active step and owns the submit/cancel boundary
//!
//! [`listing_form`] binds the engine to the concrete business-listing
//! schema (three steps: basics, location, contact).

pub mod listing_form;
pub mod schema;
pub mod session;
mod validation;
pub mod wizard;

pub use listing_form::{create_session, edit_session, edit_wizard, listing_schema, new_wizard};
pub use schema::{FieldKind, FieldSpec, FormSchema, StepDefinition};
pub use session::{FormSession, SessionMode};
pub use wizard::{FormWizard, NavOutcome};

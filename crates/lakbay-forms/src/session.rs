//! The form session: current values and per-field errors.
//!
//! A [`FormSession`] owns one entry per registered field (never a missing
//! key) plus the per-field error messages computed so far. Setting a field
//! synchronously revalidates the step that owns it; fields on other steps
//! keep their last-computed error state until their step is validated
//! again. Validation problems are values here, never `Err` returns.

use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use lakbay_core::error::Result;

use crate::schema::FormSchema;
use crate::validation;

/// How a session originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// A new listing seeded from defaults.
    Create,
    /// An existing listing being edited.
    Edit {
        /// The id of the record being edited.
        id: Uuid,
    },
}

/// The runtime values and errors for one in-progress form instance.
#[derive(Debug)]
pub struct FormSession<'s> {
    schema: &'s FormSchema,
    mode: SessionMode,
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
}

impl<'s> FormSession<'s> {
    /// Creates a Create-mode session seeded from `seeds`.
    ///
    /// Every registered field gets an entry; fields absent from the seed
    /// table start empty. No validation runs at mount: a fresh form shows
    /// no errors until the user interacts with it.
    pub fn create(schema: &'s FormSchema, seeds: &HashMap<&str, String>) -> Self {
        Self::with_mode(schema, seeds, SessionMode::Create)
    }

    /// Creates an Edit-mode session for the record with the given id.
    pub fn edit(schema: &'s FormSchema, seeds: &HashMap<&str, String>, id: Uuid) -> Self {
        Self::with_mode(schema, seeds, SessionMode::Edit { id })
    }

    fn with_mode(schema: &'s FormSchema, seeds: &HashMap<&str, String>, mode: SessionMode) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|f| {
                (
                    f.name.to_string(),
                    seeds.get(f.name).cloned().unwrap_or_default(),
                )
            })
            .collect();
        Self {
            schema,
            mode,
            values,
            errors: HashMap::new(),
        }
    }

    /// Returns the schema this session validates against.
    pub fn schema(&self) -> &'s FormSchema {
        self.schema
    }

    /// Returns how this session originated.
    pub const fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Overwrites a field's value and revalidates the step that owns it.
    ///
    /// User input never fails this call: an invalid value produces an
    /// error message, not an `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`](lakbay_core::error::Error::UnknownField)
    /// for a name not in the schema, which is a caller bug.
    pub fn set_field(&mut self, name: &str, raw: impl Into<String>) -> Result<()> {
        let step = self.schema.step_containing(name)?;
        self.values.insert(name.to_string(), raw.into());
        self.validate_step(step);
        Ok(())
    }

    /// Returns the current value of a field, or `None` for unknown names.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns all current values.
    pub const fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Recomputes errors for exactly the given step's fields.
    ///
    /// Returns `true` if every field on the step is valid. Out-of-range
    /// indices validate nothing and report clean.
    pub fn validate_step(&mut self, index: usize) -> bool {
        let Some(step) = self.schema.step(index) else {
            return true;
        };
        let mut clean = true;
        for name in step.fields {
            let spec = self
                .schema
                .spec_for(name)
                .expect("schema partition guarantees step fields are registered");
            let raw = self.values.get(*name).map_or("", String::as_str);
            match validation::validate_value(spec, raw) {
                Ok(()) => {
                    self.errors.remove(*name);
                }
                Err(message) => {
                    self.errors.insert((*name).to_string(), message);
                    clean = false;
                }
            }
        }
        clean
    }

    /// Recomputes errors for every step. Returns `true` if all clean.
    pub fn validate_all(&mut self) -> bool {
        let mut clean = true;
        for index in 1..=self.schema.step_count() {
            clean &= self.validate_step(index);
        }
        clean
    }

    /// Checks the given step without touching stored error state.
    pub fn check_step(&self, index: usize) -> bool {
        self.schema.step(index).is_some_and(|step| {
            step.fields.iter().all(|name| {
                let spec = self
                    .schema
                    .spec_for(name)
                    .expect("schema partition guarantees step fields are registered");
                let raw = self.values.get(*name).map_or("", String::as_str);
                validation::validate_value(spec, raw).is_ok()
            })
        })
    }

    /// Returns the stored error message for a field, if any.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Returns the stored errors for one step's fields, ordered by name.
    pub fn errors_for_step(&self, index: usize) -> BTreeMap<&str, &str> {
        let Some(step) = self.schema.step(index) else {
            return BTreeMap::new();
        };
        step.fields
            .iter()
            .filter_map(|name| self.errors.get(*name).map(|msg| (*name, msg.as_str())))
            .collect()
    }

    /// Returns `true` if no field currently holds an error.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldSpec, StepDefinition};
    use lakbay_core::error::Error;

    fn two_step_schema() -> FormSchema {
        FormSchema::new(
            vec![
                FieldSpec {
                    name: "title",
                    label: "Title",
                    kind: FieldKind::Text {
                        min_length: Some(3),
                        max_length: Some(100),
                    },
                    required: true,
                },
                FieldSpec {
                    name: "email",
                    label: "Email",
                    kind: FieldKind::Email,
                    required: false,
                },
            ],
            vec![
                StepDefinition {
                    index: 1,
                    title: "Basics",
                    fields: &["title"],
                },
                StepDefinition {
                    index: 2,
                    title: "Contact",
                    fields: &["email"],
                },
            ],
        )
        .expect("test schema is valid")
    }

    #[test]
    fn test_create_seeds_every_field() {
        let schema = two_step_schema();
        let mut seeds = HashMap::new();
        seeds.insert("title", "Sample".to_string());
        let session = FormSession::create(&schema, &seeds);

        assert_eq!(session.mode(), SessionMode::Create);
        assert_eq!(session.value("title"), Some("Sample"));
        // Unseeded fields still have an (empty) entry.
        assert_eq!(session.value("email"), Some(""));
        assert!(session.is_clean());
    }

    #[test]
    fn test_set_field_revalidates_owning_step() {
        let schema = two_step_schema();
        let mut session = FormSession::create(&schema, &HashMap::new());

        session.set_field("title", "ab").unwrap();
        assert!(session.error("title").unwrap().contains("at least 3"));

        session.set_field("title", "abc").unwrap();
        assert!(session.error("title").is_none());
    }

    #[test]
    fn test_set_field_leaves_other_steps_alone() {
        let schema = two_step_schema();
        let mut session = FormSession::create(&schema, &HashMap::new());

        // Make step 2 dirty, then edit step 1; step 2's error must persist
        // untouched until its own step is validated again.
        session.set_field("email", "bogus").unwrap();
        assert!(session.error("email").is_some());

        session.set_field("title", "Sample").unwrap();
        assert!(session.error("email").is_some());

        session.set_field("email", "").unwrap();
        assert!(session.error("email").is_none());
    }

    #[test]
    fn test_set_field_unknown_name_errors() {
        let schema = two_step_schema();
        let mut session = FormSession::create(&schema, &HashMap::new());
        assert!(matches!(
            session.set_field("ghost", "x"),
            Err(Error::UnknownField(_))
        ));
    }

    #[test]
    fn test_validate_step_and_projection() {
        let schema = two_step_schema();
        let mut session = FormSession::create(&schema, &HashMap::new());

        assert!(!session.validate_step(1));
        let errors = session.errors_for_step(1);
        assert_eq!(errors.get("title"), Some(&"This field is required."));
        assert!(session.errors_for_step(2).is_empty());
    }

    #[test]
    fn test_check_step_is_pure() {
        let schema = two_step_schema();
        let session = FormSession::create(&schema, &HashMap::new());
        assert!(!session.check_step(1));
        // No error was stored by the check.
        assert!(session.is_clean());
        assert!(session.check_step(2));
    }

    #[test]
    fn test_validate_all() {
        let schema = two_step_schema();
        let mut session = FormSession::create(&schema, &HashMap::new());
        assert!(!session.validate_all());

        session.set_field("title", "Sample").unwrap();
        assert!(session.validate_all());
        assert!(session.is_clean());
    }

    #[test]
    fn test_edit_mode_carries_id() {
        let schema = two_step_schema();
        let id = Uuid::new_v4();
        let session = FormSession::edit(&schema, &HashMap::new(), id);
        assert_eq!(session.mode(), SessionMode::Edit { id });
    }
}

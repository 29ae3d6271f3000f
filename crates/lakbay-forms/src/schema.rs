//! The field schema registry.
//!
//! A [`FormSchema`] is immutable configuration: the full set of
//! [`FieldSpec`]s plus the ordered [`StepDefinition`]s that partition them
//! into wizard pages. Construction verifies the partition invariant (every
//! registered field appears in exactly one step, no orphans, contiguous
//! 1-based indices), so a schema that constructs is safe to navigate.

use lakbay_core::error::{Error, Result};

use crate::validation;

/// The validation rule bound to one form field.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Free text with optional length bounds (counted after trimming).
    Text {
        /// Minimum length in bytes.
        min_length: Option<usize>,
        /// Maximum length in bytes.
        max_length: Option<usize>,
    },
    /// One of a fixed set of `(tag, label)` choices.
    Choice {
        /// Available choices as `(value, display_label)` pairs.
        choices: &'static [(&'static str, &'static str)],
    },
    /// A number within a closed range.
    Number {
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },
    /// An email address, at most 100 characters.
    Email,
    /// An absolute URL.
    Url,
    /// A phone number, at most 20 characters.
    Phone,
    /// A postal code, at most 20 characters.
    PostalCode,
}

/// Complete definition of one form field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// The unique field name.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// The validation rule.
    pub kind: FieldKind,
    /// Whether a non-empty value is required.
    pub required: bool,
}

/// One page of a multi-step form.
#[derive(Debug, Clone)]
pub struct StepDefinition {
    /// 1-based position in the wizard.
    pub index: usize,
    /// Page title.
    pub title: &'static str,
    /// Ordered names of the fields on this page.
    pub fields: &'static [&'static str],
}

/// An immutable registry of field specs partitioned into steps.
#[derive(Debug)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
    steps: Vec<StepDefinition>,
}

impl FormSchema {
    /// Builds a schema, verifying the step partition invariant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`] if step indices are not contiguous from 1,
    /// a step references an unregistered field, a field appears in more
    /// than one step, or a registered field belongs to no step.
    pub fn new(fields: Vec<FieldSpec>, steps: Vec<StepDefinition>) -> Result<Self> {
        for (position, step) in steps.iter().enumerate() {
            if step.index != position + 1 {
                return Err(Error::Schema(format!(
                    "step indices must be contiguous from 1, found {} at position {}",
                    step.index,
                    position + 1
                )));
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        for step in &steps {
            for name in step.fields {
                if !fields.iter().any(|f| f.name == *name) {
                    return Err(Error::Schema(format!(
                        "step {} references unregistered field '{name}'",
                        step.index
                    )));
                }
                if seen.contains(name) {
                    return Err(Error::Schema(format!(
                        "field '{name}' appears in more than one step"
                    )));
                }
                seen.push(*name);
            }
        }
        for field in &fields {
            if !seen.contains(&field.name) {
                return Err(Error::Schema(format!(
                    "field '{}' belongs to no step",
                    field.name
                )));
            }
        }

        Ok(Self { fields, steps })
    }

    /// Looks up the spec for a field name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if the name is not registered. This
    /// is a programming-time invariant, not a user-facing error.
    pub fn spec_for(&self, name: &str) -> Result<&FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }

    /// Returns all field specs in registration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the ordered step definitions.
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Returns the number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the step with the given 1-based index, if any.
    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        index.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    /// Returns the 1-based index of the step containing `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if the name is not registered.
    pub fn step_containing(&self, name: &str) -> Result<usize> {
        self.steps
            .iter()
            .find(|s| s.fields.contains(&name))
            .map(|s| s.index)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }

    /// Validates a raw value against the named field's rule.
    ///
    /// Pure and deterministic; the `Err` carries the user-facing message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if the name is not registered.
    pub fn validate(&self, name: &str, raw: &str) -> Result<std::result::Result<(), String>> {
        let spec = self.spec_for(name)?;
        Ok(validation::validate_value(spec, raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &'static str, required: bool) -> FieldSpec {
        FieldSpec {
            name,
            label: name,
            kind: FieldKind::Text {
                min_length: None,
                max_length: None,
            },
            required,
        }
    }

    #[test]
    fn test_valid_schema_constructs() {
        let schema = FormSchema::new(
            vec![field("a", true), field("b", false)],
            vec![
                StepDefinition {
                    index: 1,
                    title: "One",
                    fields: &["a"],
                },
                StepDefinition {
                    index: 2,
                    title: "Two",
                    fields: &["b"],
                },
            ],
        )
        .unwrap();
        assert_eq!(schema.step_count(), 2);
        assert_eq!(schema.step_containing("b").unwrap(), 2);
        assert_eq!(schema.step(2).unwrap().title, "Two");
        assert!(schema.step(0).is_none());
        assert!(schema.step(3).is_none());
    }

    #[test]
    fn test_non_contiguous_indices_rejected() {
        let err = FormSchema::new(
            vec![field("a", true)],
            vec![StepDefinition {
                index: 2,
                title: "Two",
                fields: &["a"],
            }],
        )
        .unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }

    #[test]
    fn test_unregistered_step_field_rejected() {
        let err = FormSchema::new(
            vec![field("a", true)],
            vec![StepDefinition {
                index: 1,
                title: "One",
                fields: &["a", "ghost"],
            }],
        )
        .unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = FormSchema::new(
            vec![field("a", true)],
            vec![
                StepDefinition {
                    index: 1,
                    title: "One",
                    fields: &["a"],
                },
                StepDefinition {
                    index: 2,
                    title: "Two",
                    fields: &["a"],
                },
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than one step"));
    }

    #[test]
    fn test_orphan_field_rejected() {
        let err = FormSchema::new(
            vec![field("a", true), field("orphan", false)],
            vec![StepDefinition {
                index: 1,
                title: "One",
                fields: &["a"],
            }],
        )
        .unwrap_err();
        assert!(err.to_string().contains("orphan"));
    }

    #[test]
    fn test_spec_for_unknown_field() {
        let schema = FormSchema::new(
            vec![field("a", true)],
            vec![StepDefinition {
                index: 1,
                title: "One",
                fields: &["a"],
            }],
        )
        .unwrap();
        assert!(matches!(
            schema.spec_for("nope"),
            Err(Error::UnknownField(_))
        ));
        assert!(matches!(
            schema.step_containing("nope"),
            Err(Error::UnknownField(_))
        ));
    }
}

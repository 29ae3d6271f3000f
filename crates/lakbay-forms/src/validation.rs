//! Per-field validation rules.
//!
//! One rule per [`FieldKind`], dispatched by [`validate_value`]. The empty
//! check runs first: a value whose trim is empty is "absent", which fails a
//! required field and unconditionally passes an optional one. Format rules
//! never run on empty optional values.
//!
//! The first failing rule wins; each field reports at most one message.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::{FieldKind, FieldSpec};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

const EMAIL_MAX_LENGTH: usize = 100;
const CONTACT_MAX_LENGTH: usize = 20;

/// Validates a raw value against a field spec.
///
/// Pure and deterministic. Returns `Err` with the user-facing message on
/// the first failing rule.
pub fn validate_value(spec: &FieldSpec, raw: &str) -> Result<(), String> {
    let value = raw.trim();

    if value.is_empty() {
        if spec.required {
            return Err("This field is required.".to_string());
        }
        return Ok(());
    }

    match &spec.kind {
        FieldKind::Text {
            min_length,
            max_length,
        } => validate_length(value, *min_length, *max_length),

        FieldKind::Choice { choices } => {
            if choices.iter().any(|(tag, _)| *tag == value) {
                Ok(())
            } else {
                Err(format!(
                    "Select a valid choice. {value} is not one of the available choices."
                ))
            }
        }

        FieldKind::Number { min, max } => {
            let n: f64 = value
                .parse()
                .ok()
                .filter(|n: &f64| n.is_finite())
                .ok_or_else(|| "Enter a number.".to_string())?;
            if n < *min {
                Err(format!("Ensure this value is greater than or equal to {min}."))
            } else if n > *max {
                Err(format!("Ensure this value is less than or equal to {max}."))
            } else {
                Ok(())
            }
        }

        FieldKind::Email => {
            validate_length(value, None, Some(EMAIL_MAX_LENGTH))?;
            if EMAIL_RE.is_match(value) {
                Ok(())
            } else {
                Err("Enter a valid email address.".to_string())
            }
        }

        FieldKind::Url => match url::Url::parse(value) {
            Ok(_) => Ok(()),
            Err(_) => Err("Enter a valid URL.".to_string()),
        },

        FieldKind::Phone | FieldKind::PostalCode => {
            validate_length(value, None, Some(CONTACT_MAX_LENGTH))
        }
    }
}

fn validate_length(
    value: &str,
    min_length: Option<usize>,
    max_length: Option<usize>,
) -> Result<(), String> {
    let len = value.len();
    if let Some(min) = min_length {
        if len < min {
            return Err(format!(
                "Ensure this value has at least {min} characters (it has {len})."
            ));
        }
    }
    if let Some(max) = max_length {
        if len > max {
            return Err(format!(
                "Ensure this value has at most {max} characters (it has {len})."
            ));
        }
    }
    Ok(())
}

//! Safe nested-field extraction exercise
//!
//! Bug class: null/missing-field access. The contract is total: absence at
//! any level of `user.contact.email` is normal and must come back as
//! `None`, never as a crash. The buggy variant chains unchecked access and
//! panics the moment anything along the path is missing.
//!
//! Strict mode is a separate, opt-in surface: it fails loudly with a
//! kind-specific error instead of reporting absence, and the two modes are
//! never conflated (lenient returns `Option`, strict returns `Result`).

use std::panic::{self, AssertUnwindSafe};

use serde_json::{json, Value};

use crate::common::{Error, Result};
use crate::report;

/// Extract `user.contact.email`, lowercased.
///
/// Returns `None` when the user is null or not an object, when `contact`
/// is missing or null, or when `email` is missing, null, empty, or not a
/// string. Absence is not an error.
pub fn extract_email(user: &Value) -> Option<String> {
    let Some(fields) = user.as_object() else {
        return None;
    };
    let Some(contact) = fields.get("contact") else {
        return None;
    };
    let Some(contact) = contact.as_object() else {
        return None;
    };
    let Some(email) = contact.get("email") else {
        return None;
    };
    let Some(email) = email.as_str() else {
        return None;
    };
    if email.is_empty() {
        return None;
    }
    Some(email.to_lowercase())
}

/// Alternative fix: the same contract as [`extract_email`] expressed as a
/// combinator chain. Agrees with the guard-clause version on every input.
pub fn extract_email_checked(user: &Value) -> Option<String> {
    user.get("contact")
        .and_then(Value::as_object)
        .and_then(|contact| contact.get("email"))
        .and_then(Value::as_str)
        .filter(|email| !email.is_empty())
        .map(str::to_lowercase)
}

/// Strict mode: fail loudly with a kind-specific error.
///
/// Distinguishes a missing field from an explicit null from a wrong type;
/// callers opt into this when absence should abort rather than propagate.
pub fn extract_email_strict(user: &Value) -> Result<String> {
    if user.is_null() {
        return Err(Error::null_field("user"));
    }
    let fields = user
        .as_object()
        .ok_or_else(|| Error::wrong_type("user", "object", json_type(user)))?;

    let contact = fields
        .get("contact")
        .ok_or_else(|| Error::missing_field("contact"))?;
    if contact.is_null() {
        return Err(Error::null_field("contact"));
    }
    let contact = contact
        .as_object()
        .ok_or_else(|| Error::wrong_type("contact", "object", json_type(contact)))?;

    let email = contact
        .get("email")
        .ok_or_else(|| Error::missing_field("contact.email"))?;
    if email.is_null() {
        return Err(Error::null_field("contact.email"));
    }
    let email = email
        .as_str()
        .ok_or_else(|| Error::wrong_type("contact.email", "string", json_type(email)))?;
    if email.is_empty() {
        return Err(Error::empty_field("contact.email"));
    }

    Ok(email.to_lowercase())
}

/// Same contract as [`extract_email`], with the seeded defect.
///
/// BUG: chained indexing with an unchecked coercion at the end. Panics
/// whenever any step of the path is absent, null, or not a string,
/// violating the "absence is not failure" contract.
pub fn extract_email_unchecked(user: &Value) -> String {
    let email = user["contact"]["email"]
        .as_str()
        .expect("user['contact']['email'] is not a string");
    email.to_lowercase()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Run the unchecked variant with the panic captured, so the demo can show
/// the crash the same way it shows a wrong value.
fn catch_unchecked(user: &Value) -> std::result::Result<String, String> {
    let prev_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| extract_email_unchecked(user)));
    panic::set_hook(prev_hook);

    outcome.map_err(|payload| {
        payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic".to_string())
    })
}

/// Demonstration harness: valid, incomplete, and null-contact users
/// through the buggy and fixed variants.
pub fn demo() -> Result<()> {
    report::heading(
        "nested-field extraction",
        "bug class: null/missing-field access",
    );

    let valid = json!({
        "name": "Alice",
        "contact": { "email": "ALICE@EXAMPLE.COM", "phone": "555-1234" }
    });
    let incomplete = json!({ "name": "Bob" });
    let null_contact = json!({ "name": "Charlie", "contact": null });

    report::section("Buggy variant (unchecked access)");
    match catch_unchecked(&valid) {
        Ok(email) => report::observed("valid user", email),
        Err(msg) => report::observed("valid user", format!("PANIC: {msg}")),
    }
    match catch_unchecked(&incomplete) {
        Ok(email) => report::observed("user without contact", email),
        Err(msg) => report::observed("user without contact", format!("PANIC: {msg}")),
    }
    match catch_unchecked(&null_contact) {
        Ok(email) => report::observed("user with null contact", email),
        Err(msg) => report::observed("user with null contact", format!("PANIC: {msg}")),
    }
    report::note("absence crashes instead of propagating as an absence result");

    report::section("Fixed variant (guard clauses)");
    report::comparison(
        "valid user",
        "alice@example.com".to_string(),
        report::display_option(&extract_email(&valid)),
    );
    report::comparison(
        "user without contact",
        "(absent)".to_string(),
        report::display_option(&extract_email(&incomplete)),
    );
    report::comparison(
        "user with null contact",
        "(absent)".to_string(),
        report::display_option(&extract_email(&null_contact)),
    );

    report::section("Strict mode (opt-in loud failure)");
    match extract_email_strict(&incomplete) {
        Ok(email) => report::observed("user without contact", email),
        Err(e) => report::observed("user without contact", format!("error: {e}")),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> Value {
        json!({
            "name": "Alice",
            "contact": { "email": "ALICE@EXAMPLE.COM", "phone": "555-1234" }
        })
    }

    #[test]
    fn lowercases_a_present_email() {
        assert_eq!(
            extract_email(&valid_user()),
            Some("alice@example.com".to_string())
        );
    }

    #[test]
    fn absence_cases_are_not_errors() {
        assert_eq!(extract_email(&json!({ "name": "Bob" })), None);
        assert_eq!(extract_email(&json!({ "contact": null })), None);
        assert_eq!(extract_email(&Value::Null), None);
        assert_eq!(extract_email(&json!({})), None);
        assert_eq!(extract_email(&json!({ "contact": { "phone": "555" } })), None);
        assert_eq!(extract_email(&json!({ "contact": { "email": null } })), None);
    }

    #[test]
    fn empty_email_is_treated_as_absent() {
        assert_eq!(extract_email(&json!({ "contact": { "email": "" } })), None);
    }

    #[test]
    fn non_string_email_is_treated_as_absent() {
        assert_eq!(
            extract_email(&json!({ "contact": { "email": 12345 } })),
            None
        );
    }

    #[test]
    fn checked_variant_agrees_with_guard_variant() {
        let inputs = [
            valid_user(),
            json!({ "name": "Bob" }),
            json!({ "contact": null }),
            Value::Null,
            json!({}),
            json!({ "contact": { "email": "" } }),
            json!({ "contact": { "email": 12345 } }),
            json!({ "contact": "not an object" }),
        ];

        for input in &inputs {
            assert_eq!(
                extract_email(input),
                extract_email_checked(input),
                "variants disagree on {input}"
            );
        }
    }

    #[test]
    fn strict_mode_distinguishes_failure_kinds() {
        assert!(matches!(
            extract_email_strict(&json!({ "name": "Bob" })),
            Err(Error::MissingField { .. })
        ));
        assert!(matches!(
            extract_email_strict(&json!({ "contact": null })),
            Err(Error::NullField { .. })
        ));
        assert!(matches!(
            extract_email_strict(&json!({ "contact": { "email": 12345 } })),
            Err(Error::WrongType { .. })
        ));
        assert!(matches!(
            extract_email_strict(&json!({ "contact": { "email": "" } })),
            Err(Error::EmptyField { .. })
        ));
        assert_eq!(
            extract_email_strict(&valid_user()).unwrap(),
            "alice@example.com"
        );
    }

    #[test]
    fn unchecked_variant_panics_on_missing_contact() {
        assert!(catch_unchecked(&json!({ "name": "Bob" })).is_err());
        assert!(catch_unchecked(&json!({ "contact": null })).is_err());
        assert_eq!(
            catch_unchecked(&valid_user()).unwrap(),
            "alice@example.com"
        );
    }
}

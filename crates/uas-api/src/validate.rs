//! Request schema validation.
//!
//! Bodies arrive as raw JSON values and are checked field by field so a
//! missing key, a wrong type, and a failed bound each report their own
//! reason. Every violated field contributes
//! `Invalid value for <field>: <reasons>`; reasons within a field are
//! space-joined, and field blocks are space-joined in declaration order.
//! Unknown fields are ignored. Lengths count Unicode scalar values.

use serde_json::Value;
use uuid::Uuid;

use crate::dto::{DetailRequest, LoginRequest, RegisterRequest};
use crate::error::{ApiError, ApiResult};

const MISSING: &str = "Missing data for required field.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_A_UUID: &str = "Not a valid UUID.";
const NOT_AN_EMAIL: &str = "Not a valid email address.";
const LENGTH_1_60: &str = "Length must be between 1 and 60.";
const PASSWORD_TOO_SHORT: &str = "Shorter than minimum length 8.";

/// Validates the registration body.
///
/// # Errors
///
/// Returns a 400 [`ApiError`] carrying every violated field's reasons.
pub fn register_request(body: &Value) -> ApiResult<RegisterRequest> {
    let mut errors = FieldErrors::default();

    let client_id = required_string(body, "clientId", &mut errors).and_then(|raw| {
        let parsed = parse_v4(&raw);
        if parsed.is_none() {
            errors.push("clientId", NOT_A_UUID);
        }
        parsed
    });

    let name = required_string(body, "name", &mut errors).and_then(|name| {
        if within_length(&name, 1, 60) {
            Some(name)
        } else {
            errors.push("name", LENGTH_1_60);
            None
        }
    });

    let email = required_string(body, "email", &mut errors)
        .and_then(|email| check_email(email, &mut errors));

    let password = required_string(body, "password", &mut errors).and_then(|password| {
        if password.chars().count() >= 8 {
            Some(password)
        } else {
            errors.push("password", PASSWORD_TOO_SHORT);
            None
        }
    });

    match (client_id, name, email, password) {
        (Some(client_id), Some(name), Some(email), Some(password)) => Ok(RegisterRequest {
            client_id,
            name,
            email,
            password,
        }),
        _ => Err(errors.into_error()),
    }
}

/// Validates the login body. Only presence and type are checked;
/// content mismatches surface later as the uniform 401.
///
/// # Errors
///
/// Returns a 400 [`ApiError`] carrying every violated field's reasons.
pub fn login_request(body: &Value) -> ApiResult<LoginRequest> {
    let mut errors = FieldErrors::default();

    let username = required_string(body, "username", &mut errors);
    let password = required_string(body, "password", &mut errors);

    match (username, password) {
        (Some(username), Some(password)) => Ok(LoginRequest { username, password }),
        _ => Err(errors.into_error()),
    }
}

/// Validates the lookup-by-email body with the registration email rules.
///
/// # Errors
///
/// Returns a 400 [`ApiError`] carrying the email field's reasons.
pub fn detail_request(body: &Value) -> ApiResult<DetailRequest> {
    let mut errors = FieldErrors::default();

    let email = required_string(body, "email", &mut errors)
        .and_then(|email| check_email(email, &mut errors));

    match email {
        Some(email) => Ok(DetailRequest { email }),
        None => Err(errors.into_error()),
    }
}

/// Formats a single-field violation in the wire format.
#[must_use]
pub fn field_error(field: &str, reason: &str) -> ApiError {
    ApiError::BadRequest(format!("Invalid value for {field}: {reason}"))
}

/// Parses a strictly version-4 UUID.
#[must_use]
pub fn parse_v4(value: &str) -> Option<Uuid> {
    Uuid::parse_str(value)
        .ok()
        .filter(|id| id.get_version_num() == 4)
}

/// Per-field reason collector preserving declaration order.
#[derive(Debug, Default)]
struct FieldErrors {
    fields: Vec<(&'static str, Vec<&'static str>)>,
}

impl FieldErrors {
    fn push(&mut self, field: &'static str, reason: &'static str) {
        if let Some((_, reasons)) = self.fields.iter_mut().find(|(name, _)| *name == field) {
            reasons.push(reason);
        } else {
            self.fields.push((field, vec![reason]));
        }
    }

    fn into_error(self) -> ApiError {
        let message = self
            .fields
            .iter()
            .map(|(field, reasons)| format!("Invalid value for {field}: {}", reasons.join(" ")))
            .collect::<Vec<_>>()
            .join(" ");
        ApiError::BadRequest(message)
    }
}

/// Reads a required string field, recording a reason when it is absent
/// or not a JSON string (`null` included).
fn required_string(body: &Value, field: &'static str, errors: &mut FieldErrors) -> Option<String> {
    match body.get(field) {
        None => {
            errors.push(field, MISSING);
            None
        }
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(field, NOT_A_STRING);
            None
        }
    }
}

/// Applies the email rules: format first, then length. Both reasons can
/// co-occur on one value.
fn check_email(email: String, errors: &mut FieldErrors) -> Option<String> {
    let mut ok = true;
    if !valid_email(&email) {
        errors.push("email", NOT_AN_EMAIL);
        ok = false;
    }
    if !within_length(&email, 1, 60) {
        errors.push("email", LENGTH_1_60);
        ok = false;
    }
    ok.then_some(email)
}

/// Syntactic email check: one `@`, a non-empty local part, no
/// whitespace, and a dotted domain with non-empty labels.
fn valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn within_length(value: &str, min: usize, max: usize) -> bool {
    let length = value.chars().count();
    (min..=max).contains(&length)
}

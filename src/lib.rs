//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::{UserDraft, UserFields, UserPatch};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

pub mod data;
pub mod domain;

///
/// This type represents various errors that can occur within this crate.
///
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Error occurred during an I/O related operation.
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
    /// Error occurred during an SQL related operation.
    #[error("SQL error: {0}")]
    SQLError(#[from] rusqlite::Error),
    /// Error occurred while (de)serializing JSON.
    #[error("JSON error: {0}")]
    JSONError(#[from] serde_json::Error),
    /// User record for given identifier was not found.
    #[error("no such user: {0}")]
    UserNotFound(String),
    /// Request to the external API could not be completed.
    #[error("external request failed: {0}")]
    ExternalRequest(#[from] reqwest::Error),
    /// External API answered with a non-success status.
    #[error("external API returned status {0}")]
    ExternalStatus(u16),
    /// External API answered without any user results.
    #[error("external API returned no results")]
    EmptyResults,
    /// Something happened when operating on the database.
    #[error("error resulting from database operation")]
    Database,
    /// An unexpected error occurred that would otherwise have been a panic.
    #[error("something bad happened: {0}")]
    InternalError(String),
}

///
/// A single field constraint violation found in a request payload.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: String,
    /// Description of the violation.
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_owned(),
            message: message.to_owned(),
        }
    }
}

// modest syntactic check, deliverability is not our concern
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("failed to compile pattern"));

///
/// Validate a request body for creating a user, producing the complete
/// field set if every constraint is satisfied. Violations are reported in
/// field order.
///
pub fn validate_new_user(draft: UserDraft) -> Result<UserFields, Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();
    let name = match draft.name {
        Some(name) if !name.is_empty() => Some(name),
        _ => {
            errors.push(FieldError::new(
                "name",
                "name is required and must not be empty",
            ));
            None
        }
    };
    let age = match draft.age.and_then(|age| u32::try_from(age).ok()) {
        Some(age) if age >= 1 => Some(age),
        _ => {
            errors.push(FieldError::new("age", "age must be a positive integer"));
            None
        }
    };
    let email = match draft.email {
        Some(email) if EMAIL_PATTERN.is_match(&email) => Some(email),
        _ => {
            errors.push(FieldError::new("email", "email is not a valid address"));
            None
        }
    };
    if let (Some(name), Some(age), Some(email)) = (name, age, email) {
        Ok(UserFields { name, age, email })
    } else {
        Err(errors)
    }
}

///
/// Validate a request body for updating a user. Only the fields present
/// are checked, and only those fields will be touched by the update.
///
pub fn validate_user_patch(draft: UserDraft) -> Result<UserPatch, Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();
    if matches!(draft.name.as_deref(), Some("")) {
        errors.push(FieldError::new("name", "name must not be empty"));
    }
    let age = match draft.age {
        None => None,
        Some(age) => match u32::try_from(age) {
            Ok(age) if age >= 1 => Some(age),
            _ => {
                errors.push(FieldError::new("age", "age must be a positive integer"));
                None
            }
        },
    };
    if let Some(email) = draft.email.as_deref() {
        if !EMAIL_PATTERN.is_match(email) {
            errors.push(FieldError::new("email", "email is not a valid address"));
        }
    }
    if errors.is_empty() {
        Ok(UserPatch {
            name: draft.name,
            age,
            email: draft.email,
        })
    } else {
        Err(errors)
    }
}

///
/// Validate a path identifier against the identifier syntax used by the
/// data source.
///
pub fn validate_identifier(id: &str) -> Result<Uuid, Vec<FieldError>> {
    Uuid::parse_str(id).map_err(|_| vec![FieldError::new("id", "identifier is not a valid UUID")])
}

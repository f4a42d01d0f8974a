// Copyright (c) 2025 Ledgerkit Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

/// One violated field in a rejected payload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every violation found in a payload, not just the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        FieldErrors(Vec::new())
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finish a validation pass: `Ok(value)` when nothing was collected.
    pub fn into_result<T>(self, value: T) -> std::result::Result<T, Error> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(Error::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Core failure taxonomy. The access layer translates these to
/// protocol responses; nothing below it catches and swallows.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The row exists but belongs to another user. Callers must surface
    /// this exactly like `NotFound` so existence is not leaked.
    #[error("{entity} {id} not found")]
    Ownership { entity: &'static str, id: i64 },

    #[error("conflict: {0}")]
    Conflict(String),

    /// Unknown and expired session ids fail identically.
    #[error("session is invalid or expired")]
    InvalidSession,

    #[error("configuration: {0}")]
    Configuration(String),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

impl Error {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Error::NotFound { entity, id }
    }

    pub fn ownership(entity: &'static str, id: i64) -> Self {
        Error::Ownership { entity, id }
    }

    /// Single-field validation failure.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        let mut errs = FieldErrors::new();
        errs.push(field, message);
        Error::Validation(errs)
    }

    /// True for both `NotFound` and `Ownership`: the two are
    /// indistinguishable at the response boundary.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::Ownership { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_collect_every_violation() {
        let mut errs = FieldErrors::new();
        errs.push("name", "must not be empty");
        errs.push("amount", "must be non-negative");
        let err = errs.clone().into_result(()).unwrap_err();
        match err {
            Error::Validation(inner) => assert_eq!(inner.0.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            errs.to_string(),
            "name: must not be empty; amount: must be non-negative"
        );
    }

    #[test]
    fn ownership_displays_like_not_found() {
        let nf = Error::not_found("category", 7).to_string();
        let own = Error::ownership("category", 7).to_string();
        assert_eq!(nf, own);
        assert!(Error::ownership("category", 7).is_not_found());
    }
}

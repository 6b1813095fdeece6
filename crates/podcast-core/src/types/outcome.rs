//! The `{ok, error}` outcome shape every operation is reported as.
//!
//! A success serializes as `{"ok": true, ...payload}` with the payload's
//! fields flattened next to `ok`; a failure serializes as
//! `{"ok": false, "error": "<message>"}`.

use serde::Serialize;

use crate::error::AppError;

/// Tagged outcome returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T: Serialize> {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Failure message, present only when `ok` is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Success payload, flattened into the top-level object.
    #[serde(flatten)]
    pub payload: Option<T>,
}

impl<T: Serialize> Outcome<T> {
    /// A successful outcome carrying `payload`.
    pub fn success(payload: T) -> Self {
        Self {
            ok: true,
            error: None,
            payload: Some(payload),
        }
    }

    /// A successful outcome with nothing beyond `ok: true`.
    pub fn empty() -> Self {
        Self {
            ok: true,
            error: None,
            payload: None,
        }
    }

    /// A failed outcome carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
            payload: None,
        }
    }
}

impl<T: Serialize> From<AppError> for Outcome<T> {
    fn from(err: AppError) -> Self {
        Self::failure(err.message)
    }
}

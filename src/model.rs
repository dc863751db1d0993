//! Album record shapes and the uniform response envelope

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single track on an album. Has no identity of its own; exists only
/// nested inside an [`Album`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub duration: f64,
}

/// An album record as stored in the `albums` collection.
///
/// The `_id` is assigned by the store on insert and is required for
/// update/delete. Handlers accept raw JSON rather than this type so that
/// documents stay schemaless; this struct is the canonical shape for API
/// consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub artist: String,
    pub date: String,
    pub image_url: String,
    pub songs: Vec<Song>,
}

/// Uniform response wrapper returned by every route.
///
/// The status code is carried both in the HTTP status line and in the
/// `code` field of the JSON body.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub message: String,
    pub body: Value,
    pub code: u16,
}

impl Envelope {
    pub fn new(code: StatusCode, message: impl Into<String>, body: Value) -> Self {
        Self {
            message: message.into(),
            body,
            code: code.as_u16(),
        }
    }

    /// Failure envelope with the message tucked under `body.errorMessage`.
    pub fn error(
        code: StatusCode,
        message: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self::new(
            code,
            message,
            json!({ "errorMessage": error_message.into() }),
        )
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

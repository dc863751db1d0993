//! Album CRUD handlers
//!
//! Each handler issues at most one store operation and shapes the outcome
//! into the uniform response envelope. Bodies are handled as raw JSON so
//! documents stay schemaless; the only input checks are field presence and
//! identifier syntax.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mongodb::bson::oid::ObjectId;
use serde_json::{json, Value};
use tracing::error;

use crate::model::Envelope;
use crate::AppState;

const MISSING_ATTRIBUTES: &str = "Album must contain all required attributes.";

/// True iff the five required album fields are all present. Values are not
/// type-checked; a field of the wrong type still counts as present.
fn is_album(value: &Value) -> bool {
    ["artist", "date", "imageUrl", "songs", "title"]
        .iter()
        .all(|field| value.get(field).is_some())
}

/// GET /getAllAlbums - Every album document in the collection
///
/// Documents come back in store-native order; no sort is applied.
pub async fn get_all_albums(State(state): State<AppState>) -> Envelope {
    match state.store.find_all().await {
        Ok(result) => Envelope::new(
            StatusCode::OK,
            "Successfully retrieved albums.",
            json!({ "result": result }),
        ),
        Err(e) => {
            error!("Album retrieval failed: {}", e);
            Envelope::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to retrieve albums.",
                e.to_string(),
            )
        }
    }
}

/// POST /addAlbum - Insert one album, identifier assigned by the store
pub async fn add_album(State(state): State<AppState>, Json(album): Json<Value>) -> Envelope {
    if !is_album(&album) {
        return Envelope::error(
            StatusCode::BAD_REQUEST,
            "Album submission was not successful.",
            MISSING_ATTRIBUTES,
        );
    }

    match state.store.insert_one(album).await {
        Ok(added) => Envelope::new(
            StatusCode::CREATED,
            "Successfully added album.",
            json!({ "added": [added] }),
        ),
        Err(e) => {
            error!("Album insert failed: {}", e);
            Envelope::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Album submission was not successful.",
                e.to_string(),
            )
        }
    }
}

/// POST /deleteAlbum - Delete the album matching `_id`
///
/// An absent `_id` falls back to the literal `"000"`, which never parses
/// as a store identifier.
pub async fn delete_album(State(state): State<AppState>, Json(body): Json<Value>) -> Envelope {
    let album_id = body.get("_id").and_then(Value::as_str).unwrap_or("000");

    let Ok(id) = ObjectId::parse_str(album_id) else {
        return Envelope::error(
            StatusCode::BAD_REQUEST,
            "Album deletion was not successful.",
            format!("Album ID {} is not valid.", album_id),
        );
    };

    match state.store.delete_one(id).await {
        Ok(0) => Envelope::error(
            StatusCode::BAD_REQUEST,
            "Album deletion was not successful.",
            "ID not found.",
        ),
        Ok(deleted) => Envelope::new(
            StatusCode::OK,
            "Album deletion was successful.",
            json!({ "numberDeleted": deleted }),
        ),
        Err(e) => {
            error!("Album delete failed: {}", e);
            Envelope::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Album deletion was not successful.",
                e.to_string(),
            )
        }
    }
}

/// POST /updateAlbum - Replace the whole album matching `_id`
///
/// A well-formed id with no matching document is not an error; the
/// envelope reports whatever modified count the store returns.
pub async fn update_album(State(state): State<AppState>, Json(album): Json<Value>) -> Envelope {
    if !is_album(&album) || album.get("_id").is_none() {
        return Envelope::error(
            StatusCode::BAD_REQUEST,
            "Album submission was not successful.",
            MISSING_ATTRIBUTES,
        );
    }

    let id = album
        .get("_id")
        .and_then(Value::as_str)
        .and_then(|raw| ObjectId::parse_str(raw).ok());
    let Some(id) = id else {
        return Envelope::error(
            StatusCode::BAD_REQUEST,
            "Album submission was not successful.",
            "Album ID is not valid.",
        );
    };

    match state.store.replace_one(id, album).await {
        Ok(modified) => Envelope::new(
            StatusCode::OK,
            "Successfully modified album.",
            json!({ "modified": modified }),
        ),
        Err(e) => {
            error!("Album replace failed: {}", e);
            Envelope::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Album submission was not successful.",
                e.to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::is_album;
    use serde_json::json;

    fn complete_album() -> serde_json::Value {
        json!({
            "title": "Moanin'",
            "artist": "Art Blakey",
            "date": "1959-01-01",
            "imageUrl": "https://images.example/moanin.jpg",
            "songs": [{ "title": "Moanin'", "duration": 575.0 }],
        })
    }

    #[test]
    fn complete_album_passes() {
        assert!(is_album(&complete_album()));
    }

    #[test]
    fn each_missing_field_fails() {
        for field in ["artist", "date", "imageUrl", "songs", "title"] {
            let mut album = complete_album();
            album.as_object_mut().unwrap().remove(field);
            assert!(!is_album(&album), "missing {} should fail", field);
        }
    }

    #[test]
    fn values_are_not_type_checked() {
        let album = json!({
            "title": 7,
            "artist": ["not", "a", "string"],
            "date": false,
            "imageUrl": {},
            "songs": "not a list",
        });
        assert!(is_album(&album));
    }

    #[test]
    fn null_counts_as_present() {
        let mut album = complete_album();
        album["songs"] = serde_json::Value::Null;
        assert!(is_album(&album));
    }

    #[test]
    fn non_objects_fail() {
        assert!(!is_album(&json!([])));
        assert!(!is_album(&json!("album")));
        assert!(!is_album(&json!(null)));
    }
}

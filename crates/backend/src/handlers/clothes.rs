use axum::extract::{Multipart, Path};
use axum::Json;

use crate::domain::clothes::{self, service::CreateClothesError, service::UploadedImage};
use contracts::shared::action_result::ActionResult;

/// POST /api/collection/:id/clothes
///
/// Multipart body: a `payload` part with the NewClothes JSON and an optional
/// `image` file part. Business failures answer 200 with `ok=false` so the
/// message reaches the toast surface; only malformed requests get 4xx.
pub async fn create(
    Path(collection_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ActionResult>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&collection_id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };

    let mut payload: Option<contracts::domain::clothes::aggregate::NewClothes> = None;
    let mut image: Option<UploadedImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| axum::http::StatusCode::BAD_REQUEST)?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("payload") => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| axum::http::StatusCode::BAD_REQUEST)?;
                let parsed = serde_json::from_str(&text)
                    .map_err(|_| axum::http::StatusCode::BAD_REQUEST)?;
                payload = Some(parsed);
            }
            Some("image") => {
                let file_name = field.file_name().map(|s| s.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| axum::http::StatusCode::BAD_REQUEST)?;
                image = Some(UploadedImage {
                    bytes: bytes.to_vec(),
                    file_name,
                });
            }
            _ => {}
        }
    }

    let Some(payload) = payload else {
        return Err(axum::http::StatusCode::BAD_REQUEST);
    };

    match clothes::service::create(uuid, payload, image).await {
        Ok(message) => Ok(Json(ActionResult::success(message))),
        Err(CreateClothesError::Internal(e)) => {
            tracing::error!("Failed to create clothes variant: {}", e);
            Ok(Json(ActionResult::failure(
                "Something went wrong, please try again",
            )))
        }
        Err(e) => Ok(Json(ActionResult::failure(e.to_string()))),
    }
}

/// GET /api/clothes/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::clothes::aggregate::Clothes>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match clothes::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to fetch clothes {}: {}", id, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/clothes/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match clothes::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete clothes {}: {}", id, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

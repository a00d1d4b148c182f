use super::repository;
use crate::domain::collection;
use crate::shared::images;
use contracts::domain::clothes::aggregate::{Clothes, NewClothes};
use contracts::domain::collection::aggregate::CollectionId;
use thiserror::Error;
use uuid::Uuid;

/// Failures of the clothes creation action. Validation-level variants carry
/// the message shown to the user in the error toast; `Internal` stays
/// server-side.
#[derive(Debug, Error)]
pub enum CreateClothesError {
    #[error("{0}")]
    Validation(String),
    #[error("collection not found")]
    CollectionNotFound,
    #[error("duplicate design")]
    Duplicate,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Raw image attachment extracted from the multipart request
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
}

/// Create a clothes variant inside a collection.
///
/// Returns the human-readable success message for the toast surface.
pub async fn create(
    collection_id: Uuid,
    payload: NewClothes,
    image: Option<UploadedImage>,
) -> Result<String, CreateClothesError> {
    let collection = collection::repository::get_by_id(collection_id)
        .await?
        .ok_or(CreateClothesError::CollectionNotFound)?;

    // Validate before touching the filesystem.
    let mut aggregate = Clothes::new_for_insert(CollectionId(collection_id), payload, None);
    aggregate
        .validate()
        .map_err(CreateClothesError::Validation)?;

    if repository::exists_design_color(collection_id, &aggregate.design, &aggregate.color).await? {
        return Err(CreateClothesError::Duplicate);
    }

    if let Some(upload) = image {
        let path = images::store_image(&upload.bytes, upload.file_name.as_deref())
            .map_err(CreateClothesError::Internal)?;
        aggregate.image_path = Some(path);
    }

    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;

    tracing::info!(
        "Created clothes variant {} ({} / {}) in collection {}",
        id,
        aggregate.design,
        aggregate.color,
        collection.name
    );

    Ok(format!(
        "\"{}\" ({}) added to {}",
        aggregate.design, aggregate.color, collection.name
    ))
}

/// Fetch one variant
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Clothes>> {
    repository::get_by_id(id).await
}

/// Soft delete a variant
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

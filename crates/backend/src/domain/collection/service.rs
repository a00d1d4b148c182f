use super::repository;
use crate::domain::clothes;
use contracts::domain::clothes::aggregate::Clothes;
use contracts::domain::collection::aggregate::{Collection, CollectionDto, CollectionSummary};
use std::collections::HashMap;
use uuid::Uuid;

/// Create a new collection
pub async fn create(dto: CollectionDto) -> anyhow::Result<Uuid> {
    let mut aggregate = Collection::new_for_insert(dto.name);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// All collections with their clothes embedded, for the listing table
pub async fn list_summaries() -> anyhow::Result<Vec<CollectionSummary>> {
    let collections = repository::list_all().await?;
    let all_clothes = clothes::repository::list_all().await?;

    let mut by_collection: HashMap<String, Vec<Clothes>> = HashMap::new();
    for item in all_clothes {
        by_collection
            .entry(item.collection_id.value().to_string())
            .or_default()
            .push(item);
    }

    Ok(collections
        .into_iter()
        .map(|c| {
            let clothes = by_collection
                .remove(&c.id.value().to_string())
                .unwrap_or_default();
            CollectionSummary {
                id: c.id,
                name: c.name,
                clothes,
            }
        })
        .collect())
}

/// One collection with its clothes, for the detail page
pub async fn get_summary(id: Uuid) -> anyhow::Result<Option<CollectionSummary>> {
    let Some(collection) = repository::get_by_id(id).await? else {
        return Ok(None);
    };
    let clothes = clothes::repository::list_by_collection(id).await?;
    Ok(Some(CollectionSummary {
        id: collection.id,
        name: collection.name,
        clothes,
    }))
}

/// Soft delete a collection
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

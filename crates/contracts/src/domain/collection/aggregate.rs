use crate::domain::clothes::aggregate::Clothes;
use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionId(pub Uuid);

impl CollectionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CollectionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CollectionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A named grouping of clothing variants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub metadata: EntityMetadata,
}

impl Collection {
    /// Create a new collection for insertion into the database
    pub fn new_for_insert(name: String) -> Self {
        Self {
            id: CollectionId::new_v4(),
            name,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Collection name must not be empty".into());
        }
        Ok(())
    }

    /// Hook before persisting
    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating a collection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CollectionDto {
    pub id: Option<String>,
    pub name: String,
}

/// A collection together with its clothes variants, as returned by the
/// listing and detail endpoints. The listing only consumes `clothes.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub id: CollectionId,
    pub name: String,
    pub clothes: Vec<Clothes>,
}

impl CollectionSummary {
    pub fn clothes_count(&self) -> usize {
        self.clothes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let collection = Collection::new_for_insert("   ".into());
        assert!(collection.validate().is_err());
    }

    #[test]
    fn summary_count_follows_clothes_len() {
        let summary = CollectionSummary {
            id: CollectionId::new_v4(),
            name: "Summer".into(),
            clothes: Vec::new(),
        };
        assert_eq!(summary.clothes_count(), 0);
    }
}

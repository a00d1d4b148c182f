use crate::domain::collection::aggregate::CollectionId;
use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::garment_size::GarmentSize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a clothes variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClothesId(pub Uuid);

impl ClothesId {
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

impl AggregateId for ClothesId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClothesId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Quantity available for one garment size within a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub size: GarmentSize,
    pub quantity: u32,
}

/// A single design+color+price combination with per-size stock.
///
/// Owned by exactly one collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clothes {
    pub id: ClothesId,

    #[serde(rename = "collectionId")]
    pub collection_id: CollectionId,

    pub design: String,
    pub color: String,
    pub price: f64,

    #[serde(rename = "imagePath")]
    pub image_path: Option<String>,

    pub stock: Vec<StockEntry>,

    pub metadata: EntityMetadata,
}

impl Clothes {
    /// Create a new variant for insertion into the database
    pub fn new_for_insert(
        collection_id: CollectionId,
        payload: NewClothes,
        image_path: Option<String>,
    ) -> Self {
        Self {
            id: ClothesId::new_v4(),
            collection_id,
            design: payload.design,
            color: payload.color,
            price: payload.price,
            image_path,
            stock: payload.stock,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Units on hand across all sizes
    pub fn total_stock(&self) -> u32 {
        self.stock.iter().map(|s| s.quantity).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.design.trim().is_empty() {
            return Err("Design name must not be empty".into());
        }
        if self.color.trim().is_empty() {
            return Err("Color must not be empty".into());
        }
        if !(self.price > 0.0) {
            return Err("Price must be a positive number".into());
        }
        // One stock entry per known size, in enumeration order.
        if self.stock.len() != GarmentSize::ALL.len() {
            return Err("Stock must cover every garment size".into());
        }
        for (entry, expected) in self.stock.iter().zip(GarmentSize::ALL) {
            if entry.size != expected {
                return Err(format!(
                    "Stock entries out of order: expected size {}, found {}",
                    expected, entry.size
                ));
            }
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

/// Submission payload for a new clothes variant. Built fresh per attempt;
/// price and quantities are already numeric by the time this exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClothes {
    pub design: String,
    pub color: String,
    pub price: f64,
    pub stock: Vec<StockEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_stock() -> Vec<StockEntry> {
        GarmentSize::ALL
            .iter()
            .map(|&size| StockEntry { size, quantity: 3 })
            .collect()
    }

    fn valid_payload() -> NewClothes {
        NewClothes {
            design: "Test Shirt".into(),
            color: "Red".into(),
            price: 100.0,
            stock: full_stock(),
        }
    }

    #[test]
    fn valid_variant_passes() {
        let clothes =
            Clothes::new_for_insert(CollectionId::new_v4(), valid_payload(), None);
        assert!(clothes.validate().is_ok());
        assert_eq!(clothes.total_stock(), 18);
    }

    #[test]
    fn missing_size_is_rejected() {
        let mut payload = valid_payload();
        payload.stock.pop();
        let clothes = Clothes::new_for_insert(CollectionId::new_v4(), payload, None);
        assert!(clothes.validate().is_err());
    }

    #[test]
    fn out_of_order_stock_is_rejected() {
        let mut payload = valid_payload();
        payload.stock.swap(0, 1);
        let clothes = Clothes::new_for_insert(CollectionId::new_v4(), payload, None);
        assert!(clothes.validate().is_err());
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let mut payload = valid_payload();
        payload.price = 0.0;
        let clothes = Clothes::new_for_insert(CollectionId::new_v4(), payload, None);
        assert!(clothes.validate().is_err());
    }
}

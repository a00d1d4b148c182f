use chrono::Utc;
use contracts::domain::clothes::aggregate::{Clothes, ClothesId, StockEntry};
use contracts::domain::collection::aggregate::CollectionId;
use contracts::domain::common::EntityMetadata;
use contracts::enums::garment_size::GarmentSize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clothes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub collection_id: String,
    pub design: String,
    pub color: String,
    pub price: f64,
    pub image_path: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Per-size stock rows, one per garment size for every variant
pub mod stock {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "clothes_stock")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub clothes_id: String,
        #[sea_orm(primary_key, auto_increment = false)]
        pub size: String,
        pub quantity: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn size_rank(size: GarmentSize) -> usize {
    GarmentSize::ALL
        .iter()
        .position(|&s| s == size)
        .unwrap_or(usize::MAX)
}

fn to_aggregate(m: Model, mut stock_entries: Vec<StockEntry>) -> Clothes {
    let metadata = EntityMetadata {
        created_at: m.created_at.unwrap_or_else(Utc::now),
        updated_at: m.updated_at.unwrap_or_else(Utc::now),
        is_deleted: m.is_deleted,
        version: m.version,
    };
    let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
    let collection_uuid = Uuid::parse_str(&m.collection_id).unwrap_or_else(|_| Uuid::new_v4());

    // Stock is stored row-per-size; restore enumeration order for the wire.
    stock_entries.sort_by_key(|entry| size_rank(entry.size));

    Clothes {
        id: ClothesId(uuid),
        collection_id: CollectionId(collection_uuid),
        design: m.design,
        color: m.color,
        price: m.price,
        image_path: m.image_path,
        stock: stock_entries,
        metadata,
    }
}

fn stock_entry_from_row(row: &stock::Model) -> Option<StockEntry> {
    let size = GarmentSize::from_code(&row.size)?;
    Some(StockEntry {
        size,
        quantity: row.quantity.max(0) as u32,
    })
}

/// Load stock rows for a set of variants, grouped by clothes id
async fn load_stock(ids: Vec<String>) -> anyhow::Result<HashMap<String, Vec<StockEntry>>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = stock::Entity::find()
        .filter(stock::Column::ClothesId.is_in(ids))
        .all(conn())
        .await?;

    let mut grouped: HashMap<String, Vec<StockEntry>> = HashMap::new();
    for row in rows {
        if let Some(entry) = stock_entry_from_row(&row) {
            grouped.entry(row.clothes_id.clone()).or_default().push(entry);
        }
    }
    Ok(grouped)
}

async fn assemble(models: Vec<Model>) -> anyhow::Result<Vec<Clothes>> {
    let ids: Vec<String> = models.iter().map(|m| m.id.clone()).collect();
    let mut stock_by_id = load_stock(ids).await?;

    Ok(models
        .into_iter()
        .map(|m| {
            let entries = stock_by_id.remove(&m.id).unwrap_or_default();
            to_aggregate(m, entries)
        })
        .collect())
}

/// All live variants across every collection
pub async fn list_all() -> anyhow::Result<Vec<Clothes>> {
    let models = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?;
    assemble(models).await
}

pub async fn list_by_collection(collection_id: Uuid) -> anyhow::Result<Vec<Clothes>> {
    let models = Entity::find()
        .filter(Column::CollectionId.eq(collection_id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?;
    assemble(models).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Clothes>> {
    let model = Entity::find_by_id(id.to_string()).one(conn()).await?;
    match model {
        Some(m) => Ok(assemble(vec![m]).await?.into_iter().next()),
        None => Ok(None),
    }
}

/// True when a live variant with the same design and color already exists
/// in the collection
pub async fn exists_design_color(
    collection_id: Uuid,
    design: &str,
    color: &str,
) -> anyhow::Result<bool> {
    let found = Entity::find()
        .filter(Column::CollectionId.eq(collection_id.to_string()))
        .filter(Column::Design.eq(design))
        .filter(Column::Color.eq(color))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(found.is_some())
}

pub async fn insert(aggregate: &Clothes) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        collection_id: Set(aggregate.collection_id.value().to_string()),
        design: Set(aggregate.design.clone()),
        color: Set(aggregate.color.clone()),
        price: Set(aggregate.price),
        image_path: Set(aggregate.image_path.clone()),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;

    let stock_rows: Vec<stock::ActiveModel> = aggregate
        .stock
        .iter()
        .map(|entry| stock::ActiveModel {
            clothes_id: Set(uuid.to_string()),
            size: Set(entry.size.code().to_string()),
            quantity: Set(entry.quantity as i32),
        })
        .collect();
    if !stock_rows.is_empty() {
        stock::Entity::insert_many(stock_rows).exec(conn()).await?;
    }

    Ok(uuid)
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

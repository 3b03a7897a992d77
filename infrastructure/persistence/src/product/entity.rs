use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::value_objects::StorageUnit;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub expiry_date: String,
    pub unit: String,
    pub category: Option<String>,
    pub barcode: Option<String>,
    pub location: Option<String>,
    pub current_quantity: Option<i32>,
    pub minimum_quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        let unit = self.unit.parse::<StorageUnit>().ok();
        if unit.is_none() {
            tracing::warn!(
                "Product {} has unknown unit '{}', it will not match any unit filter",
                self.id,
                self.unit
            );
        }

        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.image_url,
            self.expiry_date,
            unit,
            self.category,
            self.barcode,
            self.location,
            self.current_quantity.map(|q| q.max(0) as u32),
            self.minimum_quantity.max(0) as u32,
            self.created_at,
            self.updated_at,
        )
    }
}

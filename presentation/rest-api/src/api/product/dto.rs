use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::StorageUnit;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum StorageUnitDto {
    #[oai(rename = "shelves")]
    Shelves,
    #[oai(rename = "fridges")]
    Fridges,
    #[oai(rename = "warehouse")]
    Warehouse,
    #[oai(rename = "snacks")]
    Snacks,
}

impl From<StorageUnit> for StorageUnitDto {
    fn from(unit: StorageUnit) -> Self {
        match unit {
            StorageUnit::Shelves => StorageUnitDto::Shelves,
            StorageUnit::Fridges => StorageUnitDto::Fridges,
            StorageUnit::Warehouse => StorageUnitDto::Warehouse,
            StorageUnit::Snacks => StorageUnitDto::Snacks,
        }
    }
}

impl From<StorageUnitDto> for StorageUnit {
    fn from(dto: StorageUnitDto) -> Self {
        match dto {
            StorageUnitDto::Shelves => StorageUnit::Shelves,
            StorageUnitDto::Fridges => StorageUnit::Fridges,
            StorageUnitDto::Warehouse => StorageUnit::Warehouse,
            StorageUnitDto::Snacks => StorageUnit::Snacks,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Reference to an already uploaded image
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Expiry date, `YYYY-MM-DD`
    pub expiry_date: String,
    /// Storage unit (defaults to shelves)
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<StorageUnitDto>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub barcode: Option<String>,
    /// Shelf or bay code
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub current_quantity: Option<u32>,
    /// Restock threshold (defaults to 0)
    #[oai(skip_serializing_if_is_none)]
    pub minimum_quantity: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Expiry date, `YYYY-MM-DD`
    pub expiry_date: String,
    pub unit: StorageUnitDto,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub barcode: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub current_quantity: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub minimum_quantity: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Expiry date as stored
    pub expiry_date: String,
    /// Absent when the stored unit is not a known storage unit
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<StorageUnitDto>,
    /// Display label of the storage unit
    #[oai(skip_serializing_if_is_none)]
    pub unit_label: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub barcode: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub current_quantity: Option<u32>,
    pub minimum_quantity: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            image_url: product.image_url,
            expiry_date: product.expiry_date,
            unit: product.unit.map(Into::into),
            unit_label: product.unit.map(|unit| unit.label().to_string()),
            category: product.category,
            barcode: product.barcode,
            location: product.location,
            current_quantity: product.current_quantity,
            minimum_quantity: product.minimum_quantity,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

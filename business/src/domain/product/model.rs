use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::StorageUnit;
use crate::domain::expiry::classifier::parse_expiry_date;
use crate::domain::expiry::errors::ExpiryError;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// ISO `YYYY-MM-DD` as stored. Parsed on demand, see [`Product::parsed_expiry_date`].
    pub expiry_date: String,
    /// `None` when the stored unit is outside the known vocabulary.
    pub unit: Option<StorageUnit>,
    pub category: Option<String>,
    pub barcode: Option<String>,
    pub location: Option<String>,
    pub current_quantity: Option<u32>,
    pub minimum_quantity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub expiry_date: String,
    pub unit: StorageUnit,
    pub category: Option<String>,
    pub barcode: Option<String>,
    pub location: Option<String>,
    pub current_quantity: Option<u32>,
    pub minimum_quantity: u32,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let expiry_date = validate(&props.name, &props.expiry_date)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name.trim().to_string(),
            description: non_blank(props.description),
            image_url: non_blank(props.image_url),
            expiry_date: expiry_date.format("%Y-%m-%d").to_string(),
            unit: Some(props.unit),
            category: non_blank(props.category),
            barcode: non_blank(props.barcode),
            location: non_blank(props.location),
            current_quantity: props.current_quantity,
            minimum_quantity: props.minimum_quantity,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        image_url: Option<String>,
        expiry_date: String,
        unit: Option<StorageUnit>,
        category: Option<String>,
        barcode: Option<String>,
        location: Option<String>,
        current_quantity: Option<u32>,
        minimum_quantity: u32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            image_url,
            expiry_date,
            unit,
            category,
            barcode,
            location,
            current_quantity,
            minimum_quantity,
            created_at,
            updated_at,
        }
    }

    /// Applies an edit, keeping identity and creation time.
    pub fn apply(&self, props: NewProductProps) -> Result<Self, ProductError> {
        let mut updated = Product::new(props)?;
        updated.id = self.id;
        updated.created_at = self.created_at;
        Ok(updated)
    }

    pub fn parsed_expiry_date(&self) -> Result<NaiveDate, ExpiryError> {
        parse_expiry_date(&self.expiry_date)
    }
}

fn validate(name: &str, expiry_date: &str) -> Result<NaiveDate, ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    parse_expiry_date(expiry_date).map_err(|_| ProductError::InvalidExpiryDate)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::expiry::classifier::ExpiryLevel;
use business::domain::expiry::filter::{ClassifiedProduct, ProductSelection, StatusSummary};

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ExpiryLevelDto {
    #[oai(rename = "good")]
    Good,
    #[oai(rename = "expiring_soon")]
    ExpiringSoon,
    #[oai(rename = "expired")]
    Expired,
}

impl From<ExpiryLevel> for ExpiryLevelDto {
    fn from(level: ExpiryLevel) -> Self {
        match level {
            ExpiryLevel::Good => ExpiryLevelDto::Good,
            ExpiryLevel::ExpiringSoon => ExpiryLevelDto::ExpiringSoon,
            ExpiryLevel::Expired => ExpiryLevelDto::Expired,
        }
    }
}

/// A product with its expiry status as of today.
#[derive(Debug, Clone, Object)]
pub struct ClassifiedProductResponse {
    pub product: ProductResponse,
    pub status: ExpiryLevelDto,
    /// Whole days until expiry, negative once expired
    pub days_remaining: i64,
}

impl From<ClassifiedProduct> for ClassifiedProductResponse {
    fn from(classified: ClassifiedProduct) -> Self {
        Self {
            product: classified.product.into(),
            status: classified.status.level.into(),
            days_remaining: classified.status.days_remaining,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    pub products: Vec<ClassifiedProductResponse>,
    /// Ids of products left out because their expiry date could not be read
    pub skipped: Vec<String>,
}

impl From<ProductSelection> for ProductListResponse {
    fn from(selection: ProductSelection) -> Self {
        Self {
            products: selection.products.into_iter().map(Into::into).collect(),
            skipped: selection.skipped.iter().map(|id| id.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ExpirySummaryResponse {
    pub expired: u64,
    pub expiring_soon: u64,
    pub skipped: Vec<String>,
}

impl From<StatusSummary> for ExpirySummaryResponse {
    fn from(summary: StatusSummary) -> Self {
        Self {
            expired: summary.expired as u64,
            expiring_soon: summary.expiring_soon as u64,
            skipped: summary.skipped.iter().map(|id| id.to_string()).collect(),
        }
    }
}

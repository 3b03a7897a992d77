use uuid::Uuid;

/// Errors raised while classifying expiry dates.
#[derive(Debug, thiserror::Error)]
pub enum ExpiryError {
    #[error("expiry.invalid_date")]
    InvalidDate(String),
    #[error("expiry.invalid_product_date")]
    InvalidProductDate { product_id: Uuid, value: String },
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

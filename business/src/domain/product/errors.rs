#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.invalid_expiry_date")]
    InvalidExpiryDate,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

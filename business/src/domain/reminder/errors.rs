#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    #[error("reminder.invalid_date")]
    InvalidDate(String),
    #[error("reminder.invalid_offset")]
    InvalidOffset(i64),
    #[error("reminder.product_not_found")]
    ProductNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str = "id, name, description, image_url, expiry_date, unit, category, barcode, location, current_quantity, minimum_quantity, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_db_quantity(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM products ORDER BY expiry_date ASC, created_at ASC",
            PRODUCT_COLUMNS
        );
        let entities = sqlx::query_as::<_, ProductEntity>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load products: {}", e);
                RepositoryError::DatabaseError
            })?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let query = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
        let entity = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, description, image_url, expiry_date, unit, category, barcode, location, current_quantity, minimum_quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'shelves'), $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                image_url = EXCLUDED.image_url,
                expiry_date = EXCLUDED.expiry_date,
                unit = COALESCE($6, products.unit),
                category = EXCLUDED.category,
                barcode = EXCLUDED.barcode,
                location = EXCLUDED.location,
                current_quantity = EXCLUDED.current_quantity,
                minimum_quantity = EXCLUDED.minimum_quantity,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image_url)
        .bind(&product.expiry_date)
        .bind(product.unit.map(|unit| unit.as_str()))
        .bind(&product.category)
        .bind(&product.barcode)
        .bind(&product.location)
        .bind(product.current_quantity.map(to_db_quantity))
        .bind(to_db_quantity(product.minimum_quantity))
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save product {}: {}", product.id, e);
            RepositoryError::Persistence
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

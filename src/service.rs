use std::num::IntErrorKind;

use sqlx::SqlitePool;
use tracing::info;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::{CreateItemInput, Item};

/// List / create / delete over the `items` table. Holds nothing but the pool
/// it was built with, so each instance can point at its own database.
#[derive(Debug, Clone)]
pub struct ItemService {
    pool: SqlitePool,
}

impl ItemService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Round-trips a trivial query so health checks reflect the database.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        db::ping(&self.pool).await
    }

    /// All items, newest first.
    pub async fn list(&self) -> AppResult<Vec<Item>> {
        db::fetch_all_items(&self.pool)
            .await
            .map_err(AppError::storage("fetch items"))
    }

    pub async fn create(&self, input: CreateItemInput) -> AppResult<Item> {
        let new_item = input.validate()?;

        let item = db::insert_item(&self.pool, &new_item)
            .await
            .map_err(AppError::storage("create item"))?;

        info!(id = item.id, name = %item.name, "Created item");
        Ok(item)
    }

    /// `id` is the raw path segment; it must parse as an integer. An integer
    /// too large for a row id cannot match anything, so it is not found.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id: i64 = id.trim().parse().map_err(|err: std::num::ParseIntError| {
            match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    AppError::NotFound("Item not found".to_string())
                }
                _ => AppError::Validation("Invalid item ID".to_string()),
            }
        })?;

        let removed = db::delete_item(&self.pool, id)
            .await
            .map_err(AppError::storage("delete item"))?;

        if !removed {
            return Err(AppError::NotFound("Item not found".to_string()));
        }

        info!(id, "Deleted item");
        Ok(())
    }
}

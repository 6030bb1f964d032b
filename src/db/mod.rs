use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::models::{Item, NewItem};

/// Opens the pool. An in-memory database lives only as long as its
/// connection, so those URLs get a single connection that never expires.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    pool_options.connect_with(options).await
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Creates the `items` table if it does not exist yet. Safe to run on every start.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT    NOT NULL,
            quantity    INTEGER NOT NULL CHECK (quantity >= 0),
            price       REAL    NOT NULL CHECK (price >= 0),
            description TEXT    NOT NULL DEFAULT '',
            created_at  TEXT    NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

// ── Items ─────────────────────────────────────────────────────────────────────

pub async fn fetch_all_items(pool: &SqlitePool) -> Result<Vec<Item>, sqlx::Error> {
    sqlx::query_as::<_, Item>(
        "SELECT id, name, quantity, price, description, created_at
         FROM items ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn insert_item(pool: &SqlitePool, item: &NewItem) -> Result<Item, sqlx::Error> {
    sqlx::query_as::<_, Item>(
        r#"
        INSERT INTO items (name, quantity, price, description)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, quantity, price, description, created_at
        "#,
    )
    .bind(&item.name)
    .bind(item.quantity)
    .bind(item.price)
    .bind(&item.description)
    .fetch_one(pool)
    .await
}

/// Returns `false` when no row had that id.
pub async fn delete_item(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_items(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> SqlitePool {
        let pool = connect("sqlite::memory:", 5).await.unwrap();
        init_schema(&pool).await.unwrap();
        pool
    }

    fn new_item(name: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            quantity: 4,
            price: 2.5,
            description: String::new(),
        }
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:items?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://inventory.db?mode=rwc"));
    }

    #[tokio::test]
    async fn schema_init_is_idempotent() {
        let pool = memory_pool().await;
        init_schema(&pool).await.unwrap();
        assert_eq!(count_items(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_returns_stored_row() {
        let pool = memory_pool().await;
        let item = insert_item(&pool, &new_item("Hammer")).await.unwrap();

        assert!(item.id > 0);
        assert_eq!(item.name, "Hammer");
        assert_eq!(item.quantity, 4);
        assert_eq!(item.price, 2.5);
        assert_eq!(item.description, "");
        assert_eq!(count_items(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let pool = memory_pool().await;
        for name in ["first", "second", "third"] {
            insert_item(&pool, &new_item(name)).await.unwrap();
        }

        let names: Vec<String> = fetch_all_items(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let pool = memory_pool().await;
        let item = insert_item(&pool, &new_item("Saw")).await.unwrap();

        assert!(delete_item(&pool, item.id).await.unwrap());
        assert!(!delete_item(&pool, item.id).await.unwrap());
        assert_eq!(count_items(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn check_constraints_reject_negative_values() {
        let pool = memory_pool().await;
        let mut bad = new_item("Broken");
        bad.quantity = -1;
        assert!(insert_item(&pool, &bad).await.is_err());
    }
}

use sqlx::SqlitePool;
use tracing::info;

use crate::db;
use crate::models::NewItem;

/// (name, quantity, price, description)
static SAMPLE_ITEMS: &[(&str, i64, f64, &str)] = &[
    ("Laptop", 15, 999.99, "14-inch ultrabook with 16GB RAM"),
    ("Wireless Mouse", 120, 24.99, "Ergonomic 2.4GHz mouse"),
    ("Mechanical Keyboard", 45, 89.5, "Tenkeyless, brown switches"),
    ("USB-C Hub", 80, 34.0, "7-in-1 adapter with HDMI"),
    ("Monitor Stand", 30, 45.75, "Adjustable aluminium riser"),
    ("Desk Lamp", 60, 19.99, "LED lamp with dimmer"),
    ("Office Chair", 12, 249.0, "Mesh back with lumbar support"),
    ("Notebook", 300, 3.49, "A5 dotted, 120 pages"),
    ("Webcam", 25, 59.99, "1080p with built-in microphone"),
    ("Headphones", 40, 129.0, ""),
];

/// Inserts the sample rows, but only into an empty table.
/// Returns how many rows were written.
pub async fn seed_sample_items(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let existing = db::count_items(pool).await?;
    if existing > 0 {
        info!(existing, "Items table already populated; skipping seed.");
        return Ok(0);
    }

    for &(name, quantity, price, description) in SAMPLE_ITEMS {
        let item = NewItem {
            name: name.to_string(),
            quantity,
            price,
            description: description.to_string(),
        };
        db::insert_item(pool, &item).await?;
    }

    info!("Seeded {} sample items.", SAMPLE_ITEMS.len());
    Ok(SAMPLE_ITEMS.len())
}

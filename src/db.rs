use anyhow::Context;
use sqlx::SqlitePool;
use tracing::info;

use crate::auth::password::hash_password;
use crate::auth::repo::User;

/// Creates all tables if they are absent. Safe to run on every startup.
pub async fn ensure_schema(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sales_data (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            label TEXT NOT NULL,
            value REAL NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_growth_data (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            label TEXT NOT NULL,
            value INTEGER NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS category_data (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            label TEXT NOT NULL,
            value REAL NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS report_data (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            status TEXT NOT NULL,
            date TEXT NOT NULL,
            size TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    Ok(())
}

const SALES: [(&str, f64); 6] = [
    ("Enero", 45000.0),
    ("Febrero", 52000.0),
    ("Marzo", 48000.0),
    ("Abril", 61000.0),
    ("Mayo", 55000.0),
    ("Junio", 67000.0),
];

const USER_GROWTH: [(&str, i64); 6] = [
    ("Enero", 1200),
    ("Febrero", 1350),
    ("Marzo", 1180),
    ("Abril", 1420),
    ("Mayo", 1380),
    ("Junio", 1520),
];

const CATEGORIES: [(&str, f64); 5] = [
    ("Tecnología", 35.0),
    ("Ropa", 25.0),
    ("Hogar", 20.0),
    ("Deportes", 15.0),
    ("Otros", 5.0),
];

const REPORTS: [(&str, &str, &str, &str, &str); 5] = [
    ("Reporte de Ventas Q1", "PDF", "Completado", "2024-03-15", "2.3 MB"),
    ("Análisis de Usuarios", "Excel", "Pendiente", "2024-03-20", "1.8 MB"),
    ("Métricas de Conversión", "PDF", "Completado", "2024-03-18", "3.1 MB"),
    ("Reporte Financiero", "PDF", "En Proceso", "2024-03-22", "4.2 MB"),
    ("Análisis de Categorías", "Excel", "Completado", "2024-03-16", "2.7 MB"),
];

/// One-time population with fixed demo values: a demo credential plus six
/// months of sales/growth figures, five categories and five reports.
/// Re-running is a no-op once data exists.
pub async fn seed_demo_data(db: &SqlitePool) -> anyhow::Result<()> {
    if User::find_by_username(db, "demo").await?.is_none() {
        let hash = hash_password("demo123").context("hash demo password")?;
        User::create(db, "demo", "demo@example.com", &hash).await?;
        info!("seeded demo user");
    }

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales_data")
        .fetch_one(db)
        .await?;
    if existing > 0 {
        return Ok(());
    }

    for (label, value) in SALES {
        sqlx::query("INSERT INTO sales_data (label, value) VALUES (?, ?)")
            .bind(label)
            .bind(value)
            .execute(db)
            .await?;
    }
    for (label, value) in USER_GROWTH {
        sqlx::query("INSERT INTO user_growth_data (label, value) VALUES (?, ?)")
            .bind(label)
            .bind(value)
            .execute(db)
            .await?;
    }
    for (label, value) in CATEGORIES {
        sqlx::query("INSERT INTO category_data (label, value) VALUES (?, ?)")
            .bind(label)
            .bind(value)
            .execute(db)
            .await?;
    }
    for (name, type_, status, date, size) in REPORTS {
        sqlx::query(
            "INSERT INTO report_data (name, type, status, date, size) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(type_)
        .bind(status)
        .bind(date)
        .bind(size)
        .execute(db)
        .await?;
    }

    info!("seeded sample metrics");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    use sqlx::sqlite::SqlitePoolOptions;

    // Single connection so the in-memory database survives across queries.
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool")
}

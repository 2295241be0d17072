use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Labelled numeric sample; used for both sales and category collections.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

/// Monthly user count. Integer-valued, unlike sales/categories.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GrowthPoint {
    pub label: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportItem {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub report_type: String,
    pub status: String,
    pub date: String,
    pub size: String,
}

// All four collections are read-only after seeding; listings keep
// insertion order.

pub async fn list_sales(db: &SqlitePool) -> anyhow::Result<Vec<DataPoint>> {
    let rows = sqlx::query_as::<_, DataPoint>("SELECT label, value FROM sales_data ORDER BY id")
        .fetch_all(db)
        .await?;
    Ok(rows)
}

pub async fn list_user_growth(db: &SqlitePool) -> anyhow::Result<Vec<GrowthPoint>> {
    let rows =
        sqlx::query_as::<_, GrowthPoint>("SELECT label, value FROM user_growth_data ORDER BY id")
            .fetch_all(db)
            .await?;
    Ok(rows)
}

pub async fn list_categories(db: &SqlitePool) -> anyhow::Result<Vec<DataPoint>> {
    let rows = sqlx::query_as::<_, DataPoint>("SELECT label, value FROM category_data ORDER BY id")
        .fetch_all(db)
        .await?;
    Ok(rows)
}

pub async fn list_reports(db: &SqlitePool) -> anyhow::Result<Vec<ReportItem>> {
    let rows = sqlx::query_as::<_, ReportItem>(
        "SELECT id, name, type, status, date, size FROM report_data ORDER BY id",
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_schema, seed_demo_data, test_pool};

    #[tokio::test]
    async fn listings_preserve_insertion_order() {
        let db = test_pool().await;
        ensure_schema(&db).await.unwrap();
        seed_demo_data(&db).await.unwrap();

        let sales = list_sales(&db).await.unwrap();
        assert_eq!(sales.len(), 6);
        assert_eq!(sales[0].label, "Enero");
        assert_eq!(sales[5].label, "Junio");
        assert_eq!(sales[5].value, 67000.0);

        let growth = list_user_growth(&db).await.unwrap();
        assert_eq!(growth.len(), 6);
        assert_eq!(growth[3].value, 1420);

        let categories = list_categories(&db).await.unwrap();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0].label, "Tecnología");

        let reports = list_reports(&db).await.unwrap();
        assert_eq!(reports.len(), 5);
        assert_eq!(reports[0].name, "Reporte de Ventas Q1");
        assert_eq!(reports[3].status, "En Proceso");
    }

    #[test]
    fn report_item_serializes_type_key() {
        let item = ReportItem {
            id: 1,
            name: "r".into(),
            report_type: "PDF".into(),
            status: "Completado".into(),
            date: "2024-03-15".into(),
            size: "2.3 MB".into(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "PDF");
        assert!(json.get("report_type").is_none());
    }
}

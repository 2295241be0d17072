use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

/// Credential record. Never updated or deleted once created.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_username(db: &SqlitePool, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Register pre-check: a credential matching either field blocks signup.
    pub async fn find_by_username_or_email(
        db: &SqlitePool,
        username: &str,
        email: &str,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM users
            WHERE username = ? OR email = ?
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn create(
        db: &SqlitePool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, username, email, password_hash, is_active, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_schema, test_pool};

    #[tokio::test]
    async fn create_and_find_by_username() {
        let db = test_pool().await;
        ensure_schema(&db).await.unwrap();

        let created = User::create(&db, "alice", "alice@example.com", "hash")
            .await
            .expect("create");
        assert_eq!(created.is_active, 1);

        let found = User::find_by_username(&db, "alice")
            .await
            .unwrap()
            .expect("present");
        assert_eq!(found.id, created.id);
        assert_eq!(found.email, "alice@example.com");

        assert!(User::find_by_username(&db, "bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_username_or_email_matches_either() {
        let db = test_pool().await;
        ensure_schema(&db).await.unwrap();
        User::create(&db, "alice", "alice@example.com", "hash")
            .await
            .unwrap();

        let by_name = User::find_by_username_or_email(&db, "alice", "other@example.com")
            .await
            .unwrap();
        assert!(by_name.is_some());

        let by_email = User::find_by_username_or_email(&db, "other", "alice@example.com")
            .await
            .unwrap();
        assert!(by_email.is_some());

        let neither = User::find_by_username_or_email(&db, "other", "other@example.com")
            .await
            .unwrap();
        assert!(neither.is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_a_unique_violation() {
        let db = test_pool().await;
        ensure_schema(&db).await.unwrap();
        User::create(&db, "alice", "alice@example.com", "hash")
            .await
            .unwrap();

        let err = User::create(&db, "alice", "second@example.com", "hash")
            .await
            .unwrap_err();
        match err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("expected database error, got {other:?}"),
        }
    }
}

//! Like counter repository.
//!
//! The like counter is a single persisted row with get-or-create semantics.
//! Both operations are single upsert statements, so concurrent requests
//! serialize on the row and no increment is ever lost.

use sqlx::PgPool;

use super::RepositoryError;

/// Fixed ID of the singleton counter row.
const COUNTER_ROW_ID: i32 = 1;

/// Repository for the persisted like counter.
pub struct LikeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LikeRepository<'a> {
    /// Create a new like repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Atomically increment the counter and return the new count.
    ///
    /// Creates the row at count 1 if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn increment(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar(
            "INSERT INTO like_counter (id, count) VALUES ($1, 1)
             ON CONFLICT (id) DO UPDATE SET count = like_counter.count + 1
             RETURNING count",
        )
        .bind(COUNTER_ROW_ID)
        .fetch_one(self.pool)
        .await?;

        validate_count(count)
    }

    /// Read the current count without incrementing.
    ///
    /// Creates the row at count 0 if it does not exist yet, so a fresh
    /// counter reads as 0. The common path is a plain `SELECT`; only a
    /// miss inserts, so reads do not take a row lock.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT count FROM like_counter WHERE id = $1")
                .bind(COUNTER_ROW_ID)
                .fetch_optional(self.pool)
                .await?;

        if let Some(count) = existing {
            return validate_count(count);
        }

        // First read ever: create the row at 0. A concurrent creator wins
        // the conflict and the counter still reads as 0.
        sqlx::query("INSERT INTO like_counter (id, count) VALUES ($1, 0) ON CONFLICT (id) DO NOTHING")
            .bind(COUNTER_ROW_ID)
            .execute(self.pool)
            .await?;

        Ok(0)
    }
}

/// Reject counts the schema constraint should already have ruled out.
fn validate_count(count: i64) -> Result<i64, RepositoryError> {
    if count < 0 {
        return Err(RepositoryError::DataCorruption(format!(
            "like counter is negative: {count}"
        )));
    }
    Ok(count)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::MIGRATOR;

    #[test]
    fn test_validate_count_accepts_zero() {
        assert_eq!(validate_count(0).unwrap(), 0);
        assert_eq!(validate_count(41).unwrap(), 41);
    }

    #[test]
    fn test_validate_count_rejects_negative() {
        let err = validate_count(-1).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }

    /// End-to-end counter semantics against a real database.
    ///
    /// Skipped unless `TEST_DATABASE_URL` points at a disposable
    /// `PostgreSQL` instance.
    #[tokio::test]
    async fn test_counter_semantics_with_database() {
        let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
            return;
        };
        let pool = PgPool::connect(&url).await.unwrap();
        MIGRATOR.run(&pool).await.unwrap();
        sqlx::query("DELETE FROM like_counter")
            .execute(&pool)
            .await
            .unwrap();

        let repo = LikeRepository::new(&pool);

        // Fresh counter: first increment returns 1, reads do not mutate.
        assert_eq!(repo.increment().await.unwrap(), 1);
        assert_eq!(repo.increment().await.unwrap(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);

        // Concurrent increments serialize on the row; none are lost.
        let tasks: Vec<_> = (0..10)
            .map(|_| {
                let pool = pool.clone();
                tokio::spawn(async move { LikeRepository::new(&pool).increment().await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(repo.count().await.unwrap(), 12);

        // Fresh counter reads as 0 without an increment; repeated reads
        // stay at 0 and the first increment afterwards still returns 1.
        sqlx::query("DELETE FROM like_counter")
            .execute(&pool)
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(repo.increment().await.unwrap(), 1);
    }
}

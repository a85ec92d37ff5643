use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error};

use super::Db;
use crate::error::StoreError;
use crate::models::Course;

/// Deadline applied to each store call on its own.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(3);

#[async_trait]
pub trait CourseStore: Send + Sync {
    /// All courses in storage order.
    async fn list(&self) -> Result<Vec<Course>, StoreError>;
    /// Returns the id of the created course.
    async fn insert(&self, course: &Course) -> Result<i64, StoreError>;
    async fn get(&self, id: i64) -> Result<Option<Course>, StoreError>;
    /// Deleting an absent id is not an error.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct SqliteCourseStore {
    db: Db,
    timeout: Duration,
}

impl SqliteCourseStore {
    pub fn new(db: Db) -> Self {
        Self::with_timeout(db, QUERY_TIMEOUT)
    }

    pub fn with_timeout(db: Db, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                error!("{} failed: {}", op, e);
                Err(StoreError::Database(e))
            }
            Err(_) => {
                error!("{} timed out after {:?}", op, self.timeout);
                Err(StoreError::Timeout(self.timeout))
            }
        }
    }
}

#[async_trait]
impl CourseStore for SqliteCourseStore {
    async fn list(&self) -> Result<Vec<Course>, StoreError> {
        let courses = self
            .bounded(
                "list courses",
                sqlx::query_as::<_, Course>(
                    "SELECT courseid, coursename, price, image_url FROM courseonline",
                )
                .fetch_all(&self.db),
            )
            .await?;
        debug!("listed {} courses", courses.len());
        Ok(courses)
    }

    async fn insert(&self, course: &Course) -> Result<i64, StoreError> {
        self.bounded(
            "insert course",
            sqlx::query(
                "INSERT INTO courseonline (courseid, coursename, price, image_url) VALUES (?, ?, ?, ?)",
            )
            .bind(course.course_id)
            .bind(&course.course_name)
            .bind(course.price)
            .bind(&course.image_url)
            .execute(&self.db),
        )
        .await?;

        // The key is client-supplied, so echo it back rather than the rowid.
        debug!("inserted course {}", course.course_id);
        Ok(course.course_id)
    }

    async fn get(&self, id: i64) -> Result<Option<Course>, StoreError> {
        self.bounded(
            "get course",
            sqlx::query_as::<_, Course>(
                "SELECT courseid, coursename, price, image_url FROM courseonline WHERE courseid = ?",
            )
            .bind(id)
            .fetch_optional(&self.db),
        )
        .await
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = self
            .bounded(
                "delete course",
                sqlx::query("DELETE FROM courseonline WHERE courseid = ?")
                    .bind(id)
                    .execute(&self.db),
            )
            .await?;
        debug!("deleted course {} ({} rows)", id, result.rows_affected());
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.bounded("ping", sqlx::query("SELECT 1").execute(&self.db))
            .await?;
        Ok(())
    }
}

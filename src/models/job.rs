use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    /// Stored file name under the uploads directory; empty when the
    /// listing was created without an image.
    pub image: String,
    pub city: String,
    pub country: String,
    pub remote: bool,
    pub job_type: String,
    pub description: String,
    pub user_id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

use crate::dto::job_dto::UpdateJobPayload;
use crate::error::{Error, Result};
use crate::models::job::Job;
use sqlx::PgPool;
use uuid::Uuid;

const JOB_COLUMNS: &str = "id, title, organization, image, city, country, remote, job_type, \
                           description, user_id, created_at, updated_at";

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 6;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total: i64,
}

pub struct NewJob {
    pub title: String,
    pub organization: String,
    pub image: String,
    pub city: String,
    pub country: String,
    pub remote: bool,
    pub job_type: String,
    pub description: String,
    pub user_id: Uuid,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One page of listings, all of them or only the owner's. Page and
    /// limit arrive unchecked from the query string; out-of-range
    /// values just produce an empty page, never an error.
    pub async fn list(
        &self,
        owner: Option<Uuid>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<JobPage> {
        let (limit, offset) = page_window(page, limit);

        let (jobs, total) = match owner {
            Some(user_id) => {
                let jobs = sqlx::query_as::<_, Job>(&format!(
                    "SELECT {} FROM jobs WHERE user_id = $1 LIMIT $2 OFFSET $3",
                    JOB_COLUMNS
                ))
                .bind(user_id)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                let total =
                    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs WHERE user_id = $1")
                        .bind(user_id)
                        .fetch_one(&self.pool)
                        .await?;
                (jobs, total)
            }
            None => {
                let jobs = sqlx::query_as::<_, Job>(&format!(
                    "SELECT {} FROM jobs LIMIT $1 OFFSET $2",
                    JOB_COLUMNS
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs")
                    .fetch_one(&self.pool)
                    .await?;
                (jobs, total)
            }
        };

        Ok(JobPage { jobs, total })
    }

    pub async fn create(&self, new_job: NewJob) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "INSERT INTO jobs (title, organization, image, city, country, remote, job_type, \
             description, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {}",
            JOB_COLUMNS
        ))
        .bind(new_job.title)
        .bind(new_job.organization)
        .bind(new_job.image)
        .bind(new_job.city)
        .bind(new_job.country)
        .bind(new_job.remote)
        .bind(new_job.job_type)
        .bind(new_job.description)
        .bind(new_job.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "SELECT {} FROM jobs WHERE id = $1",
            JOB_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        job.ok_or_else(|| Error::NotFound("Job not found!".to_string()))
    }

    pub async fn update(&self, id: Uuid, payload: UpdateJobPayload) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "UPDATE jobs
             SET
                 title = COALESCE($2, title),
                 organization = COALESCE($3, organization),
                 image = COALESCE($4, image),
                 city = COALESCE($5, city),
                 country = COALESCE($6, country),
                 remote = COALESCE($7, remote),
                 job_type = COALESCE($8, job_type),
                 description = COALESCE($9, description),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            JOB_COLUMNS
        ))
        .bind(id)
        .bind(payload.title)
        .bind(payload.organization)
        .bind(payload.image)
        .bind(payload.city)
        .bind(payload.country)
        .bind(payload.remote)
        .bind(payload.job_type.map(|t| t.as_str().to_string()))
        .bind(payload.description)
        .fetch_optional(&self.pool)
        .await?;

        job.ok_or_else(|| Error::NotFound("Job not found!".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Job not found!".to_string()));
        }
        Ok(())
    }

    /// Cascade half of account deletion. Runs outside any transaction,
    /// same as the user delete that follows it.
    pub async fn delete_by_owner(&self, user_id: Uuid) -> Result<u64> {
        let res = sqlx::query("DELETE FROM jobs WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected())
    }
}

/// Turns the raw page/limit query values into a LIMIT/OFFSET pair the
/// store accepts. Values are floored at zero only so negative input
/// yields an empty slice instead of a query error.
fn page_window(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(DEFAULT_PAGE);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).max(0);
    let offset = page.saturating_sub(1).saturating_mul(limit).max(0);
    (limit, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_page_of_six() {
        assert_eq!(page_window(None, None), (6, 0));
    }

    #[test]
    fn later_pages_advance_the_offset() {
        assert_eq!(page_window(Some(3), Some(10)), (10, 20));
    }

    #[test]
    fn non_positive_input_never_produces_negative_bounds() {
        assert_eq!(page_window(Some(0), None), (6, 0));
        assert_eq!(page_window(Some(-5), Some(4)), (4, 0));
        assert_eq!(page_window(Some(2), Some(-1)), (0, 0));
    }

    #[test]
    fn absurd_pages_saturate_instead_of_overflowing() {
        let (limit, offset) = page_window(Some(i64::MAX), None);
        assert_eq!(limit, 6);
        assert_eq!(offset, i64::MAX);
    }
}

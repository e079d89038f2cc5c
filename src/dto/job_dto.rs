use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job::Job;

/// Listing job type. Stored as text, constrained to these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
        }
    }
}

impl std::str::FromStr for JobType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobResponse {
    pub message: String,
    pub job: Job,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub organization: Option<String>,
    pub image: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(length(min = 1))]
    pub country: Option<String>,
    pub remote: Option<bool>,
    pub job_type: Option<JobType>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn job_type_round_trips_through_kebab_case() {
        assert_eq!(JobType::from_str("full-time"), Ok(JobType::FullTime));
        assert_eq!(JobType::from_str("part-time"), Ok(JobType::PartTime));
        assert!(JobType::from_str("contract").is_err());

        let serialized = serde_json::to_string(&JobType::FullTime).unwrap();
        assert_eq!(serialized, "\"full-time\"");
    }
}

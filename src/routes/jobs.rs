use axum::{
    extract::{Multipart, Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_dto::{CreateJobResponse, JobListQuery, JobListResponse, JobType, UpdateJobPayload},
    error::{Error, Result},
    middleware::auth::bearer_claims,
    services::job_service::NewJob,
    utils::files::save_image_file,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("page" = Option<i64>, Query, description = "Page number, defaults to 1"),
        ("limit" = Option<i64>, Query, description = "Page size, defaults to 6")
    ),
    responses(
        (status = 200, description = "One page of jobs with the total count", body = Json<JobListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    // Anonymous callers browse everything; a valid bearer token narrows
    // the page to the caller's own listings.
    let owner = bearer_claims(&headers).and_then(|claims| Uuid::parse_str(&claims.sub).ok());

    let page = state.job_service.list(owner, query.page, query.limit).await?;
    Ok(Json(JobListResponse {
        jobs: page.jobs,
        total: page.total,
    }))
}

#[utoipa::path(
    get,
    path = "/api/job/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(id).await?;
    Ok(Json(job))
}

#[utoipa::path(
    post,
    path = "/api/newlisting",
    responses(
        (status = 200, description = "Job created", body = Json<CreateJobResponse>),
        (status = 400, description = "Missing or malformed owner identifier")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut title = String::new();
    let mut organization = String::new();
    let mut city = String::new();
    let mut country = String::new();
    let mut remote = false;
    let mut job_type = String::new();
    let mut description = String::new();
    let mut user_id = None;
    let mut image = String::new();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "title" => title = field.text().await.unwrap_or_default(),
            "organization" => organization = field.text().await.unwrap_or_default(),
            "city" => city = field.text().await.unwrap_or_default(),
            "country" => country = field.text().await.unwrap_or_default(),
            "remote" => {
                let value = field.text().await.unwrap_or_default();
                remote = matches!(value.as_str(), "yes" | "true");
            }
            "job_type" => job_type = field.text().await.unwrap_or_default(),
            "description" => description = field.text().await.unwrap_or_default(),
            "user_id" => {
                let raw = field.text().await.unwrap_or_default();
                user_id = Uuid::parse_str(&raw).ok();
            }
            "image" => {
                let filename = field.file_name().unwrap_or("image.bin").to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!("Failed to read image bytes: {}", e);
                    Error::BadRequest("Failed to read file upload".into())
                })?;

                if !data.is_empty() {
                    image = save_image_file(&filename, &data).await?;
                }
            }
            _ => {}
        }
    }

    let Some(user_id) = user_id else {
        return Err(Error::BadRequest("Invalid or missing user ID".into()));
    };
    let job_type: JobType = job_type
        .parse()
        .map_err(|_| Error::BadRequest("Invalid job type".into()))?;

    let job = state
        .job_service
        .create(NewJob {
            title,
            organization,
            image,
            city,
            country,
            remote,
            job_type: job_type.as_str().to_string(),
            description,
            user_id,
        })
        .await?;

    Ok(Json(CreateJobResponse {
        message: "Job added successfully".to_string(),
        job,
    }))
}

#[utoipa::path(
    put,
    path = "/api/updatejob/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    request_body = UpdateJobPayload,
    responses(
        (status = 200, description = "Job updated"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.update(id, payload).await?;
    Ok(Json(job))
}

#[utoipa::path(
    delete,
    path = "/api/deletejob/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job deleted"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.job_service.delete(id).await?;
    Ok(Json(json!({ "message": "Job deleted successfully!" })))
}

#[utoipa::path(
    post,
    path = "/api/upload",
    responses(
        (status = 200, description = "Image stored, file name returned"),
        (status = 400, description = "Missing or invalid image")
    )
)]
#[axum::debug_handler]
pub async fn upload_image(
    State(_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }
        let filename = field.file_name().unwrap_or("image.bin").to_string();
        let data = field.bytes().await.map_err(|e| {
            tracing::error!("Failed to read image bytes: {}", e);
            Error::BadRequest("Failed to read file upload".into())
        })?;

        if data.is_empty() {
            break;
        }
        let stored = save_image_file(&filename, &data).await?;
        return Ok(Json(json!({ "filename": stored })));
    }

    Err(Error::BadRequest("No image field in upload".into()))
}

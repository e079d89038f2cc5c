use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::auth_dto::DeleteAccountPayload,
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/delete-account",
    request_body = DeleteAccountPayload,
    responses(
        (status = 200, description = "Account and owned jobs deleted"),
        (status = 404, description = "Unknown email")
    )
)]
#[axum::debug_handler]
pub async fn delete_account(
    State(state): State<AppState>,
    Json(payload): Json<DeleteAccountPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let user = state
        .account_service
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    // Two separate statements, no transaction: a crash in between
    // leaves orphaned jobs behind.
    let removed_jobs = state.job_service.delete_by_owner(user.id).await?;
    state.account_service.delete_by_id(user.id).await?;

    tracing::info!(
        "Deleted account {} along with {} job(s)",
        payload.email,
        removed_jobs
    );
    Ok(Json(json!({
        "message": "Account and associated jobs deleted successfully"
    })))
}

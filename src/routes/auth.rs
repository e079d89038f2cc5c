use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::auth_dto::{
        ResetPasswordPayload, SigninPayload, SigninResponse, SignupPayload, SignupResponse,
        VerifyOtpPayload,
    },
    error::Result,
    utils::password::check_password_strength,
    utils::token::issue_token,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignupPayload,
    responses(
        (status = 200, description = "Account created, OTP sent", body = Json<SignupResponse>),
        (status = 400, description = "Invalid payload or email already registered")
    )
)]
#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let password_strength = check_password_strength(&payload.password);

    let (user, otp) = state
        .account_service
        .register(&payload.name, &payload.email, &payload.password)
        .await?;

    state.mail_service.send_otp(&user.name, &user.email, &otp);
    tracing::info!("Created account {} pending OTP confirmation", user.email);

    Ok(Json(SignupResponse {
        message: "Sign-up successful! Please enter the OTP.".to_string(),
        password_strength,
    }))
}

#[utoipa::path(
    post,
    path = "/api/verify-otp",
    request_body = VerifyOtpPayload,
    responses(
        (status = 200, description = "Account activated"),
        (status = 400, description = "Wrong or expired OTP")
    )
)]
#[axum::debug_handler]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpPayload>,
) -> Result<impl IntoResponse> {
    state
        .account_service
        .verify_otp(&payload.email, &payload.otp)
        .await?;
    Ok(Json(json!({ "message": "Account verified successfully" })))
}

#[utoipa::path(
    post,
    path = "/api/signin",
    request_body = SigninPayload,
    responses(
        (status = 200, description = "Signed in, bearer token returned", body = Json<SigninResponse>),
        (status = 401, description = "Bad credentials or unverified email")
    )
)]
#[axum::debug_handler]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninPayload>,
) -> Result<impl IntoResponse> {
    let user = state
        .account_service
        .authenticate(&payload.email, &payload.password)
        .await?;
    let token = issue_token(user.id)?;

    Ok(Json(SigninResponse {
        token,
        user: user.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/reset-password",
    request_body = ResetPasswordPayload,
    responses(
        (status = 200, description = "Password replaced"),
        (status = 400, description = "Old password is incorrect"),
        (status = 404, description = "Unknown email")
    )
)]
#[axum::debug_handler]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state
        .account_service
        .reset_password(&payload.email, &payload.old_password, &payload.new_password)
        .await?;
    Ok(Json(json!({ "message": "Password updated successfully" })))
}

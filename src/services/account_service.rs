use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::{crypto, token};

const USER_COLUMNS: &str = "id, name, email, password_hash, email_verified, otp_code, \
                            otp_expires_at, created_at, updated_at";

const OTP_TTL_MINUTES: i64 = 10;

#[derive(Clone)]
pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Creates an unverified account and returns it together with the
    /// confirmation code that still has to be delivered.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(User, String)> {
        if self.find_by_email(email).await?.is_some() {
            return Err(Error::BadRequest(
                "This email is already registered".to_string(),
            ));
        }

        let password_hash = crypto::hash_password(password)?;
        let otp = token::generate_otp();
        let otp_expires_at = Utc::now() + Duration::minutes(OTP_TTL_MINUTES);

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password_hash, otp_code, otp_expires_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(&otp)
        .bind(otp_expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok((user, otp))
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<()> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| Error::BadRequest("Invalid OTP, please try again.".to_string()))?;

        let code_matches = user.otp_code.as_deref() == Some(otp);
        let still_valid = user
            .otp_expires_at
            .map(|expires| expires > Utc::now())
            .unwrap_or(false);

        if !code_matches || !still_valid {
            return Err(Error::BadRequest(
                "Invalid OTP, please try again.".to_string(),
            ));
        }

        sqlx::query(
            "UPDATE users
             SET email_verified = TRUE, otp_code = NULL, otp_expires_at = NULL, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| Error::Unauthorized("Invalid email or password".to_string()))?;

        if !crypto::verify_password(password, &user.password_hash)? {
            return Err(Error::Unauthorized("Invalid email or password".to_string()));
        }
        if !user.email_verified {
            return Err(Error::Unauthorized("Email is not verified".to_string()));
        }

        Ok(user)
    }

    pub async fn reset_password(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<()> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        if !crypto::verify_password(old_password, &user.password_hash)? {
            return Err(Error::BadRequest("Old password is incorrect".to_string()));
        }

        let password_hash = crypto::hash_password(new_password)?;
        sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(user.id)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}

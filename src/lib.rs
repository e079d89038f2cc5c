pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    account_service::AccountService, job_service::JobService, mail_service::MailService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub job_service: JobService,
    pub account_service: AccountService,
    pub mail_service: MailService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let job_service = JobService::new(pool.clone());
        let account_service = AccountService::new(pool.clone());
        let mail_service = MailService::new();

        Self {
            pool,
            job_service,
            account_service,
            mail_service,
        }
    }
}

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use jobboard_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::auth::require_bearer_auth,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let auth_api = Router::new()
        .route("/api/signup", post(routes::auth::signup))
        .route("/api/verify-otp", post(routes::auth::verify_otp))
        .route("/api/signin", post(routes::auth::signin))
        .route("/api/reset-password", post(routes::auth::reset_password))
        .route("/api/delete-account", delete(routes::account::delete_account));

    let jobs_api = Router::new()
        .route("/api/jobs", get(routes::jobs::list_jobs))
        .route("/api/job/:id", get(routes::jobs::get_job))
        .route("/api/updatejob/:id", put(routes::jobs::update_job))
        .route("/api/deletejob/:id", delete(routes::jobs::delete_job))
        .route("/api/upload", post(routes::jobs::upload_image));

    // Only listing creation sits behind bearer auth, mirroring the UI
    // flow where everything else is reachable without a session.
    let listing_api = Router::new()
        .route("/api/newlisting", post(routes::jobs::create_job))
        .layer(axum::middleware::from_fn(require_bearer_auth));

    info!("Serving uploads from: {}", config.uploads_dir);

    let app = base_routes
        .merge(auth_api)
        .merge(jobs_api)
        .merge(listing_api)
        .nest_service(
            "/uploads",
            tower_http::services::ServeDir::new(&config.uploads_dir),
        )
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

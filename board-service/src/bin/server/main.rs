use std::path::Path;
use std::sync::Arc;

use auth::Authenticator;
use board_service::config::Config;
use board_service::domain::comment::service::CommentService;
use board_service::domain::post::service::PostService;
use board_service::domain::user::service::UserService;
use board_service::inbound::http::router::create_router;
use board_service::outbound::repositories::PostgresCommentRepository;
use board_service::outbound::repositories::PostgresPostRepository;
use board_service::outbound::repositories::PostgresUserRepository;
use board_service::outbound::storage::FilesystemImageStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "board_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "board-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        uploads_dir = %config.uploads.directory,
        token_ttl_days = config.jwt.expiration_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_days,
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let post_repository = Arc::new(PostgresPostRepository::new(pg_pool.clone()));
    let comment_repository = Arc::new(PostgresCommentRepository::new(pg_pool));

    let image_store = Arc::new(FilesystemImageStore::new(&config.uploads.directory));
    image_store.init().await?;

    let user_service = Arc::new(UserService::new(user_repository));
    let post_service = Arc::new(PostService::new(
        Arc::clone(&post_repository),
        Arc::clone(&comment_repository),
        image_store,
    ));
    let comment_service = Arc::new(CommentService::new(comment_repository, post_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        post_service,
        comment_service,
        authenticator,
        Path::new(&config.uploads.directory),
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_comment::add_comment;
use super::handlers::create_post::create_post;
use super::handlers::delete_post::delete_post;
use super::handlers::list_comments::list_comments;
use super::handlers::list_posts::list_posts;
use super::handlers::login::login;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::comment::service::CommentService;
use crate::domain::post::service::PostService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::PostgresCommentRepository;
use crate::outbound::repositories::PostgresPostRepository;
use crate::outbound::repositories::PostgresUserRepository;
use crate::outbound::storage::FilesystemImageStore;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub post_service:
        Arc<PostService<PostgresPostRepository, PostgresCommentRepository, FilesystemImageStore>>,
    pub comment_service: Arc<CommentService<PostgresCommentRepository, PostgresPostRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    post_service: Arc<
        PostService<PostgresPostRepository, PostgresCommentRepository, FilesystemImageStore>,
    >,
    comment_service: Arc<CommentService<PostgresCommentRepository, PostgresPostRepository>>,
    authenticator: Arc<Authenticator>,
    uploads_dir: &Path,
) -> Router {
    let state = AppState {
        user_service,
        post_service,
        comment_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/posts", get(list_posts))
        .route("/posts/:post_id/comments", get(list_comments));

    let protected_routes = Router::new()
        .route("/posts", post(create_post))
        .route("/posts/:post_id", delete(delete_post))
        .route("/posts/:post_id/comments", post(add_comment))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        // Image blobs are served straight from the uploads directory
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::comment::models::Comment;
pub use domain::comment::service::CommentService;
pub use domain::post::models::Post;
pub use domain::post::service::PostService;
pub use domain::user::models::User;
pub use domain::user::service::UserService;

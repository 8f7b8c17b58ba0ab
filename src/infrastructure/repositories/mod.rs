// src/infrastructure/repositories/mod.rs
mod error;
mod like;
mod postgres_content;
mod postgres_instructor;
mod postgres_review;
mod postgres_taxonomy;

pub use error::map_sqlx;
use like::like_prefix;
pub use postgres_content::{PostgresContentReadRepository, PostgresContentWriteRepository};
pub use postgres_instructor::PostgresInstructorRepository;
pub use postgres_review::PostgresReviewRepository;
pub use postgres_taxonomy::PostgresTermRepository;

// src/application/commands/reviews/mod.rs
mod create;
mod delete;
mod instructors;
mod service;
mod update;

pub use create::CreateReviewCommand;
pub use delete::DeleteReviewCommand;
pub use instructors::RegisterInstructorCommand;
pub use service::ReviewCommandService;
pub(crate) use service::refresh_rating;
pub use update::UpdateReviewCommand;

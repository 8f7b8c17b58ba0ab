// src/application/commands/content/mod.rs
mod create;
mod delete;
mod service;
mod status;
mod terms;
mod update;

pub use create::{CreateContentCommand, CreateContentCommandBuilder};
pub use delete::DeleteContentCommand;
pub use service::ContentCommandService;
pub use status::SetContentStatusCommand;
pub use terms::SetContentTermsCommand;
pub use update::UpdateContentCommand;

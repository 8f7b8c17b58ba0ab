// src/application/commands/taxonomy/mod.rs
mod create;
mod delete;
mod service;

pub use create::CreateTermCommand;
pub use delete::DeleteTermCommand;
pub use service::TaxonomyCommandService;

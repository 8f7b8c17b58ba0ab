pub mod entity;
pub mod repository;
pub mod services;
pub mod status;
pub mod value_objects;

pub use entity::{ContentItem, ContentUpdate, NewContentItem, TermAssignment};
pub use repository::{ContentFilter, ContentReadRepository, ContentWriteRepository};
pub use status::{ContentStatus, PublicationState, apply_status};
pub use value_objects::{ContentBody, ContentId, ContentKind, ContentSlug, ContentTitle, OwnerId};

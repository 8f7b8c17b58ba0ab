pub mod content;
pub mod reviews;
pub mod taxonomy;

pub mod content;
pub mod courses;
pub mod instructors;
pub mod posts;
pub mod reviews;
pub mod taxonomy;

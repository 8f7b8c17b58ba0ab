pub mod aggregate;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use aggregate::{mean_rating, recompute_rating};
pub use entity::{Instructor, NewInstructor, NewReview, Review, ReviewUpdate};
pub use repository::{InstructorRepository, ReviewRepository};
pub use value_objects::{
    InstructorId, RaterId, Rating, ReviewComment, ReviewId, ReviewTitle, ReviewValue,
};

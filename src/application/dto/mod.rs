pub mod content;
pub mod reviews;
pub mod taxonomy;

pub use content::ContentDto;
pub use reviews::{InstructorDto, InstructorRatingDto, ReviewDto, ReviewReceiptDto};
pub use taxonomy::TermDto;

// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod content_repo;
pub mod instructor_repo;
pub mod racing;
pub mod review_repo;
pub mod stale;
pub mod term_repo;
pub mod time;

pub use content_repo::InMemoryContentRepo;
pub use instructor_repo::InMemoryInstructorRepo;
pub use racing::RacingContentWrite;
pub use review_repo::InMemoryReviewRepo;
pub use stale::StaleContentWrite;
pub use term_repo::InMemoryTermRepo;
pub use time::{FixedClock, SteppingClock, fixed_now};

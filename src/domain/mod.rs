// src/domain/mod.rs
pub mod content;
pub mod errors;
pub mod review;
pub mod slug;
pub mod taxonomy;

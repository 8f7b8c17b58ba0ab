pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewTerm, Term};
pub use repository::TermRepository;
pub use value_objects::{Taxonomy, TermId, TermName, TermSlug};

// tests/support/mocks/instructor_repo.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use publishing_core::domain::errors::{DomainError, DomainResult};
use publishing_core::domain::review::{
    Instructor, InstructorId, InstructorRepository, NewInstructor, Rating,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryInstructorRepo {
    state: Mutex<(i64, BTreeMap<i64, Instructor>)>,
}

impl InMemoryInstructorRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating_of(&self, id: i64) -> Option<Rating> {
        self.state.lock().unwrap().1.get(&id).map(|i| i.rating)
    }
}

#[async_trait]
impl InstructorRepository for InMemoryInstructorRepo {
    async fn insert(&self, instructor: NewInstructor) -> DomainResult<Instructor> {
        let mut state = self.state.lock().unwrap();
        state.0 += 1;
        let created = Instructor {
            id: InstructorId(state.0),
            name: instructor.name,
            expertise: instructor.expertise,
            rating: Rating::zero(),
            created_at: instructor.created_at,
            updated_at: instructor.created_at,
        };
        state.1.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: InstructorId) -> DomainResult<Option<Instructor>> {
        Ok(self.state.lock().unwrap().1.get(&id.0).cloned())
    }

    async fn update_rating(
        &self,
        id: InstructorId,
        rating: Rating,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Instructor> {
        let mut state = self.state.lock().unwrap();
        let instructor = state
            .1
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::not_found("instructor not found"))?;
        instructor.rating = rating;
        instructor.updated_at = updated_at;
        Ok(instructor.clone())
    }
}

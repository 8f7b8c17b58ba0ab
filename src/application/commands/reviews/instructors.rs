// src/application/commands/reviews/instructors.rs
use super::ReviewCommandService;
use crate::{
    application::{
        dto::InstructorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::review::NewInstructor,
};

pub struct RegisterInstructorCommand {
    pub name: String,
    pub expertise: String,
}

impl ReviewCommandService {
    /// Registers an instructor with an empty rating of `0.00`.
    pub async fn register_instructor(
        &self,
        command: RegisterInstructorCommand,
    ) -> ApplicationResult<InstructorDto> {
        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(ApplicationError::validation("instructor name cannot be empty"));
        }
        if command.expertise.chars().count() > 200 {
            return Err(ApplicationError::validation(
                "expertise must be at most 200 characters",
            ));
        }

        let instructor = self
            .instructor_repo
            .insert(NewInstructor {
                name,
                expertise: command.expertise,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(instructor_id = i64::from(instructor.id), "instructor registered");
        Ok(instructor.into())
    }
}

// tests/support/builders.rs
use super::helpers::TestContext;
use publishing_core::application::commands::content::CreateContentCommand;
use publishing_core::application::commands::reviews::{
    CreateReviewCommand, RegisterInstructorCommand,
};
use publishing_core::application::commands::taxonomy::CreateTermCommand;
use publishing_core::application::dto::{ContentDto, ReviewReceiptDto};
use publishing_core::domain::content::ContentKind;
use publishing_core::domain::taxonomy::Taxonomy;

pub const POST_BODY: &str = "A post body that is comfortably long enough.";
pub const COURSE_DESCRIPTION: &str =
    "A course description that easily clears the fifty character minimum.";
pub const REVIEW_COMMENT: &str = "Clear explanations and useful exercises.";

pub fn post_command(title: &str) -> CreateContentCommand {
    CreateContentCommand::builder(ContentKind::Post)
        .title(title)
        .body(POST_BODY)
        .owner_id(1)
        .build()
        .unwrap()
}

pub fn course_command(title: &str, instructor_id: i64) -> CreateContentCommand {
    CreateContentCommand::builder(ContentKind::Course)
        .title(title)
        .body(COURSE_DESCRIPTION)
        .owner_id(instructor_id)
        .status("published")
        .build()
        .unwrap()
}

pub fn review_command(course_id: i64, rater_id: i64, rating: i32) -> CreateReviewCommand {
    CreateReviewCommand {
        course_id,
        rater_id,
        rating,
        title: "Worth it".into(),
        comment: REVIEW_COMMENT.into(),
    }
}

pub async fn register_instructor(ctx: &TestContext, name: &str) -> i64 {
    ctx.services
        .review_commands
        .register_instructor(RegisterInstructorCommand {
            name: name.into(),
            expertise: "Systems programming".into(),
        })
        .await
        .unwrap()
        .id
}

pub async fn create_course(ctx: &TestContext, title: &str, instructor_id: i64) -> ContentDto {
    ctx.services
        .content_commands
        .create_content(course_command(title, instructor_id))
        .await
        .unwrap()
}

pub async fn rate(
    ctx: &TestContext,
    course_id: i64,
    rater_id: i64,
    rating: i32,
) -> ReviewReceiptDto {
    ctx.services
        .review_commands
        .create_review(review_command(course_id, rater_id, rating))
        .await
        .unwrap()
}

pub async fn create_term(ctx: &TestContext, taxonomy: Taxonomy, name: &str) -> i64 {
    ctx.services
        .taxonomy_commands
        .create_term(CreateTermCommand {
            taxonomy,
            name: name.into(),
            description: String::new(),
        })
        .await
        .unwrap()
        .id
}

use crate::domain::errors::DomainError;

const CNT_CONTENT_SLUG: &str = "content_items_kind_slug_key";
const CNT_REVIEW_PER_RATER: &str = "course_reviews_course_id_rater_id_key";
const CNT_REVIEW_COURSE: &str = "course_reviews_course_id_fkey";
const CNT_REVIEW_VALUE_CHECK: &str = "course_reviews_value_check";
const CNT_CONTENT_PUBLISHED_CHECK: &str = "content_items_published_requires_timestamp_chk";
const CNT_CONTENT_CATEGORY: &str = "content_items_category_id_fkey";
const CNT_CONTENT_TAG: &str = "content_tags_term_id_fkey";
const CNT_TERM_SLUG: &str = "taxonomy_terms_taxonomy_slug_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CONTENT_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_REVIEW_PER_RATER => {
                        DomainError::Conflict("course already reviewed by this rater".into())
                    }
                    CNT_REVIEW_COURSE => DomainError::NotFound("course not found".into()),
                    CNT_REVIEW_VALUE_CHECK => {
                        DomainError::Validation("rating must be between 0 and 5".into())
                    }
                    CNT_CONTENT_PUBLISHED_CHECK => {
                        DomainError::Validation("published items require published_at".into())
                    }
                    CNT_CONTENT_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_CONTENT_TAG => DomainError::NotFound("tag not found".into()),
                    CNT_TERM_SLUG => DomainError::Conflict("term slug already exists".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

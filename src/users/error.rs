use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by user repositories.
///
/// Driver errors are carried as-is; zero-row updates and deletes are not errors.
#[derive(Debug, Error)]
pub enum UserRepoError {
    #[error("user {0} not found")]
    NotFound(Uuid),

    #[error("query users: {0}")]
    Query(#[source] sqlx::Error),

    #[error("write users: {0}")]
    Write(#[source] sqlx::Error),
}

impl UserRepoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserRepoError::NotFound(_))
    }
}

pub type UserRepoResult<T> = Result<T, UserRepoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let id = Uuid::new_v4();
        let err = UserRepoError::NotFound(id);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), format!("user {id} not found"));
    }

    #[test]
    fn driver_errors_keep_their_source() {
        let err = UserRepoError::Write(sqlx::Error::RowNotFound);
        assert!(!err.is_not_found());
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("write users:"));
    }
}

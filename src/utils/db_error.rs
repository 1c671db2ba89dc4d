//! Translation of SQLx failures into repository errors.

use crate::domain::repositories::RepositoryError;

/// Name of the unique constraint guarding the `urls.alias` column.
pub const ALIAS_UNIQUE_CONSTRAINT: &str = "urls_alias_key";

/// Returns true if `e` is a unique violation raised by the alias constraint.
pub fn is_unique_violation_on_alias(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ALIAS_UNIQUE_CONSTRAINT))
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        if matches!(e, sqlx::Error::RowNotFound) {
            return RepositoryError::NotFound;
        }

        if is_unique_violation_on_alias(&e) {
            return RepositoryError::Conflict;
        }

        RepositoryError::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn test_pool_timeout_maps_to_database() {
        let err = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Database(_)));
    }

    #[test]
    fn test_non_database_error_is_not_alias_violation() {
        assert!(!is_unique_violation_on_alias(&sqlx::Error::PoolClosed));
    }
}

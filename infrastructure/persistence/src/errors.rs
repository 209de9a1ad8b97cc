use business::domain::errors::RepositoryError;

/// Maps a sqlx failure onto the domain error. Unique violations become
/// `Duplicated` so callers can recover from concurrent inserts.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        tracing::warn!(constraint = ?db_err.constraint(), "unique constraint rejected write");
        return RepositoryError::Duplicated;
    }

    tracing::error!(error = ?err, "database operation failed");
    RepositoryError::DatabaseError
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_non_database_errors_to_database_error() {
        let mapped = map_sqlx_error(sqlx::Error::RowNotFound);

        assert!(matches!(mapped, RepositoryError::DatabaseError));
    }
}

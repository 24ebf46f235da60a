//! Shared Diesel error mapping for repositories with basic query semantics.
//!
//! Repository ports expose `connection` and `query` constructors; these
//! helpers route pool and Diesel failures onto them and emit a `debug!`
//! event with the raw database context.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    debug!(%error, "connection pool checkout failed");
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => connection(message),
    }
}

/// Map Diesel errors into query/connection constructors.
///
/// Database errors keep the server message so clients see why a write was
/// rejected; a closed connection is reported as a connection failure.
pub fn map_basic_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => query("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => query(info.message().to_owned()),
        other => query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::UserPersistenceError;
    use diesel::result::Error as DieselError;
    use rstest::rstest;

    fn map(error: DieselError) -> UserPersistenceError {
        map_basic_diesel_error(
            error,
            UserPersistenceError::query,
            UserPersistenceError::connection,
        )
    }

    #[rstest]
    fn not_found_maps_to_query() {
        assert_eq!(
            map(DieselError::NotFound),
            UserPersistenceError::query("record not found")
        );
    }

    #[rstest]
    fn rollback_maps_to_query_with_diesel_text() {
        let expected = DieselError::RollbackTransaction.to_string();
        assert_eq!(
            map(DieselError::RollbackTransaction),
            UserPersistenceError::query(expected)
        );
    }

    #[rstest]
    #[case(PoolError::checkout("timed out"), "timed out")]
    #[case(PoolError::build("refused"), "refused")]
    fn pool_errors_map_to_connection(#[case] error: PoolError, #[case] expected: &str) {
        let mapped: UserPersistenceError =
            map_basic_pool_error(error, UserPersistenceError::connection);
        assert_eq!(mapped, UserPersistenceError::connection(expected));
    }
}

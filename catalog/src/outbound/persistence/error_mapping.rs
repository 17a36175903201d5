//! Classification of pool and Diesel failures into port errors.

use tracing::debug;

use crate::domain::ports::CatalogRepositoryError;

use super::pool::PoolError;

/// Map pool errors into the port's connection variant.
pub(crate) fn map_pool_error(error: PoolError) -> CatalogRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    CatalogRepositoryError::connection(message)
}

/// Map Diesel error variants into port errors.
///
/// A Diesel `NotFound` becomes the port's `NotFound`; closed connections map
/// to the connection variant; everything else is a query failure whose
/// message is surfaced to the caller.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> CatalogRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => CatalogRepositoryError::not_found(),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            CatalogRepositoryError::connection(info.message().to_owned())
        }
        other => CatalogRepositoryError::query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn diesel_not_found_maps_to_port_not_found() {
        assert_eq!(
            map_diesel_error(diesel::result::Error::NotFound),
            CatalogRepositoryError::NotFound
        );
    }

    #[rstest]
    fn diesel_rollback_maps_to_query_error() {
        let mapped = map_diesel_error(diesel::result::Error::RollbackTransaction);
        assert!(matches!(mapped, CatalogRepositoryError::Query { .. }));
    }

    #[rstest]
    fn pool_checkout_failure_maps_to_connection_error() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, CatalogRepositoryError::connection("timed out"));
    }
}

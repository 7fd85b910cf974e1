// sqlx::Error -> AppError mapping

use qms_core::error::AppError;

/// Convert sqlx::Error to AppError::Database with the SQLite result code decoded
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let Some(code) = db_err.code() else {
                return AppError::Database(format!("Database error: {}", db_err.message()));
            };

            // SQLite (extended) result codes: https://www.sqlite.org/rescode.html
            let kind = match code.as_ref() {
                "2067" | "1555" => "Unique constraint violation",
                "787" => "Foreign key constraint violation",
                "275" => "Check constraint violation",
                "1299" => "Not null constraint violation",
                "5" => "Database locked (SQLITE_BUSY)",
                "13" => "Database full",
                _ => "Database error",
            };
            AppError::Database(format!("{}: {} ({})", kind, db_err.message(), code))
        }
        sqlx::Error::RowNotFound => AppError::Database("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        sqlx::Error::PoolTimedOut => AppError::Database("Connection pool timed out".to_string()),
        // Connection, configuration, protocol errors
        _ => AppError::Database(err.to_string()),
    }
}

//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use qms_core::error::AppError;

/// RPC Error Codes
pub mod code {
    pub const INVALID_ARGUMENT: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Convert AppError to JSON-RPC ErrorObject
///
/// Only the public message crosses the boundary; internal causes are logged
/// where they occur.
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    let code = match &err {
        AppError::InvalidArgument(_) => code::INVALID_ARGUMENT,
        AppError::NotFound(_) => code::NOT_FOUND,
        _ => code::INTERNAL_ERROR,
    };
    ErrorObjectOwned::owned(code, err.public_message(), None::<()>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_errors_keep_message() {
        let err = to_rpc_error(AppError::InvalidArgument("Queue ID is required".to_string()));
        assert_eq!(err.code(), code::INVALID_ARGUMENT);
        assert_eq!(err.message(), "Queue ID is required");

        let err = to_rpc_error(AppError::NotFound("Queue not found".to_string()));
        assert_eq!(err.code(), code::NOT_FOUND);
        assert_eq!(err.message(), "Queue not found");
    }

    #[test]
    fn test_internal_errors_are_generic() {
        for err in [
            AppError::Database("Foreign key constraint violation (787)".to_string()),
            AppError::Internal("client listing failed: disk I/O error".to_string()),
        ] {
            let rpc = to_rpc_error(err);
            assert_eq!(rpc.code(), code::INTERNAL_ERROR);
            assert_eq!(rpc.message(), qms_core::error::INTERNAL_MESSAGE);
        }
    }
}

//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use serde_json::json;
use tablebook_core::error::AppError;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const CAPACITY_CONFLICT: i32 = 4002;
    pub const NO_ELIGIBLE_TABLE: i32 = 4004;
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const DB_ERROR: i32 = 5001;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    let message = err.to_string();
    match err {
        AppError::Validation(msg) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, msg, None::<()>)
        }
        AppError::Domain(_) => ErrorObjectOwned::owned(code::VALIDATION_ERROR, message, None::<()>),
        AppError::NotFound(msg) => ErrorObjectOwned::owned(code::NOT_FOUND, msg, None::<()>),
        AppError::CapacityConflict { date, time, guests } => ErrorObjectOwned::owned(
            code::CAPACITY_CONFLICT,
            message,
            Some(json!({ "date": date, "time": time, "guests": guests })),
        ),
        AppError::NoEligibleTable { guests } => ErrorObjectOwned::owned(
            code::NO_ELIGIBLE_TABLE,
            message,
            Some(json!({ "guests": guests })),
        ),
        AppError::Database(msg) => ErrorObjectOwned::owned(code::DB_ERROR, msg, None::<()>),
        AppError::Config(_) | AppError::Internal(_) => {
            ErrorObjectOwned::owned(code::INTERNAL_ERROR, message, None::<()>)
        }
    }
}

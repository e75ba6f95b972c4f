//! Gateway types: the API boundary
//!
//! - [`SignedAmount`]: format-validated signed decimal for ledger input
//! - [`ApiResponse`]: unified `{code, msg, data}` envelope
//! - [`ApiError`]: typed error with its canonical status mapping

pub mod money;
pub mod response;

pub use money::SignedAmount;
pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};

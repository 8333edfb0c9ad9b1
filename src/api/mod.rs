// API handlers - thin HTTP orchestration layer.
// Handlers only deal with HTTP concerns:
// 1. Extract the body or path parameter
// 2. Call the store or the verification client
// 3. Transform the result (or its failure) into a JSON response

pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ApiResult};

pub mod api;
pub mod captcha;
pub mod config;
pub mod db;
pub mod models;

// Re-export commonly used types
pub use api::error::{ApiError, ApiResult};
pub use captcha::{CaptchaVerifier, VerifyError};
pub use config::Config;
pub use db::DatabaseError;
pub use models::{InvestmentDocument, InvestmentResponse, NewInvestment};

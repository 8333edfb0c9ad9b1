pub mod connection;
pub mod errors;
pub mod investments;

pub use connection::*;
pub use errors::*;
pub use investments::*;

pub mod investment;


pub use investment::*;

pub mod error;
pub mod natal;

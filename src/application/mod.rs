pub mod error;
pub mod repositories;

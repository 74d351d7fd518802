pub mod file;
pub mod registry;

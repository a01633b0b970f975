pub mod file;
pub mod types;

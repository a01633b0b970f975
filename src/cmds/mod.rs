pub mod analyze;
pub mod codegen;

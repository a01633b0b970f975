pub mod cmds;
pub mod codegen;
pub mod diag;
pub mod model;
pub mod output;

//! Interactive interview loop

pub mod commands;
pub mod repl;

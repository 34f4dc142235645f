pub mod commands;
pub mod error;
pub mod flags;
pub mod parser;
pub mod path;
pub mod process;
pub mod prompt;
pub mod shell;

//! Library components of the save tool.

pub mod assign;
pub mod commands;
pub mod logging;
pub mod prompt;
pub mod render;

//! Real roots of `ax^2 + bx + c = 0`, plus the interactive shell around them.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod logging;

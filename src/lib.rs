pub mod blocks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod rules;
pub mod scanner;

pub use error::{GateError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GATE_FAILED: i32 = 1;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

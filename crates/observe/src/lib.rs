//! This crate contains the logging initialization shared by the binaries of
//! the workspace and their tests.
pub mod config;
pub mod tracing;

pub use config::Config;

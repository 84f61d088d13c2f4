//! Scene configuration for the `view` command.
//!
//! Values are resolved with the precedence command-line flag > `-S key=value` >
//! configuration file > built-in default.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;

// src/exec/mod.rs

//! Process launching layer.
//!
//! - [`backend`] provides the `ProcessLauncher` trait and the production
//!   `OsLauncher`, which tests replace with fakes.
//! - [`command`] turns a `LaunchRequest` into a `tokio::process::Command`.

pub mod backend;
pub mod command;

pub use backend::{LaunchRequest, NO_EXIT_CODE, OsLauncher, ProcessLauncher};
pub use command::build_command;

//! Deployment bootstrap for the application infrastructure stack.
//!
//! - `context`: per-run context parameters (infra.json + --context flags)
//! - `env`: .env loading and deployment environment variables
//! - `config`: stack property resolution with defaults
//! - `stack`: construct tree and manifest synthesis
//! - `cli`: argument parsing

pub mod cli;
pub mod config;
pub mod context;
pub mod env;
pub mod error;
pub mod stack;

pub use config::{DeployEnv, StackProps};
pub use context::Context;
pub use error::{Error, Result};
pub use stack::{App, AppInfraStack};

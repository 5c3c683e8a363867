//! Command-line interface and orchestration for contribs
//!
//! This module implements the CLI commands and wires the calendar provider, blog post
//! normalization, and report generators together.
//!
//! ## Commands
//!
//! - **contributions**: Fetch (or reuse from cache) a user's contribution calendar and
//!   render it to the console, an HTML page, or a JSON file
//! - **posts**: Load blog metadata from a JSON file, pick the most recent posts, and list them
//! - **init**: Generate a default configuration file
//! - **validate**: Check that a configuration file loads and holds usable values
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate handler. The report-producing commands share a common set of arguments,
//! which sets up logging and loads the configuration before any work starts.
//!
//! Configuration lives in a TOML file (`contribs.toml` by default) holding the calendar
//! host, cache lifetime, request timeout, and number of featured posts.

mod common;
mod config;
mod contributions;
mod host;
mod init;
mod posts;
mod run;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use common::{ColorMode, LogLevel};
pub use contributions::{ContributionsArgs, process_contributions};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use posts::{PostsArgs, process_posts};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};

//! Arguments and helpers shared by the `contributions` and `posts` commands.

use super::config::Config;
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use directories::BaseDirs;
use ohno::IntoAppError;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Directory searched for `contribs.toml` when no configuration path is given.
pub const WORKING_DIR: &str = ".";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    /// Decide whether to emit colors for an output stream.
    pub fn use_colors(self, stream: &impl IsTerminal) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stream.is_terminal(),
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared by the commands that load configuration and print reports
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to configuration file (default is `contribs.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

impl CommonArgs {
    /// Initialize logging and load the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded
    pub fn setup(&self) -> Result<Config> {
        init_logging(self.log_level);
        Config::load(Utf8Path::new(WORKING_DIR), self.config.as_ref())
    }
}

/// Initialize logger based on log level
///
/// Later calls within the same process keep the logger installed by the first one.
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Resolve the directory where fetched calendars are cached
///
/// # Errors
///
/// Returns an error if no explicit directory is given and the platform cache directory cannot be determined
pub fn cache_dir(explicit: Option<&Utf8PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.as_std_path().to_path_buf());
    }

    Ok(BaseDirs::new()
        .into_app_err("could not determine cache directory")?
        .cache_dir()
        .join("contribs"))
}

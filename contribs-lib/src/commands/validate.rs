use super::Host;
use super::common::WORKING_DIR;
use super::config::Config;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `contribs.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

/// Check that a configuration file loads and holds usable values
///
/// Failures are reported on the host's error stream followed by an exit code of 1.
pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) {
    let config_path = args.config.as_ref();

    match Config::load(Utf8Path::new(WORKING_DIR), config_path) {
        Ok(config) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = config_path {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using configuration from the current directory or built-in defaults");
            }
            let _ = writeln!(
                host.output(),
                "Calendars from {} are cached for {}s",
                config.base_url,
                config.cache_ttl.as_secs()
            );
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
        }
    }
}

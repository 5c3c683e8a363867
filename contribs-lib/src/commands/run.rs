//! Command dispatch logic for contribs

use super::{
    ContributionsArgs, InitArgs, PostsArgs, ValidateArgs, init_config, process_contributions, process_posts, validate_config,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "contribs", version, author, long_about = None)]
#[command(about = "Show a GitHub contribution calendar and featured blog posts")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: ContribsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ContribsSubcommand {
    /// Show a user's contribution calendar and streaks
    Contributions(Box<ContributionsArgs>),
    /// List the most recent posts from blog metadata
    Posts(PostsArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        ContribsSubcommand::Contributions(contributions_args) => process_contributions(host, contributions_args).await,
        ContribsSubcommand::Posts(posts_args) => process_posts(host, posts_args),
        ContribsSubcommand::Init(init_args) => init_config(host, init_args),
        ContribsSubcommand::Validate(validate_args) => {
            validate_config(host, validate_args);
            Ok(())
        }
    }
}

use super::Host;
use super::common::CommonArgs;
use crate::Result;
use crate::posts::{featured_posts, load_posts};
use crate::reports::{generate_json, generate_post_list};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::{Write, stdout};

#[derive(Parser, Debug)]
pub struct PostsArgs {
    /// JSON file holding blog metadata, in any of the supported layouts
    #[arg(value_name = "PATH")]
    pub path: Utf8PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of posts to feature (overrides the configuration file)
    #[arg(long, short = 'n', value_name = "COUNT")]
    pub limit: Option<usize>,

    /// Output the featured posts to the console. If omitted, console output is shown only when no other reports are generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    /// Output the featured posts to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,
}

pub fn process_posts<H: Host>(host: &mut H, args: &PostsArgs) -> Result<()> {
    let config = args.common.setup()?;

    let posts = load_posts(&args.path)?;
    let featured = featured_posts(posts, args.limit.unwrap_or(config.featured_posts));

    if args.console || args.json.is_none() {
        let mut console_output = String::new();
        let use_colors = args.common.color.use_colors(&stdout());
        generate_post_list(&featured, use_colors, &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    if let Some(filename) = &args.json {
        let mut json = String::new();
        generate_json(&featured, &mut json)?;
        fs::write(filename, json).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
    }

    Ok(())
}

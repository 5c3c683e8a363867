use super::Host;
use super::common::{CommonArgs, cache_dir};
use crate::Result;
use crate::facts::{Cache, Client, ContributionsSnapshot, FileStore, NullStore, Provenance, Provider, Store};
use crate::reports::{generate_console, generate_html, generate_json, terminal_width};
use camino::Utf8PathBuf;
use chrono::{Local, Utc};
use clap::Parser;
use ohno::IntoAppError;
use serde::Serialize;
use std::fs;
use std::io::{Write, stdout};
use std::sync::Arc;

#[derive(Parser, Debug)]
pub struct ContributionsArgs {
    /// GitHub user whose contribution calendar is shown
    #[arg(value_name = "USERNAME")]
    pub username: String,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory where fetched calendars are cached
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<Utf8PathBuf>,

    /// Neither read nor write cached calendars
    #[arg(long, conflicts_with = "cache_dir")]
    pub no_cache: bool,

    /// Ignore cached data and fetch the calendar fresh
    #[arg(long)]
    pub ignore_cached: bool,

    /// Host serving the contribution calendars (overrides the configuration file)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output the calendar to the console. If omitted, console output is shown only when no other reports are generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    /// Output the calendar to an HTML file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub html: Option<Utf8PathBuf>,

    /// Output the calendar to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,
}

/// Shape of the JSON report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsReport<'a> {
    username: &'a str,
    source: String,
    #[serde(flatten)]
    snapshot: &'a ContributionsSnapshot,
}

pub async fn process_contributions<H: Host>(host: &mut H, args: &ContributionsArgs) -> Result<()> {
    let config = args.common.setup()?;

    let base_url = args.base_url.as_deref().unwrap_or(&config.base_url);
    let client = Client::new(base_url, config.request_timeout)?;

    let store: Arc<dyn Store> = if args.no_cache {
        Arc::new(NullStore)
    } else {
        Arc::new(FileStore::new(cache_dir(args.cache_dir.as_ref())?))
    };

    let provider = Provider::new(client, Cache::new(store, config.cache_ttl, args.ignore_cached));
    let (provenance, snapshot) = provider.get_contributions_with_provenance(&args.username, Utc::now()).await;

    if provenance == Provenance::Fallback {
        let _ = writeln!(
            host.error(),
            "warning: unable to fetch the contribution calendar of '{}', showing sample data instead",
            args.username
        );
    }

    report(host, args, provenance, &snapshot)
}

fn report<H: Host>(host: &mut H, args: &ContributionsArgs, provenance: Provenance, snapshot: &ContributionsSnapshot) -> Result<()> {
    let generating_reports = args.html.is_some() || args.json.is_some();

    if args.console || !generating_reports {
        let mut console_output = String::new();
        let use_colors = args.common.color.use_colors(&stdout());
        generate_console(&args.username, snapshot, use_colors, terminal_width(), &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    if let Some(filename) = &args.html {
        let mut html = String::new();
        generate_html(&args.username, snapshot, Local::now(), &mut html)?;
        fs::write(filename, html).into_app_err_with(|| format!("writing HTML report to '{filename}'"))?;
    }

    if let Some(filename) = &args.json {
        let report = ContributionsReport {
            username: &args.username,
            source: provenance.to_string(),
            snapshot,
        };

        let mut json = String::new();
        generate_json(&report, &mut json)?;
        fs::write(filename, json).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
    }

    Ok(())
}

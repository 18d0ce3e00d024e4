use std::{fs, path::PathBuf, str::FromStr};

use clap::{ArgAction, Parser, Subcommand};
use url::Url;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (-v, -vv)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress everything but errors in the log
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Configuration file (defaults to ./folio.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the profile page with its publications list
    Render {
        #[arg(value_name = "SRC")]
        from: Option<Source>,

        /// Write the page here instead of stdout
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Only render the publications section
        #[arg(long)]
        fragment: bool,
    },
    /// Print the publications list to the terminal
    List {
        #[arg(value_name = "SRC")]
        from: Option<Source>,
    },
    /// Show which parts of an author list match the page owner's name
    Highlight {
        #[arg(value_name = "AUTHORS")]
        authors: String,

        /// Name variant to match; repeat to give several (replaces the configured list)
        #[arg(long = "variant", value_name = "NAME")]
        variants: Vec<String>,

        /// Print the segments as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Where the site's `publications.json` is read from, which can either be
///
/// - a local site directory (or the JSON file itself), or
/// - the base URL the site is deployed under.
pub enum Source {
    File(PathBuf),
    Url(Url),
}

impl FromStr for Source {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Is this a path?
        if let Ok(path) = fs::canonicalize(s) {
            return Ok(Source::File(path));
        }
        // No? Then it has to be a deployed site.
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Source::Url(url)),
            _ => Err(format!("{s} is neither an existing path nor an http(s) URL")),
        }
    }
}

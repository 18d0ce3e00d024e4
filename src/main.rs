use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
    str::FromStr,
    time::Duration,
};

use anyhow::{Context, anyhow};
use clap::Parser;
use indicatif::ProgressBar;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    cli::{Cli, Command, Source},
    config::SiteConfig,
    fetcher::PublicationList,
    highlight::NameMatcher,
    render::{Section, html, terminal::TerminalRenderer},
};

mod cli;
mod config;
mod fetcher;
mod highlight;
mod markup;
mod profile;
mod publication;
mod render;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose, args.quiet);

    let config = config::load(args.config.as_deref())?;
    match args.command {
        Command::Render {
            from,
            out,
            fragment,
        } => {
            let source = resolve_source(from, &config)?;
            let matcher = matcher(&config.highlight.variants)?;
            let mut list = PublicationList::new();
            list.load(fetcher::for_source(&source, &config.site)?.as_ref());

            let section = Section::new(list.state(), &matcher);
            let page = if fragment {
                html::render_fragment(&section)?
            } else {
                html::render_page(&config.profile, &section)?
            };
            match out {
                Some(path) => fs::write(&path, page)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => io::stdout().write_all(page.as_bytes())?,
            }
        }
        Command::List { from } => {
            let source = resolve_source(from, &config)?;
            let matcher = matcher(&config.highlight.variants)?;
            let fetcher = fetcher::for_source(&source, &config.site)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_message(render::LOADING_MESSAGE);
            spinner.enable_steady_tick(Duration::from_millis(100));
            let mut list = PublicationList::new();
            list.load(fetcher.as_ref());
            spinner.finish_and_clear();

            let section = Section::new(list.state(), &matcher);
            let renderer = TerminalRenderer {
                color: use_color(io::stdout().is_terminal()),
            };
            renderer.write_section(&mut io::stdout().lock(), &section)?;
        }
        Command::Highlight {
            authors,
            variants,
            json,
        } => {
            let variants = if variants.is_empty() {
                config.highlight.variants
            } else {
                variants
            };
            let segments = matcher(&variants)?.highlight(&authors);
            let mut stdout = io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut stdout, &segments)?;
            } else {
                let renderer = TerminalRenderer {
                    color: use_color(io::stdout().is_terminal()),
                };
                renderer.write_segments(&mut stdout, &segments)?;
            }
            writeln!(stdout)?;
        }
        Command::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| format!("folio={level}"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(use_color(io::stderr().is_terminal())),
        )
        .init();
}

fn use_color(is_terminal: bool) -> bool {
    is_terminal && std::env::var_os("NO_COLOR").is_none()
}

fn matcher(variants: &[String]) -> anyhow::Result<NameMatcher> {
    NameMatcher::new(variants).context("invalid name variants")
}

/// Command line wins over `site.base`; with neither, the current directory is the site.
fn resolve_source(from: Option<Source>, config: &SiteConfig) -> anyhow::Result<Source> {
    if let Some(source) = from {
        return Ok(source);
    }
    match &config.site.base {
        Some(base) => Source::from_str(base).map_err(|e| anyhow!("site.base: {e}")),
        None => Ok(Source::File(PathBuf::from("."))),
    }
}

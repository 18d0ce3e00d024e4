use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::{cli::Source, config::SiteSettings, publication::PublicationRecord};

pub mod file;
pub mod http;

/// Name of the publications resource, relative to the site's base path.
pub const PUBLICATIONS_FILE: &str = "publications.json";

pub trait Fetch {
    /// Where the resource is read from, for diagnostics.
    fn location(&self) -> String;
    fn fetch(&self) -> Result<Vec<PublicationRecord>, FetchError>;
}

/// Errors that can occur while loading the publications resource
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed publications list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pick the transport for `source`.
pub fn for_source(source: &Source, settings: &SiteSettings) -> anyhow::Result<Box<dyn Fetch>> {
    match source {
        Source::Url(base) => Ok(Box::new(http::HttpFetcher::new(base, settings)?)),
        Source::File(path) => Ok(Box::new(file::FileFetcher::new(path))),
    }
}

#[derive(Debug)]
pub enum LoadState {
    Loading,
    Loaded(Vec<PublicationRecord>),
    Failed(FetchError),
}

impl LoadState {
    /// Records to display. A failed load has none.
    pub fn records(&self) -> &[PublicationRecord] {
        match self {
            LoadState::Loaded(records) => records,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }
}

/// Owns the publications load for one page build.
///
/// The load runs at most once: later calls to [`PublicationList::load`] return the settled state
/// without touching the network again.
#[derive(Debug)]
pub struct PublicationList {
    state: LoadState,
    started: bool,
}

impl Default for PublicationList {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicationList {
    pub fn new() -> Self {
        PublicationList {
            state: LoadState::Loading,
            started: false,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn load<F: Fetch + ?Sized>(&mut self, fetcher: &F) -> &LoadState {
        if self.started {
            debug!("publications already requested, not fetching again");
            return &self.state;
        }
        self.started = true;

        let location = fetcher.location();
        debug!(%location, "fetching publications");
        let result = fetcher.fetch();
        self.settle(result);
        &self.state
    }

    /// Apply a fetch result. Only the first result after `Loading` counts; anything arriving once
    /// the state has settled is dropped.
    pub(crate) fn settle(&mut self, result: Result<Vec<PublicationRecord>, FetchError>) {
        if !matches!(self.state, LoadState::Loading) {
            debug!("discarding publications result for a settled list");
            return;
        }
        self.state = match result {
            Ok(records) => {
                info!(count = records.len(), "loaded publications");
                LoadState::Loaded(records)
            }
            Err(err) => {
                error!(error = %err, "Error fetching publications");
                LoadState::Failed(err)
            }
        };
    }
}

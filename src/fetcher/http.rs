use std::time::Duration;

use anyhow::Context;
use url::Url;

use crate::{
    config::SiteSettings,
    fetcher::{Fetch, FetchError, PUBLICATIONS_FILE},
    publication::{self, PublicationRecord},
};

/// Loads `publications.json` from a deployed site.
pub struct HttpFetcher {
    url: Url,
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(base: &Url, settings: &SiteSettings) -> anyhow::Result<Self> {
        let url = resource_url(base)
            .with_context(|| format!("cannot locate {PUBLICATIONS_FILE} under {base}"))?;
        let cfg = ureq::Agent::config_builder()
            .timeout_connect(Some(Duration::from_secs(settings.connect_timeout_secs)))
            .timeout_global(Some(Duration::from_secs(settings.timeout_secs)))
            .build();
        Ok(HttpFetcher {
            url,
            agent: ureq::Agent::new_with_config(cfg),
        })
    }
}

impl Fetch for HttpFetcher {
    fn location(&self) -> String {
        self.url.to_string()
    }

    fn fetch(&self) -> Result<Vec<PublicationRecord>, FetchError> {
        let transport = |source: ureq::Error| FetchError::Transport {
            url: self.url.to_string(),
            source,
        };
        let mut res = self
            .agent
            .get(self.url.as_str())
            .header("Accept", "application/json")
            .header("User-Agent", concat!("folio/", env!("CARGO_PKG_VERSION")))
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(status) => FetchError::Status {
                    url: self.url.to_string(),
                    status,
                },
                other => transport(other),
            })?;
        let body = res.body_mut().read_to_string().map_err(transport)?;
        Ok(publication::parse_list(&body)?)
    }
}

/// Resolve the publications resource against the site's base path.
///
/// The base always names a directory, so a missing trailing slash is added before joining:
/// `https://host/site` and `https://host/site/` both give `https://host/site/publications.json`.
pub fn resource_url(base: &Url) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);
    base.set_fragment(None);
    base.join(PUBLICATIONS_FILE)
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    fetcher::{Fetch, FetchError, PUBLICATIONS_FILE},
    publication::{self, PublicationRecord},
};

/// Loads publications from a local checkout of the site.
///
/// `root` is either the site directory, in which case `publications.json` is read from it, or the
/// JSON file itself.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(root: &Path) -> Self {
        let path = if root.is_dir() {
            root.join(PUBLICATIONS_FILE)
        } else {
            root.to_path_buf()
        };
        FileFetcher { path }
    }
}

impl Fetch for FileFetcher {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<PublicationRecord>, FetchError> {
        let body = fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(publication::parse_list(&body)?)
    }
}

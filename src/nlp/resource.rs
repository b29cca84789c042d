use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::DEFAULT_CHUNKER_RESOURCE;
use crate::error::{Error, Result};

/// Lexicon shipped with the crate, installed when no download source is set.
pub const BUNDLED_LEXICON: &str = include_str!("../../resources/en_pos_lexicon.tsv");

/// Finds model resources on disk and fetches missing ones.
pub trait ResourceProvider {
    /// Path of `name` if it is already available locally.
    fn locate(&self, name: &str) -> Option<PathBuf>;

    /// Makes `name` available locally and returns its path.
    fn fetch(&self, name: &str) -> Result<PathBuf>;
}

/// Resources live as plain files in one directory.
///
/// Missing resources are downloaded from `source_url/<name>` when a source is
/// configured. Without one, only the bundled lexicon can be installed.
pub struct CacheDirProvider {
    root: PathBuf,
    source_url: Option<String>,
    timeout: Duration,
}

impl CacheDirProvider {
    pub fn new(root: impl Into<PathBuf>, source_url: Option<String>) -> Self {
        Self {
            root: root.into(),
            source_url: source_url.map(|u| u.trim_end_matches('/').to_string()),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn download(&self, source: &str, name: &str) -> Result<Vec<u8>> {
        let url = format!("{}/{}", source, name);
        tracing::info!("Downloading resource {} from {}", name, url);

        let client = Client::builder().timeout(self.timeout).build()?;
        let response = client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ModelLoad(format!(
                "Download of {} failed with status {}",
                url, status
            )));
        }

        Ok(response.bytes()?.to_vec())
    }
}

impl ResourceProvider for CacheDirProvider {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        let path = self.root.join(name);
        path.is_file().then_some(path)
    }

    fn fetch(&self, name: &str) -> Result<PathBuf> {
        let contents = match self.source_url {
            Some(ref source) => self.download(source, name)?,
            None if name == DEFAULT_CHUNKER_RESOURCE => {
                tracing::info!("Installing bundled resource {}", name);
                BUNDLED_LEXICON.as_bytes().to_vec()
            }
            None => {
                return Err(Error::ModelLoad(format!(
                    "Resource {} is not available locally and no download source is configured",
                    name
                )))
            }
        };

        fs::create_dir_all(&self.root)?;
        let path = self.root.join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Loads resource `name`, fetching it first when it is not available.
///
/// A missing resource is fetched once and the load is retried once. Any
/// failure along the way is reported as [`Error::ModelLoad`].
pub fn load_with_fetch<T, F>(provider: &dyn ResourceProvider, name: &str, load: F) -> Result<T>
where
    F: Fn(&Path) -> Result<T>,
{
    let path = match provider.locate(name) {
        Some(path) => path,
        None => {
            tracing::warn!("Resource {} not found locally, fetching", name);
            provider.fetch(name).map_err(|e| as_load_error(name, e))?
        }
    };

    tracing::debug!("Loading resource {} from {}", name, path.display());
    load(&path).map_err(|e| as_load_error(name, e))
}

fn as_load_error(name: &str, err: Error) -> Error {
    match err {
        Error::ModelLoad(_) => err,
        other => Error::ModelLoad(format!("{}: {}", name, other)),
    }
}

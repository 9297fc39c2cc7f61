mod fetcher;
pub mod filename;
pub mod fingerprint;
mod headers;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::config::FetcherConfig;
use crate::error::FetchError;

pub use fetcher::{HttpFetcher, Method, Response, UReqFetcher};
pub use filename::Fallback;
pub use fingerprint::Fingerprint;
pub use headers::Headers;

#[cfg(test)]
pub use fetcher::{Call, MockFetcher};

/// Bounded waits for the two request kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub get: Duration,
    pub head: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            get: Duration::from_secs(10),
            head: Duration::from_secs(5),
        }
    }
}

/// A fully received GET response.
#[derive(Debug)]
pub struct Download {
    pub url: Url,
    pub headers: Headers,
    pub content: Vec<u8>,
}

pub struct Downloader<T: HttpFetcher> {
    fetcher: T,
    path: PathBuf,
    timeouts: Timeouts,
}

impl<T> Downloader<T>
where
    T: HttpFetcher,
{
    pub fn with_fetcher(path: impl Into<PathBuf>, fetcher: T) -> Self {
        Downloader {
            fetcher,
            path: path.into(),
            timeouts: Timeouts::default(),
        }
    }

    pub fn timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn fetcher(&self) -> &T {
        &self.fetcher
    }

    /// Creates the output directory if needed. Safe to call repeatedly.
    pub fn ensure_output_dir(&self) -> Result<(), FetchError> {
        fs::create_dir_all(&self.path).map_err(|err| FetchError::io("create", &self.path, err))
    }

    pub fn get(&self, url: &Url) -> Result<Download, FetchError> {
        let (headers, content) = self.call(Method::Get, url, self.timeouts.get)?;

        Ok(Download {
            url: url.clone(),
            headers,
            content,
        })
    }

    pub fn head(&self, url: &Url) -> Result<Headers, FetchError> {
        let (headers, _) = self.call(Method::Head, url, self.timeouts.head)?;

        Ok(headers)
    }

    /// Writes `content` to `<output_dir>/<filename>`, replacing any file of that name.
    pub fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, FetchError> {
        let file_path = self.path.join(filename);

        fs::write(&file_path, content).map_err(|err| FetchError::io("write", &file_path, err))?;

        tracing::info!(path = %file_path.display(), bytes = content.len(), "saved image");

        Ok(file_path)
    }

    /// Name of an existing file in the output directory with the same content.
    pub fn find_duplicate(&self, fingerprint: &Fingerprint) -> Result<Option<String>, FetchError> {
        fingerprint::find_match(&self.path, fingerprint)
    }

    fn call(
        &self,
        method: Method,
        url: &Url,
        timeout: Duration,
    ) -> Result<(Headers, Vec<u8>), FetchError> {
        tracing::debug!(method = method.as_str(), %url, ?timeout, "sending request");

        let response = self.fetcher.fetch(method, url.as_str(), timeout);

        match response {
            Response::Ok { headers, body } => Ok((headers, body)),

            Response::Status(code) => {
                tracing::warn!(method = method.as_str(), %url, code, "error status");
                Err(FetchError::Status {
                    url: url.to_string(),
                    code,
                })
            }

            Response::InvalidBody(reason) | Response::NetworkError(reason) => {
                tracing::warn!(method = method.as_str(), %url, %reason, "request failed");
                Err(FetchError::Network {
                    url: url.to_string(),
                    reason,
                })
            }
        }
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(config: &FetcherConfig) -> Self {
        let fetcher = UReqFetcher::new(&config.user_agent);

        Downloader::with_fetcher(&config.output_dir, fetcher).timeouts(config.timeouts())
    }
}

pub fn parse_url(url: &str) -> Result<Url, FetchError> {
    Url::parse(url.trim()).map_err(|err| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: err.to_string(),
    })
}

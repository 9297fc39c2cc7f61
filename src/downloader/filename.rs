use url::Url;

use super::fingerprint::Fingerprint;

/// Name used when a URL path has no basename. Each flow picks its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback {
    Fixed(&'static str),
    /// 1-based position within a batch.
    Indexed(usize),
    Fingerprint(Fingerprint),
}

impl Fallback {
    pub const BASIC: Self = Self::Fixed("downloaded_image.jpg");
    pub const SAFE: Self = Self::Fixed("secure_download.jpg");
    pub const INSPECT: Self = Self::Fixed("header_checked_image.jpg");

    pub fn name(&self) -> String {
        match self {
            Self::Fixed(name) => name.to_string(),
            Self::Indexed(position) => format!("image_{}.jpg", position),
            Self::Fingerprint(fingerprint) => format!("unique_image_{}.jpg", fingerprint.short()),
        }
    }
}

/// Everything after the last `/` of the URL path, if non-empty.
pub fn basename(url: &Url) -> Option<&str> {
    url.path()
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
}

pub fn derive(url: &Url, fallback: &Fallback) -> String {
    basename(url)
        .map(str::to_string)
        .unwrap_or_else(|| fallback.name())
}

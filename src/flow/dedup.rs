//! Download, then refuse to save bytes the output directory already holds.
//!
//! The comparison re-hashes every existing file on each call. There is no
//! index, so cost grows with the directory.

use super::{save_download, Abort, FlowResult, Outcome};
use crate::downloader::{parse_url, Downloader, Fallback, Fingerprint, HttpFetcher};

pub fn fetch<F: HttpFetcher>(downloader: &Downloader<F>, url: &str) -> FlowResult {
    downloader.ensure_output_dir()?;

    let url = parse_url(url)?;
    let download = downloader.get(&url)?;
    let fingerprint = Fingerprint::of(&download.content);

    if let Some(existing) = downloader.find_duplicate(&fingerprint)? {
        tracing::info!(%fingerprint, %existing, "duplicate content, not saving");
        return Ok(Outcome::Aborted(Abort::Duplicate(existing)));
    }

    let saved = save_download(downloader, &download, &Fallback::Fingerprint(fingerprint))?;

    Ok(Outcome::Saved(saved))
}

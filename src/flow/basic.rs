use super::{save_download, FlowResult, Outcome};
use crate::downloader::{parse_url, Downloader, Fallback, HttpFetcher};

/// GET `url` and save it, falling back to `downloaded_image.jpg`.
pub fn fetch<F: HttpFetcher>(downloader: &Downloader<F>, url: &str) -> FlowResult {
    downloader.ensure_output_dir()?;

    let url = parse_url(url)?;
    let download = downloader.get(&url)?;
    let saved = save_download(downloader, &download, &Fallback::BASIC)?;

    Ok(Outcome::Saved(saved))
}

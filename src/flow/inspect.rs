//! Show the response headers, then ask once. Only "n"/"no" stops the download.

use std::io::{BufRead, Write};

use super::{mebibytes, save_download, Abort, FlowResult, Outcome};
use crate::console::{Answer, Console};
use crate::downloader::{parse_url, Downloader, Fallback, HttpFetcher};

const NOT_PROVIDED: &str = "Not provided";

/// Header name and display label, in print order.
pub const INSPECTED_HEADERS: [(&str, &str); 5] = [
    ("content-type", "Content Type"),
    ("content-length", "File Size"),
    ("last-modified", "Last Modified"),
    ("server", "Server Type"),
    ("cache-control", "Cache Policy"),
];

pub fn fetch<F, R, W>(
    downloader: &Downloader<F>,
    console: &mut Console<R, W>,
    url: &str,
) -> FlowResult
where
    F: HttpFetcher,
    R: BufRead,
    W: Write,
{
    downloader.ensure_output_dir()?;

    let url = parse_url(url)?;

    console.say("Checking HTTP headers...")?;
    let headers = downloader.head(&url)?;

    console.say("")?;
    console.say("Header analysis:")?;
    console.say("-".repeat(40))?;
    for (name, label) in INSPECTED_HEADERS {
        console.say(format!("{}: {}", label, headers.get(name).unwrap_or(NOT_PROVIDED)))?;
    }

    if !headers.is_image() {
        console.say("")?;
        console.say(format!(
            "⚠ Caution: content type {:?} may not be an image",
            headers.content_type()
        ))?;
    }

    if let Some(length) = headers.content_length() {
        console.say(format!("File size is {:.2} MB", mebibytes(length)))?;
    }

    console.say("")?;
    if !console.confirm("Continue?", Answer::Yes)? {
        return Ok(Outcome::Aborted(Abort::Declined));
    }

    console.say("Downloading...")?;

    let download = downloader.get(&url)?;
    let saved = save_download(downloader, &download, &Fallback::INSPECT)?;

    Ok(Outcome::Saved(saved))
}

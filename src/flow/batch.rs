//! Several URLs in one run, each isolated from the others' failures.

use std::io::{self, BufRead, Write};

use super::{report, save_download, FlowResult, Outcome};
use crate::console::Console;
use crate::downloader::{parse_url, Downloader, Fallback, HttpFetcher};
use crate::error::FetchError;

pub const BATCH_PROMPT: &str = "Enter image URL (or press Enter to start downloading): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub fetched: usize,
    pub total: usize,
}

/// Splits each input on commas into one ordered list. Blank entries are kept
/// and later fail as invalid URLs, so they still count towards the total.
pub fn split_urls<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    inputs
        .iter()
        .flat_map(|input| input.as_ref().split(','))
        .map(|url| url.trim().to_string())
        .collect()
}

/// Prompts until an empty line and returns every URL entered.
pub fn collect_urls<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Vec<String>> {
    let mut inputs = Vec::new();

    loop {
        let input = console.ask(BATCH_PROMPT)?;
        if input.is_empty() {
            break;
        }
        inputs.push(input);
    }

    Ok(split_urls(&inputs))
}

/// Fetches every URL in order and prints a line per item plus a total.
pub fn fetch_all<F, R, W>(
    downloader: &Downloader<F>,
    console: &mut Console<R, W>,
    urls: &[String],
) -> Result<Summary, FetchError>
where
    F: HttpFetcher,
    R: BufRead,
    W: Write,
{
    if urls.is_empty() {
        console.say("No URLs provided.")?;
        return Ok(Summary {
            fetched: 0,
            total: 0,
        });
    }

    downloader.ensure_output_dir()?;

    let total = urls.len();
    let mut fetched = 0;

    for (position, url) in (1..).zip(urls) {
        console.say("")?;
        console.say(format!("[{}/{}] Fetching: {}", position, total, url))?;

        let result = fetch_one(downloader, url, position);
        if matches!(result, Ok(Outcome::Saved(_))) {
            fetched += 1;
        }

        report::item(console, &result)?;
    }

    console.say("")?;
    console.say(format!("{}/{} images fetched", fetched, total))?;

    tracing::info!(fetched, total, "batch finished");

    Ok(Summary { fetched, total })
}

fn fetch_one<F: HttpFetcher>(
    downloader: &Downloader<F>,
    url: &str,
    position: usize,
) -> FlowResult {
    let url = parse_url(url)?;
    let download = downloader.get(&url)?;
    let saved = save_download(downloader, &download, &Fallback::Indexed(position))?;

    Ok(Outcome::Saved(saved))
}

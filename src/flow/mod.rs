//! End-to-end fetch flows.
//!
//! Every flow ends in exactly one of: a saved file, a deliberate abort, or a
//! `FetchError`. None of them panic or stop the process; the result goes to
//! [`report`] for printing.

pub mod basic;
pub mod batch;
pub mod dedup;
pub mod inspect;
pub mod report;
pub mod safe;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::FetcherConfig;
use crate::console::Console;
use crate::downloader::{filename, Download, Downloader, Fallback, HttpFetcher};
use crate::error::FetchError;

pub const URL_PROMPT: &str = "Please enter the image URL: ";

#[derive(Debug, Clone, PartialEq)]
pub struct Saved {
    pub filename: String,
    pub path: PathBuf,
}

/// Reasons a flow stops without writing and without an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Abort {
    UnsupportedScheme(String),
    DeclinedContentType(String),
    DeclinedLargeFile(u64),
    Declined,
    /// Name of the file that already holds the same bytes.
    Duplicate(String),
}

impl fmt::Display for Abort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Abort::UnsupportedScheme(scheme) => write!(
                f,
                "Safety check failed: only HTTP/HTTPS URLs are allowed, got {:?}",
                scheme
            ),
            Abort::DeclinedContentType(content_type) => write!(
                f,
                "Download cancelled: content type {:?} is not an image",
                content_type
            ),
            Abort::DeclinedLargeFile(bytes) => write!(
                f,
                "Download cancelled: file is {:.1}MB",
                mebibytes(*bytes)
            ),
            Abort::Declined => write!(f, "Download cancelled after header review"),
            Abort::Duplicate(existing) => write!(f, "This image already exists as {}", existing),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Saved(Saved),
    Aborted(Abort),
}

pub type FlowResult = Result<Outcome, FetchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Basic,
    Batch,
    Safe,
    Dedup,
    Inspect,
}

impl Flow {
    fn banner(&self) -> &'static str {
        match self {
            Flow::Basic => "Image Fetcher: saves one image into the output folder",
            Flow::Batch => {
                "Multi-Image Fetcher: enter URLs (comma-separated is fine), empty line to start"
            }
            Flow::Safe => "Secure Image Fetcher: checks headers before downloading",
            Flow::Dedup => "Duplicate-Aware Image Fetcher: skips images you already have",
            Flow::Inspect => {
                "Header-Aware Image Fetcher: shows response headers before downloading"
            }
        }
    }
}

/// Runs one flow to completion and prints its result. Only console I/O errors escape.
pub fn run<F, R, W>(
    flow: Flow,
    downloader: &Downloader<F>,
    console: &mut Console<R, W>,
    urls: Vec<String>,
    config: &FetcherConfig,
) -> io::Result<()>
where
    F: HttpFetcher,
    R: BufRead,
    W: Write,
{
    console.say(flow.banner())?;
    console.say("")?;

    let single = match flow {
        Flow::Batch => return run_batch(downloader, console, urls),
        Flow::Basic => Single::Basic,
        Flow::Safe => Single::Safe,
        Flow::Dedup => Single::Dedup,
        Flow::Inspect => Single::Inspect,
    };

    let url = match urls.into_iter().next() {
        Some(url) => url,
        None => console.ask(URL_PROMPT)?,
    };

    let result = match single {
        Single::Basic => basic::fetch(downloader, &url),
        Single::Safe => safe::fetch(downloader, console, &url, config.max_image_bytes),
        Single::Dedup => dedup::fetch(downloader, &url),
        Single::Inspect => inspect::fetch(downloader, console, &url),
    };

    report::outcome(console, &result)
}

/// The flows that take exactly one URL.
enum Single {
    Basic,
    Safe,
    Dedup,
    Inspect,
}

fn run_batch<F, R, W>(
    downloader: &Downloader<F>,
    console: &mut Console<R, W>,
    urls: Vec<String>,
) -> io::Result<()>
where
    F: HttpFetcher,
    R: BufRead,
    W: Write,
{
    let urls = if urls.is_empty() {
        batch::collect_urls(console)?
    } else {
        batch::split_urls(&urls)
    };

    match batch::fetch_all(downloader, console, &urls) {
        Ok(_) => Ok(()),
        Err(err) => report::failure(console, &err),
    }
}

/// Names the file after the URL (or `fallback`) and writes it.
fn save_download<F: HttpFetcher>(
    downloader: &Downloader<F>,
    download: &Download,
    fallback: &Fallback,
) -> Result<Saved, FetchError> {
    let filename = filename::derive(&download.url, fallback);
    let path = downloader.save(&filename, &download.content)?;

    Ok(Saved { filename, path })
}

fn mebibytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

pub mod cli;
pub mod config;
pub mod console;
pub mod downloader;
pub mod error;
pub mod flow;
pub mod logging;

pub use downloader::{Downloader, HttpFetcher, UReqFetcher};
pub use error::FetchError;

mod ureq_fetcher;

use std::time::Duration;

use super::headers::Headers;

pub use ureq_fetcher::UReqFetcher;

#[cfg(test)]
mod mock_fetcher;

#[cfg(test)]
pub use mock_fetcher::{Call, MockFetcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
        }
    }
}

#[derive(Debug)]
pub enum Response {
    Ok { headers: Headers, body: Vec<u8> },
    Status(u16),
    InvalidBody(String),
    NetworkError(String),
}

impl Response {
    pub fn ok(headers: Headers, body: Vec<u8>) -> Self {
        Self::Ok { headers, body }
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn not_found() -> Self {
        Self::Status(404)
    }

    pub fn invalid_body(reason: impl Into<String>) -> Self {
        Self::InvalidBody(reason.into())
    }

    pub fn network_error(reason: impl Into<String>) -> Self {
        Self::NetworkError(reason.into())
    }
}

/// One blocking HTTP exchange per call. The whole body is read before returning.
pub trait HttpFetcher {
    fn fetch(&self, method: Method, url: &str, timeout: Duration) -> Response;
}

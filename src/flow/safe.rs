//! Check headers with HEAD before committing to a GET.
//!
//! Anything short of an explicit "y"/"yes" at a prompt aborts.

use std::io::{BufRead, Write};

use super::{mebibytes, save_download, Abort, FlowResult, Outcome};
use crate::console::{Answer, Console};
use crate::downloader::{parse_url, Downloader, Fallback, HttpFetcher};

pub fn fetch<F, R, W>(
    downloader: &Downloader<F>,
    console: &mut Console<R, W>,
    url: &str,
    max_image_bytes: u64,
) -> FlowResult
where
    F: HttpFetcher,
    R: BufRead,
    W: Write,
{
    downloader.ensure_output_dir()?;

    let url = parse_url(url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Ok(Outcome::Aborted(Abort::UnsupportedScheme(
            url.scheme().to_string(),
        )));
    }

    console.say("Performing safety checks...")?;
    let headers = downloader.head(&url)?;

    if !headers.is_image() {
        let content_type = headers.content_type();
        console.say(format!(
            "⚠ Warning: content type {:?} may not be an image",
            content_type
        ))?;
        if !console.confirm("Continue anyway?", Answer::No)? {
            return Ok(Outcome::Aborted(Abort::DeclinedContentType(content_type)));
        }
    }

    if let Some(length) = headers.content_length().filter(|length| *length > max_image_bytes) {
        console.say(format!("⚠ Large file detected: {:.1}MB", mebibytes(length)))?;
        if !console.confirm("Download large file?", Answer::No)? {
            return Ok(Outcome::Aborted(Abort::DeclinedLargeFile(length)));
        }
    }

    console.say("Safety checks passed, downloading")?;

    let download = downloader.get(&url)?;
    let saved = save_download(downloader, &download, &Fallback::SAFE)?;

    Ok(Outcome::Saved(saved))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::fetch;
    use crate::console::scripted;
    use crate::downloader::{Downloader, Headers, Method, MockFetcher, Response};
    use crate::flow::{Abort, Outcome};

    const LIMIT: u64 = 10 * 1024 * 1024;

    fn head(content_type: &str, length: u64) -> Response {
        Response::ok(
            Headers::new()
                .with("Content-Type", content_type)
                .with("Content-Length", &length.to_string()),
            Vec::new(),
        )
    }

    fn body(content: &[u8]) -> Response {
        Response::ok(Headers::new().with("Content-Type", "image/png"), content.to_vec())
    }

    #[test]
    fn test_ftp_is_rejected_before_any_request() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = Downloader::with_fetcher(dir.path(), MockFetcher::new(vec![]));

        let outcome = fetch(
            &downloader,
            &mut scripted(""),
            "ftp://files.example.com/cat.png",
            LIMIT,
        )
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::Aborted(Abort::UnsupportedScheme("ftp".to_string()))
        );
        assert!(downloader.fetcher().calls().is_empty());
    }

    #[test]
    fn test_image_within_limit_downloads_without_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MockFetcher::new(vec![head("image/png", 3), body(b"png")]);
        let downloader = Downloader::with_fetcher(dir.path(), fetcher);
        let mut console = scripted("");

        let outcome =
            fetch(&downloader, &mut console, "https://example.com/cat.png", LIMIT).unwrap();

        assert!(matches!(outcome, Outcome::Saved(ref saved) if saved.filename == "cat.png"));
        assert_eq!(downloader.fetcher().methods(), vec![Method::Head, Method::Get]);
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(!output.contains("[y/N]"));
    }

    #[test]
    fn test_empty_answer_aborts_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MockFetcher::new(vec![head("text/html; charset=utf-8", 512)]);
        let downloader = Downloader::with_fetcher(dir.path(), fetcher);

        let outcome = fetch(
            &downloader,
            &mut scripted("\n"),
            "https://example.com/page",
            LIMIT,
        )
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::Aborted(Abort::DeclinedContentType(
                "text/html; charset=utf-8".to_string()
            ))
        );
        assert_eq!(downloader.fetcher().methods(), vec![Method::Head]);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_answer_aborts_large_file() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MockFetcher::new(vec![head("image/jpeg", LIMIT + 1)]);
        let downloader = Downloader::with_fetcher(dir.path(), fetcher);
        let mut console = scripted("\n");

        let outcome =
            fetch(&downloader, &mut console, "https://example.com/huge.jpg", LIMIT).unwrap();

        assert_eq!(outcome, Outcome::Aborted(Abort::DeclinedLargeFile(LIMIT + 1)));
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Large file detected: 10.0MB"));
    }

    #[test]
    fn test_size_at_limit_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MockFetcher::new(vec![head("image/jpeg", LIMIT), body(b"jpeg")]);
        let downloader = Downloader::with_fetcher(dir.path(), fetcher);

        let outcome = fetch(
            &downloader,
            &mut scripted(""),
            "https://example.com/big.jpg",
            LIMIT,
        )
        .unwrap();

        assert!(matches!(outcome, Outcome::Saved(_)));
    }

    #[test]
    fn test_confirmed_overrides_proceed() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MockFetcher::new(vec![
            head("application/octet-stream", LIMIT * 2),
            body(b"blob"),
        ]);
        let downloader = Downloader::with_fetcher(dir.path(), fetcher);

        let outcome = fetch(
            &downloader,
            &mut scripted("y\nYES\n"),
            "https://example.com/",
            LIMIT,
        )
        .unwrap();

        let Outcome::Saved(saved) = outcome else {
            panic!("expected a saved file");
        };
        assert_eq!(saved.filename, "secure_download.jpg");
        assert_eq!(fs::read(saved.path).unwrap(), b"blob");
    }

    #[test]
    fn test_failed_head_aborts_without_get() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MockFetcher::new(vec![Response::status(405), body(b"png")]);
        let downloader = Downloader::with_fetcher(dir.path(), fetcher);

        let err = fetch(
            &downloader,
            &mut scripted(""),
            "https://example.com/cat.png",
            LIMIT,
        )
        .unwrap_err();

        assert!(err.is_network());
        assert_eq!(downloader.fetcher().methods(), vec![Method::Head]);
    }
}

use std::io::Read;
use std::time::Duration;

use ureq::Error::{Status, Transport};

use super::{HttpFetcher, Method, Response};
use crate::downloader::headers::Headers;

pub struct UReqFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher for UReqFetcher {
    fn fetch(&self, method: Method, url: &str, timeout: Duration) -> Response {
        let request = self.agent.request(method.as_str(), url).timeout(timeout);

        match request.call() {
            // ureq hands back 3xx replies it could not follow as `Ok`.
            Ok(response) if !(200..300).contains(&response.status()) => {
                Response::status(response.status())
            }

            Ok(response) => {
                let headers = response
                    .headers_names()
                    .iter()
                    .fold(Headers::new(), |headers, name| match response.header(name) {
                        Some(value) => headers.with(name, value),
                        None => headers,
                    });

                if method == Method::Head {
                    return Response::ok(headers, Vec::new());
                }

                let mut body = Vec::new();

                if let Err(err) = response.into_reader().read_to_end(&mut body) {
                    return Response::invalid_body(err.to_string());
                }

                Response::ok(headers, body)
            }

            Err(Status(code, _)) => Response::status(code),

            Err(Transport(transport)) => Response::network_error(transport.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new(user_agent: &str) -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(user_agent).build();

        UReqFetcher { agent }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new(concat!("image-fetcher/", env!("CARGO_PKG_VERSION")))
    }
}

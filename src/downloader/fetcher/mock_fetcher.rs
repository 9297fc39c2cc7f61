use std::cell::RefCell;
use std::time::Duration;

use super::{HttpFetcher, Method, Response};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub url: String,
}

pub struct MockFetcher {
    responses: RefCell<Vec<Response>>,
    calls: RefCell<Vec<Call>>,
}

impl HttpFetcher for MockFetcher {
    fn fetch(&self, method: Method, url: &str, _timeout: Duration) -> Response {
        self.calls.borrow_mut().push(Call {
            method,
            url: url.to_string(),
        });

        let mut responses = self.responses.borrow_mut();

        if responses.is_empty() {
            Response::network_error("no scripted response left")
        } else {
            responses.remove(0)
        }
    }
}

impl MockFetcher {
    pub fn new(responses: Vec<Response>) -> Self {
        Self {
            responses: RefCell::new(responses),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn methods(&self) -> Vec<Method> {
        self.calls.borrow().iter().map(|call| call.method).collect()
    }
}

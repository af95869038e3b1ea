//! Test Transport
//!
//! Records every prepared request and replays queued responses.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::{ApiError, ApiResult};
use super::{ApiClient, Method, PreparedRequest, RawResponse, Transport};

pub const BASE_URL: &str = "https://care.test/api";
pub const TOKEN: &str = "tok-123";

#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<PreparedRequest>>>,
    responses: Rc<RefCell<VecDeque<ApiResult<RawResponse>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response
    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: body.to_string() }));
        self
    }

    /// Queue a transport-level failure
    pub fn fail(self, err: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.borrow().clone()
    }

    /// The only request seen; panics otherwise
    pub fn single(&self) -> PreparedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

impl Transport for RecordingTransport {
    async fn execute(&self, request: PreparedRequest) -> ApiResult<RawResponse> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse { status: 200, body: "null".to_string() }))
    }
}

/// Client over a recording transport sharing its log with the caller's handle
pub fn client(transport: RecordingTransport) -> ApiClient<RecordingTransport> {
    ApiClient::new(BASE_URL, TOKEN, transport)
}

/// Assert method, URL and bearer header of a recorded request
pub fn assert_call(request: &PreparedRequest, method: Method, path: &str) {
    assert_eq!(request.method, method);
    assert_eq!(request.url, format!("{}{}", BASE_URL, path));
    assert_eq!(request.header("Authorization"), Some(format!("Bearer {}", TOKEN).as_str()));
}

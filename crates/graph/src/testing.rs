//! In-memory adapter recording every request it is handed.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use graphid_core::request::BASE_URL_KEY;
use graphid_core::{GraphResult, RawResponse, RequestAdapter, RequestInformation};
use http::{HeaderMap, Method, StatusCode};

use crate::client::GraphServiceClient;

pub const BASE_URL: &str = "https://graph.test/v1.0";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
    pub raw_body: Option<bytes::Bytes>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Default)]
pub struct RecordingAdapter {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<RawResponse>>,
}

impl RecordingAdapter {
    pub fn client() -> (GraphServiceClient, Arc<Self>) {
        let adapter = Arc::new(Self::default());
        (GraphServiceClient::new(adapter.clone()), adapter)
    }

    /// Queue a response; once the queue is empty every request gets `204`.
    pub fn respond(&self, status: StatusCode, body: impl Into<bytes::Bytes>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(RawResponse::new(status, body));
    }

    pub fn respond_json(&self, body: serde_json::Value) {
        self.respond(StatusCode::OK, body.to_string());
    }

    pub fn last(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl RequestAdapter for RecordingAdapter {
    fn base_url(&self) -> &str {
        BASE_URL
    }

    async fn execute(&self, mut request: RequestInformation) -> GraphResult<RawResponse> {
        request
            .path_parameters
            .insert(BASE_URL_KEY.to_string(), BASE_URL.to_string());
        let url = request.uri()?;
        let body = request
            .content
            .as_ref()
            .and_then(|c| serde_json::from_slice(c).ok());
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method.clone(),
            url,
            headers: request.headers.clone(),
            body,
            raw_body: request.content.clone(),
        });
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| RawResponse::new(StatusCode::NO_CONTENT, "")))
    }
}

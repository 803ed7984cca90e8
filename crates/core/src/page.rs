use std::sync::Arc;

use futures::{Stream, TryStreamExt, stream};
use http::header::ACCEPT;
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapter::{RequestAdapter, RequestAdapterExt};
use crate::error::{GraphError, GraphResult};
use crate::request::{JSON_CONTENT_TYPE, RequestInformation};

/// One page of an OData collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResponse<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "@odata.nextLink", default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
    #[serde(rename = "@odata.count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self {
            value: Vec::new(),
            next_link: None,
            count: None,
        }
    }
}

/// Walks a collection by following `@odata.nextLink` until the service stops
/// returning one.
pub struct PageIterator<T> {
    adapter: Arc<dyn RequestAdapter>,
    headers: HeaderMap,
    pending: Option<CollectionResponse<T>>,
    next_link: Option<String>,
    pages: usize,
}

impl<T> PageIterator<T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub fn new(adapter: Arc<dyn RequestAdapter>, first: CollectionResponse<T>) -> Self {
        Self {
            adapter,
            headers: HeaderMap::new(),
            pending: Some(first),
            next_link: None,
            pages: 0,
        }
    }

    /// Headers sent with every follow-up request, e.g. `ConsistencyLevel`.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages
    }

    pub async fn next_page(&mut self) -> GraphResult<Option<Vec<T>>> {
        if let Some(first) = self.pending.take() {
            self.next_link = first.next_link;
            self.pages += 1;
            return Ok(Some(first.value));
        }

        let Some(url) = self.next_link.take() else {
            return Ok(None);
        };

        let mut info = RequestInformation::from_raw_url(Method::GET, url);
        info.headers = self.headers.clone();
        info.try_add_header(ACCEPT, JSON_CONTENT_TYPE);

        let page: Option<CollectionResponse<T>> = self.adapter.send_json(info).await?;
        let Some(page) = page else {
            return Ok(None);
        };
        self.next_link = page.next_link;
        self.pages += 1;
        debug!(items = page.value.len(), page = self.pages, "fetched page");
        Ok(Some(page.value))
    }

    pub async fn collect_all(mut self) -> GraphResult<Vec<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page);
        }
        Ok(items)
    }

    /// Stream individual items across all pages.
    pub fn into_stream(self) -> impl Stream<Item = GraphResult<T>> + Send {
        stream::try_unfold(self, |mut pages| async move {
            Ok::<_, GraphError>(pages.next_page().await?.map(|page| (page, pages)))
        })
        .map_ok(|page| stream::iter(page.into_iter().map(Ok::<T, GraphError>)))
        .try_flatten()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use futures::StreamExt;
    use http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::adapter::RawResponse;

    #[derive(Default)]
    struct Pages {
        responses: Mutex<VecDeque<serde_json::Value>>,
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RequestAdapter for Pages {
        fn base_url(&self) -> &str {
            "https://graph.test/v1.0"
        }

        async fn execute(&self, request: RequestInformation) -> GraphResult<RawResponse> {
            self.urls.lock().unwrap().push(request.uri()?);
            let body = self.responses.lock().unwrap().pop_front().unwrap();
            Ok(RawResponse::new(
                StatusCode::OK,
                serde_json::to_vec(&body).unwrap(),
            ))
        }
    }

    fn first_page() -> CollectionResponse<String> {
        serde_json::from_value(json!({
            "value": ["a", "b"],
            "@odata.nextLink": "https://graph.test/v1.0/identity/userFlowAttributes?$skiptoken=1"
        }))
        .unwrap()
    }

    fn adapter() -> Arc<Pages> {
        let pages = Pages::default();
        pages.responses.lock().unwrap().extend([
            json!({
                "value": ["c"],
                "@odata.nextLink": "https://graph.test/v1.0/identity/userFlowAttributes?$skiptoken=2"
            }),
            json!({ "value": ["d", "e"] }),
        ]);
        Arc::new(pages)
    }

    #[tokio::test]
    async fn collects_every_page() {
        let pages = adapter();
        let iter = PageIterator::new(pages.clone(), first_page());
        let items = iter.collect_all().await.unwrap();

        assert_eq!(items, vec!["a", "b", "c", "d", "e"]);
        let urls = pages.urls.lock().unwrap();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].ends_with("$skiptoken=1"));
        assert!(urls[1].ends_with("$skiptoken=2"));
    }

    #[tokio::test]
    async fn single_page_makes_no_requests() {
        let pages = Arc::new(Pages::default());
        let first: CollectionResponse<String> =
            serde_json::from_value(json!({ "value": ["only"], "@odata.count": 1 })).unwrap();
        assert_eq!(first.count, Some(1));

        let mut iter = PageIterator::new(pages.clone(), first);
        assert_eq!(iter.next_page().await.unwrap(), Some(vec!["only".to_string()]));
        assert_eq!(iter.next_page().await.unwrap(), None);
        assert_eq!(iter.pages_fetched(), 1);
        assert!(pages.urls.lock().unwrap().is_empty());
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Attribute {
        id: String,
    }

    #[tokio::test]
    async fn pages_items_without_default() {
        let pages = Arc::new(Pages::default());
        pages.responses.lock().unwrap().push_back(json!({}));
        let first: CollectionResponse<Attribute> = serde_json::from_value(json!({
            "value": [{ "id": "city" }],
            "@odata.nextLink": "https://graph.test/v1.0/identity/userFlowAttributes?$skiptoken=1"
        }))
        .unwrap();

        let items = PageIterator::new(pages, first).collect_all().await.unwrap();

        assert_eq!(items, vec![Attribute { id: "city".into() }]);
    }

    #[tokio::test]
    async fn streams_items() {
        let stream = PageIterator::new(adapter(), first_page()).into_stream();
        let items: Vec<String> = stream.map(Result::unwrap).collect().await;
        assert_eq!(items.len(), 5);
        assert_eq!(items.last().map(String::as_str), Some("e"));
    }
}

#[macro_use]
mod macros;

pub mod adapter;
pub mod auth;
pub mod client;
pub mod cloud;
pub mod identity;
pub mod models;

#[cfg(test)]
pub(crate) mod testing;

pub use adapter::HttpRequestAdapter;
pub use auth::{AccessTokenProvider, ClientCredentials, ClientCredentialsProvider, StaticTokenProvider};
pub use client::GraphServiceClient;
pub use cloud::NationalCloud;

pub use graphid_core::{
    BaseRequestBuilder, CollectionQueryParameters, CollectionResponse, CountQueryParameters,
    DefaultRequestConfiguration, FunctionQueryParameters, GraphError, GraphResult, ItemQueryParameters, ODataError,
    PageIterator, RawResponse, RequestAdapter, RequestAdapterExt, RequestBuilder,
    RequestConfiguration, RequestInformation,
};

//! Request abstractions shared by the graphid request builders.

pub mod adapter;
pub mod builder;
pub mod error;
pub mod page;
pub mod query;
pub mod request;
pub mod uri_template;

pub use adapter::{RawResponse, RequestAdapter, RequestAdapterExt};
pub use builder::{BaseRequestBuilder, RequestBuilder};
pub use error::{GraphError, GraphResult, ODataError};
pub use page::{CollectionResponse, PageIterator};
pub use query::{
    CollectionQueryParameters, CountQueryParameters, FunctionQueryParameters, ItemQueryParameters,
    QueryParameters,
};
pub use request::{DefaultRequestConfiguration, RequestConfiguration, RequestInformation};
pub use uri_template::{PathParameters, QueryValue};

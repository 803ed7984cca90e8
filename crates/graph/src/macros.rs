//! `request_builder!` declares one endpoint node: the struct, its
//! [`RequestBuilder`](crate::RequestBuilder) impl, `with_url`, and the listed
//! operations.
//!
//! Operations:
//!
//! - `get(Q) -> T;` GET with query parameters `Q`, JSON response `T`
//! - `list(T);` GET of a collection of `T` plus `get_all`
//! - `list(T, Q);` the same with query parameters `Q` instead of the full
//!   collection set
//! - `count;` GET of a `$count` segment
//! - `post(B) -> T;` / `post(B);` POST a JSON body
//! - `patch(B) -> T;` PATCH a JSON body
//! - `put(B);` PUT a JSON body
//! - `delete;` DELETE
//! - `content;` GET and PUT of raw `$value` content
//!
//! Attributes (doc comments) written before an operation are attached to the
//! generated method.

macro_rules! request_builder {
    (
        $(#[$meta:meta])*
        $name:ident => $template:literal;
        $($ops:tt)*
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: $crate::BaseRequestBuilder,
        }

        impl $crate::RequestBuilder for $name {
            const URL_TEMPLATE: &'static str = $template;

            fn from_base(base: $crate::BaseRequestBuilder) -> Self {
                Self { base }
            }

            fn base(&self) -> &$crate::BaseRequestBuilder {
                &self.base
            }
        }

        impl $name {
            /// Returns a request builder with the provided arbitrary URL. Using this
            /// method means any other path or query parameters are ignored.
            pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
                <Self as $crate::RequestBuilder>::from_raw_url(raw_url, self.base.adapter().clone())
            }
        }

        request_builder!(@ops $name; $($ops)*);
    };

    (@ops $name:ident;) => {};

    (@ops $name:ident; $(#[$m:meta])* get($q:ty) -> $ret:ty; $($rest:tt)*) => {
        impl $name {
            $(#[$m])*
            pub async fn get(
                &self,
                config: Option<$crate::RequestConfiguration<$q>>,
            ) -> $crate::GraphResult<Option<$ret>> {
                use $crate::RequestAdapterExt as _;
                let info = self.to_get_request_information(config);
                self.base.adapter().send_json(info).await
            }

            pub fn to_get_request_information(
                &self,
                config: Option<$crate::RequestConfiguration<$q>>,
            ) -> $crate::RequestInformation {
                self.base.request_information(::http::Method::GET, config)
            }
        }
        request_builder!(@ops $name; $($rest)*);
    };

    (@ops $name:ident; $(#[$m:meta])* list($entity:ty, $q:ty); $($rest:tt)*) => {
        request_builder!(@ops $name;
            $(#[$m])*
            get($q) -> $crate::CollectionResponse<$entity>;
        );
        impl $name {
            /// Fetches the collection and follows `@odata.nextLink` until every
            /// page has been read.
            pub async fn get_all(
                &self,
                config: Option<$crate::RequestConfiguration<$q>>,
            ) -> $crate::GraphResult<Vec<$entity>> {
                let headers = config
                    .as_ref()
                    .map(|c| c.headers.clone())
                    .unwrap_or_default();
                let Some(first) = self.get(config).await? else {
                    return Ok(Vec::new());
                };
                $crate::PageIterator::new(self.base.adapter().clone(), first)
                    .with_headers(headers)
                    .collect_all()
                    .await
            }
        }
        request_builder!(@ops $name; $($rest)*);
    };

    (@ops $name:ident; $(#[$m:meta])* list($entity:ty); $($rest:tt)*) => {
        request_builder!(@ops $name;
            $(#[$m])*
            list($entity, $crate::CollectionQueryParameters);
            $($rest)*
        );
    };

    (@ops $name:ident; $(#[$m:meta])* count; $($rest:tt)*) => {
        impl $name {
            $(#[$m])*
            /// Get the number of the resource.
            pub async fn get(
                &self,
                config: Option<$crate::RequestConfiguration<$crate::CountQueryParameters>>,
            ) -> $crate::GraphResult<Option<i32>> {
                use $crate::RequestAdapterExt as _;
                let info = self.to_get_request_information(config);
                self.base.adapter().send_primitive(info).await
            }

            pub fn to_get_request_information(
                &self,
                config: Option<$crate::RequestConfiguration<$crate::CountQueryParameters>>,
            ) -> $crate::RequestInformation {
                self.base.request_information_accepting(
                    ::http::Method::GET,
                    config,
                    "text/plain;q=0.9",
                )
            }
        }
        request_builder!(@ops $name; $($rest)*);
    };

    (@ops $name:ident; $(#[$m:meta])* post($body:ty) -> $ret:ty; $($rest:tt)*) => {
        impl $name {
            $(#[$m])*
            pub async fn post(
                &self,
                body: &$body,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<Option<$ret>> {
                use $crate::RequestAdapterExt as _;
                let info = self.to_post_request_information(body, config)?;
                self.base.adapter().send_json(info).await
            }

            pub fn to_post_request_information(
                &self,
                body: &$body,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<$crate::RequestInformation> {
                self.base
                    .request_information_with_body(::http::Method::POST, body, config)
            }
        }
        request_builder!(@ops $name; $($rest)*);
    };

    (@ops $name:ident; $(#[$m:meta])* post($body:ty); $($rest:tt)*) => {
        impl $name {
            $(#[$m])*
            pub async fn post(
                &self,
                body: &$body,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<()> {
                use $crate::RequestAdapterExt as _;
                let info = self.to_post_request_information(body, config)?;
                self.base.adapter().send_no_content(info).await
            }

            pub fn to_post_request_information(
                &self,
                body: &$body,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<$crate::RequestInformation> {
                self.base
                    .request_information_with_body(::http::Method::POST, body, config)
            }
        }
        request_builder!(@ops $name; $($rest)*);
    };

    (@ops $name:ident; $(#[$m:meta])* patch($body:ty) -> $ret:ty; $($rest:tt)*) => {
        impl $name {
            $(#[$m])*
            pub async fn patch(
                &self,
                body: &$body,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<Option<$ret>> {
                use $crate::RequestAdapterExt as _;
                let info = self.to_patch_request_information(body, config)?;
                self.base.adapter().send_json(info).await
            }

            pub fn to_patch_request_information(
                &self,
                body: &$body,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<$crate::RequestInformation> {
                self.base
                    .request_information_with_body(::http::Method::PATCH, body, config)
            }
        }
        request_builder!(@ops $name; $($rest)*);
    };

    (@ops $name:ident; $(#[$m:meta])* put($body:ty); $($rest:tt)*) => {
        impl $name {
            $(#[$m])*
            pub async fn put(
                &self,
                body: &$body,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<()> {
                use $crate::RequestAdapterExt as _;
                let info = self.to_put_request_information(body, config)?;
                self.base.adapter().send_no_content(info).await
            }

            pub fn to_put_request_information(
                &self,
                body: &$body,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<$crate::RequestInformation> {
                self.base
                    .request_information_with_body(::http::Method::PUT, body, config)
            }
        }
        request_builder!(@ops $name; $($rest)*);
    };

    (@ops $name:ident; $(#[$m:meta])* delete; $($rest:tt)*) => {
        impl $name {
            $(#[$m])*
            pub async fn delete(
                &self,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<()> {
                use $crate::RequestAdapterExt as _;
                let info = self.to_delete_request_information(config);
                self.base.adapter().send_no_content(info).await
            }

            pub fn to_delete_request_information(
                &self,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::RequestInformation {
                self.base.request_information(::http::Method::DELETE, config)
            }
        }
        request_builder!(@ops $name; $($rest)*);
    };

    (@ops $name:ident; $(#[$m:meta])* content; $($rest:tt)*) => {
        impl $name {
            $(#[$m])*
            pub async fn get(
                &self,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<Option<::bytes::Bytes>> {
                use $crate::RequestAdapterExt as _;
                let info = self.to_get_request_information(config);
                self.base.adapter().send_bytes(info).await
            }

            pub fn to_get_request_information(
                &self,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::RequestInformation {
                self.base.request_information_accepting(
                    ::http::Method::GET,
                    config,
                    "application/octet-stream, application/json",
                )
            }

            $(#[$m])*
            pub async fn put(
                &self,
                content: ::bytes::Bytes,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<()> {
                use $crate::RequestAdapterExt as _;
                let info = self.to_put_request_information(content, config)?;
                self.base.adapter().send_no_content(info).await
            }

            pub fn to_put_request_information(
                &self,
                content: ::bytes::Bytes,
                config: Option<$crate::DefaultRequestConfiguration>,
            ) -> $crate::GraphResult<$crate::RequestInformation> {
                self.base.request_information_with_stream(
                    ::http::Method::PUT,
                    content,
                    "application/octet-stream",
                    config,
                )
            }
        }
        request_builder!(@ops $name; $($rest)*);
    };
}

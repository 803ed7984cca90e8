//! Typed OData query options.

use crate::uri_template::{QueryMap, QueryValue};

/// Anything that can contribute query parameters to a request.
///
/// Parameter names are the template variable names, e.g. `%24select`.
pub trait QueryParameters {
    fn write_to(&self, query: &mut QueryMap);
}

impl QueryParameters for () {
    fn write_to(&self, _query: &mut QueryMap) {}
}

fn put<V: Into<QueryValue>>(query: &mut QueryMap, name: &str, value: Option<V>) {
    if let Some(value) = value {
        query.insert(name.to_string(), value.into());
    }
}

fn put_list(query: &mut QueryMap, name: &str, values: &[String]) {
    if !values.is_empty() {
        query.insert(name.to_string(), QueryValue::List(values.to_vec()));
    }
}

fn strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// Query options accepted when listing a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionQueryParameters {
    /// Include count of items
    pub count: Option<bool>,
    /// Expand related entities
    pub expand: Vec<String>,
    /// Filter items by property values
    pub filter: Option<String>,
    /// Order items by property values
    pub orderby: Vec<String>,
    /// Search items by search phrases
    pub search: Option<String>,
    /// Select properties to be returned
    pub select: Vec<String>,
    /// Skip the first n items
    pub skip: Option<i32>,
    /// Show only the first n items
    pub top: Option<i32>,
}

impl CollectionQueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    pub fn expand<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = strings(properties);
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn orderby<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderby = strings(properties);
        self
    }

    /// Search phrase, sent as-is. Graph expects it wrapped in double quotes.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn select<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = strings(properties);
        self
    }

    pub fn skip(mut self, skip: i32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }
}

impl QueryParameters for CollectionQueryParameters {
    fn write_to(&self, query: &mut QueryMap) {
        put(query, "%24count", self.count);
        put_list(query, "%24expand", &self.expand);
        put(query, "%24filter", self.filter.clone());
        put_list(query, "%24orderby", &self.orderby);
        put(query, "%24search", self.search.clone());
        put_list(query, "%24select", &self.select);
        put(query, "%24skip", self.skip);
        put(query, "%24top", self.top);
    }
}

/// Query options accepted when reading a single entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQueryParameters {
    pub expand: Vec<String>,
    pub select: Vec<String>,
}

impl ItemQueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = strings(properties);
        self
    }

    pub fn select<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = strings(properties);
        self
    }
}

impl QueryParameters for ItemQueryParameters {
    fn write_to(&self, query: &mut QueryMap) {
        put_list(query, "%24expand", &self.expand);
        put_list(query, "%24select", &self.select);
    }
}

/// Query options of collection-valued functions such as
/// `availableProviderTypes()`, which cannot select, expand or order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionQueryParameters {
    pub count: Option<bool>,
    pub filter: Option<String>,
    pub search: Option<String>,
    pub skip: Option<i32>,
    pub top: Option<i32>,
}

impl FunctionQueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn skip(mut self, skip: i32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }
}

impl QueryParameters for FunctionQueryParameters {
    fn write_to(&self, query: &mut QueryMap) {
        put(query, "%24count", self.count);
        put(query, "%24filter", self.filter.clone());
        put(query, "%24search", self.search.clone());
        put(query, "%24skip", self.skip);
        put(query, "%24top", self.top);
    }
}

/// Query options accepted by `$count` segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountQueryParameters {
    pub filter: Option<String>,
    pub search: Option<String>,
}

impl CountQueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

impl QueryParameters for CountQueryParameters {
    fn write_to(&self, query: &mut QueryMap) {
        put(query, "%24filter", self.filter.clone());
        put(query, "%24search", self.search.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_parameters_only_write_what_is_set() {
        let params = CollectionQueryParameters::new()
            .select(["id", "displayName"])
            .top(10);
        let mut query = QueryMap::new();
        params.write_to(&mut query);

        assert_eq!(query.len(), 2);
        assert_eq!(
            query.get("%24select"),
            Some(&QueryValue::List(vec!["id".into(), "displayName".into()]))
        );
        assert_eq!(query.get("%24top"), Some(&QueryValue::Int(10)));
    }

    #[test]
    fn function_parameters() {
        let mut query = QueryMap::new();
        FunctionQueryParameters::new()
            .filter("startswith(name,'G')")
            .top(5)
            .count(true)
            .write_to(&mut query);

        assert_eq!(query.len(), 3);
        assert_eq!(query.get("%24top"), Some(&QueryValue::Int(5)));
        assert_eq!(query.get("%24count"), Some(&QueryValue::Bool(true)));
    }

    #[test]
    fn count_parameters() {
        let mut query = QueryMap::new();
        CountQueryParameters::new()
            .filter("isTrusted eq true")
            .write_to(&mut query);
        assert_eq!(
            query.get("%24filter"),
            Some(&QueryValue::String("isTrusted eq true".into()))
        );
        assert!(!query.contains_key("%24search"));
    }

    #[test]
    fn unit_writes_nothing() {
        let mut query = QueryMap::new();
        ().write_to(&mut query);
        assert!(query.is_empty());
    }
}

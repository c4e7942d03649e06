use crate::enums::HttpMethod;
use crate::path::segment_path;
use serde_json::Value;
use smallvec::SmallVec;

/// Per-request matcher state, created once per incoming request and dropped
/// after the response is emitted. Holds everything a handler may read: the
/// method, the segmented path, the captured parameters in traversal order,
/// the decoded body and the query pairs. There is no ambient request state
/// anywhere else.
#[derive(Debug)]
pub struct RequestContext {
    method: HttpMethod,
    path: String,
    segments: Vec<String>,
    params: SmallVec<[String; 4]>,
    body: Value,
    query: Vec<(String, String)>,
}

impl RequestContext {
    pub fn new(method: HttpMethod, path: &str, body: Value) -> Self {
        Self {
            method,
            path: path.to_string(),
            segments: segment_path(path),
            params: SmallVec::new(),
            body,
            query: Vec::new(),
        }
    }

    pub fn with_query<I>(mut self, query: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.query = query.into_iter().collect();
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub(crate) fn segment_at(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// Captured path parameters, in the order their patterns matched.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    pub(crate) fn push_param(&mut self, value: String) {
        self.params.push(value);
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

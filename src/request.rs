use crate::enums::HttpMethod;
use url::form_urlencoded;

/// The request facts the host environment hands to the router: it is the
/// host's job to read these off the wire. The router never fetches
/// anything itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: HttpMethod,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    pub query: Vec<(String, String)>,
}

impl Request {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            content_type: None,
            body: Vec::new(),
            query: Vec::new(),
        }
    }

    pub fn with_body(mut self, content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.content_type = Some(content_type.into());
        self.body = body.into();
        self
    }

    pub fn with_query_pairs<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.query = pairs.into_iter().collect();
        self
    }

    /// Parses a raw query string (`a=1&b=2`) for hosts that do not
    /// pre-parse it.
    pub fn with_query_string(mut self, raw: &str) -> Self {
        self.query = form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect();
        self
    }
}

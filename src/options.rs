use crate::enums::ContentType;
use thiserror::Error;

/// Router-wide configuration, fixed before any request is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterOptions {
    /// Body encoding the router expects and decodes.
    pub request_content_type: ContentType,
    /// Echo the normalized path, query and method into every response.
    pub include_request: bool,
    /// Leave the numeric status unset for hosts that manage it separately.
    pub suppress_status: bool,
    /// Extra response headers, emitted in order after the JSON
    /// content-type. CORS headers go here when wanted.
    pub headers: Vec<(String, String)>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            request_content_type: ContentType::Json,
            include_request: false,
            suppress_status: false,
            headers: Vec::new(),
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("response header name must not be empty")]
    EmptyHeaderName,
    #[error("response header name '{name}' contains invalid characters")]
    InvalidHeaderName { name: String },
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn request_content_type(mut self, content_type: ContentType) -> Self {
        self.options.request_content_type = content_type;
        self
    }

    pub fn include_request(mut self, value: bool) -> Self {
        self.options.include_request = value;
        self
    }

    pub fn suppress_status(mut self, value: bool) -> Self {
        self.options.suppress_status = value;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.push((name.into(), value.into()));
        self
    }

    pub fn headers<I>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.options.headers.extend(headers);
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        for (name, _) in &self.options.headers {
            if name.is_empty() {
                return Err(RouterOptionsError::EmptyHeaderName);
            }
            if name
                .bytes()
                .any(|byte| byte <= 0x20 || byte == b':' || byte >= 0x7f)
            {
                return Err(RouterOptionsError::InvalidHeaderName { name: name.clone() });
            }
        }
        Ok(self.options)
    }
}

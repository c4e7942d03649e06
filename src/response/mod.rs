use crate::dispatch::RequestContext;
use crate::enums::StatusCode;
use crate::errors::RouteError;
use crate::options::RouterOptions;
use serde_json::{Map, Value};

/// A handler's terminal result: a JSON payload plus the status code it
/// should travel with. The emitter decides the `response`/`error` envelope
/// key purely from the code range.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub payload: Value,
}

impl Reply {
    pub fn new(status: StatusCode, payload: Value) -> Self {
        Self { status, payload }
    }

    pub fn ok(payload: Value) -> Self {
        Self::new(StatusCode::Ok, payload)
    }

    pub fn created(payload: Value) -> Self {
        Self::new(StatusCode::Created, payload)
    }

    /// A 204 reply; the null payload makes the emitter skip the body.
    pub fn no_content() -> Self {
        Self::new(StatusCode::NoContent, Value::Null)
    }

    pub fn from_error(error: &RouteError) -> Self {
        Self::new(error.status(), Value::String(error.to_string()))
    }
}

/// What goes on the wire: an optional numeric status (absent when the host
/// manages status codes itself), the response headers in emission order and
/// the serialized JSON body. Writing this out is the single terminal action
/// of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct WireResponse {
    pub status: Option<u16>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[tracing::instrument(level = "trace", skip(reply, ctx, options), fields(status = reply.status.code()))]
pub fn emit(reply: &Reply, ctx: &RequestContext, options: &RouterOptions) -> WireResponse {
    let mut headers = Vec::with_capacity(options.headers.len() + 1);
    headers.push(("Content-Type".to_string(), "application/json".to_string()));
    headers.extend(options.headers.iter().cloned());

    let status = (!options.suppress_status).then(|| reply.status.code());

    if reply.payload.is_null() {
        return WireResponse {
            status,
            headers,
            body: String::new(),
        };
    }

    let mut out = Map::new();
    if options.include_request {
        out.insert("request".to_string(), Value::String(request_echo(ctx)));
    }
    let key = if reply.status.is_success() {
        "response"
    } else {
        "error"
    };
    out.insert(key.to_string(), reply.payload.clone());

    let body = serde_json::to_string(&Value::Object(out))
        .unwrap_or_else(|_| r#"{"error":"response serialization failed"}"#.to_string());

    WireResponse {
        status,
        headers,
        body,
    }
}

/// `/users/42 [ verbose = 1 ] GET`
fn request_echo(ctx: &RequestContext) -> String {
    let query = ctx
        .query()
        .iter()
        .map(|(key, value)| format!("{key} = {value}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "/{} [ {} ] {}",
        ctx.segments().join("/"),
        query,
        ctx.method()
    )
}

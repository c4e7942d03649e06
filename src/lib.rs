mod body;
pub mod dispatch;
pub mod enums;
pub mod errors;
pub mod options;
pub mod path;
mod request;
pub mod resource;
pub mod response;
pub mod tree;

pub use dispatch::{RequestContext, dispatch};
pub use enums::{ContentType, HttpMethod, StatusCode, UnknownMethod};
pub use errors::{RouteError, RouteResult};
pub use options::{RouterOptions, RouterOptionsBuilder, RouterOptionsError};
pub use request::Request;
pub use response::{Reply, WireResponse, emit};
pub use tree::{Handler, HandlerResult, PatternError, RouteTable, SegmentPattern, check};

use crate::body::decode_body;
use serde_json::Value;

/// The top-level facade: a caller-authored route table plus configuration.
/// One `handle` call takes a request from segmentation through dispatch to
/// the emitted wire response; every failure along the way is mapped onto a
/// status code and serialized, never swallowed. The router itself carries
/// no mutable state, so a single instance can serve concurrent requests.
#[derive(Debug)]
pub struct Router {
    routes: RouteTable,
    options: RouterOptions,
}

impl Router {
    pub fn new(routes: RouteTable, options: Option<RouterOptions>) -> Self {
        Self {
            routes,
            options: options.unwrap_or_default(),
        }
    }

    #[tracing::instrument(level = "debug", skip(self, request), fields(method = %request.method, path = %request.path))]
    pub fn handle(&self, request: &Request) -> WireResponse {
        let body = match decode_body(request, self.options.request_content_type) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(%error, "body decoding failed");
                let ctx = RequestContext::new(request.method, &request.path, Value::Null)
                    .with_query(request.query.iter().cloned());
                return emit(&Reply::from_error(&error), &ctx, &self.options);
            }
        };

        let mut ctx = RequestContext::new(request.method, &request.path, body)
            .with_query(request.query.iter().cloned());

        let reply = match dispatch(&self.routes, &mut ctx) {
            Ok(reply) => reply,
            Err(error) => {
                tracing::debug!(status = error.status().code(), %error, "request failed");
                Reply::from_error(&error)
            }
        };

        emit(&reply, &ctx, &self.options)
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }
}

use crate::enums::StatusCode;
use thiserror::Error;

/// Terminal request failures. Every variant maps onto exactly one HTTP
/// status code; matcher-raised and handler-raised failures travel through
/// the same `Result` channel up to the response emitter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("{message}")]
    BadRequest { message: String },
    #[error("route '{path}' does not exist")]
    RouteNotFound { path: String },
    #[error("{message}")]
    MethodNotAllowed { message: String },
    #[error("{message}")]
    NotImplemented { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("route configuration invalid: {message}")]
    Configuration { message: String },
}

impl RouteError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::RouteNotFound { path: path.into() }
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::BadRequest { .. } => StatusCode::BadRequest,
            RouteError::RouteNotFound { .. } => StatusCode::NotFound,
            RouteError::MethodNotAllowed { .. } => StatusCode::MethodNotAllowed,
            RouteError::NotImplemented { .. } => StatusCode::NotImplemented,
            RouteError::Conflict { .. } => StatusCode::Conflict,
            RouteError::Configuration { .. } => StatusCode::InternalServerError,
        }
    }
}

pub type RouteResult<T> = Result<T, RouteError>;

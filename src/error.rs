//! Unified error handling for the HTTP surface.
//!
//! Every variant renders as a bare JSON string body with a matching status,
//! so clients always receive a well-formed JSON response. An unknown command
//! is deliberately not an error here; see [`crate::api::invoke::Invocation`].

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Robot Not Found")]
    RobotNotFound(String),

    #[error("Device Not Found")]
    DeviceNotFound { robot: String, device: String },

    #[error("Connection Not Found")]
    ConnectionNotFound { robot: String, connection: String },

    /// No route matches the request path.
    #[error("Not Found")]
    RouteNotFound,

    /// The path matches a route that does not accept this method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// A path segment could not be decoded.
    #[error("Malformed Path")]
    MalformedPath,

    #[error("Unauthorized")]
    Unauthorized,
}

impl ApiError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::RobotNotFound(_) => "robot_not_found",
            Self::DeviceNotFound { .. } => "device_not_found",
            Self::ConnectionNotFound { .. } => "connection_not_found",
            Self::RouteNotFound => "route_not_found",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::MalformedPath => "malformed_path",
            Self::Unauthorized => "unauthorized",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::RobotNotFound(_)
            | Self::DeviceNotFound { .. }
            | Self::ConnectionNotFound { .. }
            | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MalformedPath => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(kind = self.error_code(), detail = ?self, "Request rejected");
        crate::metrics::record_api_error(self.error_code());
        let mut response = (self.status(), Json(self.to_string())).into_response();
        if self == Self::Unauthorized {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"robogate\""),
            );
        }
        response
    }
}

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

/// Non-success outcomes of a probe request
///
/// Both map to a bare status line with an empty body. Neither is exceptional:
/// an unknown target is how the responder says "not a probe".
#[derive(Debug)]
pub enum ApiError {
    /// Request target is not one of the recognized probe targets
    NotFound(String),
    /// Only GET is served
    MethodNotImplemented(Method),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound(target) => {
                tracing::debug!(%target, "Not a probe target");
            }
            ApiError::MethodNotImplemented(method) => {
                tracing::debug!(%method, "Method not implemented");
            }
        }

        self.status().into_response()
    }
}

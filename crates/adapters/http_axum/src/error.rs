//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use clienthub_domain::error::ClientHubError;

pub(crate) const CUSTOMER_NOT_FOUND: &str = "Cliente no encontrado";
pub(crate) const PAGE_OUT_OF_RANGE: &str = "Página fuera de rango";
const INTERNAL_ERROR: &str = "Error interno del servidor";
const INVALID_BODY: &str = "Cuerpo de la petición inválido";
const BODY_NOT_CONTAINER: &str = "El cuerpo debe ser un objeto o un arreglo JSON";

/// JSON body returned for every non-success response.
#[derive(Serialize)]
pub struct MessageBody {
    pub mensaje: &'static str,
}

/// Failures reading a JSON request body.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// The body could not be read.
    #[error("failed to read request body")]
    Read(#[from] BytesRejection),
    /// The body is not valid JSON.
    #[error("request body is not valid JSON")]
    Syntax(#[from] serde_json::Error),
    /// The body is a bare JSON primitive rather than an object or array.
    #[error("request body is neither a JSON object nor an array")]
    NotAContainer,
}

/// Maps application and request errors to an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    Domain(ClientHubError),
    Body(BodyError),
}

impl From<ClientHubError> for ApiError {
    fn from(err: ClientHubError) -> Self {
        Self::Domain(err)
    }
}

impl From<BodyError> for ApiError {
    fn from(err: BodyError) -> Self {
        Self::Body(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, mensaje) = match &self {
            Self::Domain(ClientHubError::NotFound(_)) => (StatusCode::NOT_FOUND, CUSTOMER_NOT_FOUND),
            Self::Domain(ClientHubError::PageOutOfRange(_)) => {
                (StatusCode::NOT_FOUND, PAGE_OUT_OF_RANGE)
            }
            Self::Domain(ClientHubError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
            }
            Self::Body(BodyError::Read(rejection)) => {
                tracing::debug!(error = %rejection, "unreadable request body");
                (rejection.status(), INVALID_BODY)
            }
            Self::Body(err @ BodyError::Syntax(_)) => {
                tracing::debug!(error = %err, "malformed request body");
                (StatusCode::BAD_REQUEST, INVALID_BODY)
            }
            Self::Body(BodyError::NotAContainer) => {
                (StatusCode::BAD_REQUEST, BODY_NOT_CONTAINER)
            }
        };

        (status, Json(MessageBody { mensaje })).into_response()
    }
}

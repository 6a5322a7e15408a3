//! JSON handlers for a customer's interactions.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use clienthub_app::ports::DocumentStore;
use clienthub_domain::interaction::Interaction;

use super::body::JsonFields;
use super::customer_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Interaction>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Interaction>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /clientes/:id/interacciones`
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let interactions = state
        .interaction_service
        .list_interactions(customer_id(&id)?)
        .await?;
    Ok(ListResponse::Ok(Json(interactions)))
}

/// `POST /clientes/:id/interacciones`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonFields(fields): JsonFields,
) -> Result<CreateResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let created = state
        .interaction_service
        .record_interaction(customer_id(&id)?, fields)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

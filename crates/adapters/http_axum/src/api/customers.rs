//! JSON handlers for customers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use clienthub_app::ports::DocumentStore;
use clienthub_domain::customer::Customer;
use clienthub_domain::page::{Page, PageRequest};

use super::body::JsonFields;
use super::customer_id;
use crate::error::{ApiError, MessageBody};
use crate::state::AppState;

const ACTIVATED: &str = "Cliente activado exitosamente";
const DEACTIVATED: &str = "Cliente desactivado exitosamente";
const DELETED: &str = "Cliente eliminado exitosamente";

/// Raw pagination query. Values are parsed leniently by [`PageRequest`].
///
/// Built from the raw key/value pairs so that a repeated key keeps its
/// first value instead of failing the request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// Body of a successful list response.
#[derive(Serialize)]
pub struct CustomerPage {
    pub total: usize,
    pub page: i64,
    pub limit: i64,
    pub clientes: Vec<Customer>,
}

impl From<Page<Customer>> for CustomerPage {
    fn from(page: Page<Customer>) -> Self {
        Self {
            total: page.total,
            page: page.page,
            limit: page.limit,
            clientes: page.items,
        }
    }
}

/// Body of a successful activation change.
#[derive(Serialize)]
pub struct ActivationBody {
    pub mensaje: &'static str,
    pub cliente: Customer,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<CustomerPage>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Customer>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Customer>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the activate/deactivate endpoints.
pub enum ActivationResponse {
    Ok(Json<ActivationBody>),
}

impl IntoResponse for ActivationResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /clientes?page&limit`
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<ListResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let query = ListQuery::from_pairs(pairs);
    let request = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());
    let page = state.customer_service.list_customers(request).await?;
    Ok(ListResponse::Ok(Json(page.into())))
}

/// `GET /clientes/:id`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let customer = state.customer_service.get_customer(customer_id(&id)?).await?;
    Ok(GetResponse::Ok(Json(customer)))
}

/// `POST /clientes`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    JsonFields(fields): JsonFields,
) -> Result<CreateResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let created = state.customer_service.create_customer(fields).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /clientes/:id/activar`
pub async fn activate<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<ActivationResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let cliente = state
        .customer_service
        .activate_customer(customer_id(&id)?)
        .await?;
    Ok(ActivationResponse::Ok(Json(ActivationBody {
        mensaje: ACTIVATED,
        cliente,
    })))
}

/// `PUT /clientes/:id/desactivar`
pub async fn deactivate<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<ActivationResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let cliente = state
        .customer_service
        .deactivate_customer(customer_id(&id)?)
        .await?;
    Ok(ActivationResponse::Ok(Json(ActivationBody {
        mensaje: DEACTIVATED,
        cliente,
    })))
}

/// `DELETE /clientes/:id`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
{
    state
        .customer_service
        .delete_customer(customer_id(&id)?)
        .await?;
    Ok(DeleteResponse::Ok(Json(MessageBody { mensaje: DELETED })))
}

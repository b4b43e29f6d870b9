// HTTP request handlers
use crate::application::dashboard_service::DashboardControls;
use crate::application::session_service::{FilterUpdate, SessionSnapshot};
use crate::domain::dashboard::{DashboardView, PieChart, ScatterChart};
use crate::domain::filter::SiteSelection;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use crate::presentation::page::INDEX_HTML;
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Filter values as query parameters; anything missing falls back to the
/// initial filter state
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub site: Option<SiteSelection>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

type FilterQueryInput = Result<Query<FilterQuery>, QueryRejection>;
type SessionId = Result<Path<Uuid>, PathRejection>;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The dashboard page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Dropdown options and payload slider bounds
pub async fn controls(State(state): State<Arc<AppState>>) -> Json<DashboardControls> {
    Json(state.dashboard_service.controls())
}

pub async fn success_pie(
    State(state): State<Arc<AppState>>,
    query: FilterQueryInput,
) -> Result<Json<PieChart>, ApiError> {
    let Query(query) = query?;
    let filter = state.dashboard_service.filter_from(query.site, None, None)?;
    Ok(Json(state.dashboard_service.success_view(&filter.site)))
}

pub async fn payload_scatter(
    State(state): State<Arc<AppState>>,
    query: FilterQueryInput,
) -> Result<Json<ScatterChart>, ApiError> {
    let Query(query) = query?;
    let filter = state
        .dashboard_service
        .filter_from(query.site, query.low, query.high)?;
    Ok(Json(
        state
            .dashboard_service
            .scatter_view(&filter.site, filter.payload_range),
    ))
}

/// Both charts for one filter state
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    query: FilterQueryInput,
) -> Result<Json<DashboardView>, ApiError> {
    let Query(query) = query?;
    let filter = state
        .dashboard_service
        .filter_from(query.site, query.low, query.high)?;
    Ok(Json(state.dashboard_service.view(&filter)))
}

pub async fn open_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.session_service.open().await;
    (StatusCode::CREATED, Json(snapshot))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    id: SessionId,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.session_service.current(id).await?))
}

pub async fn update_session_filter(
    State(state): State<Arc<AppState>>,
    id: SessionId,
    update: Result<Json<FilterUpdate>, JsonRejection>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let Path(id) = id?;
    let Json(update) = update?;
    Ok(Json(state.session_service.update(id, update).await?))
}

pub async fn close_session(
    State(state): State<Arc<AppState>>,
    id: SessionId,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.session_service.close(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// HTTP error mapping
use crate::application::dashboard_service::DashboardError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),

    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Dashboard(DashboardError::UnknownSite(_)) => StatusCode::BAD_REQUEST,
            ApiError::Dashboard(DashboardError::InvalidRange { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Dashboard(DashboardError::SessionNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Query(rejection) => rejection.status(),
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Path(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("Request failed with {}: {}", status, self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

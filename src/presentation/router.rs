// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    close_session, controls, dashboard, get_session, health_check, index, open_session,
    payload_scatter, success_pie, update_session_filter,
};
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/controls", get(controls))
        .route("/dashboard", get(dashboard))
        .route("/charts/success-pie", get(success_pie))
        .route("/charts/payload-scatter", get(payload_scatter))
        .route("/sessions", post(open_session))
        .route("/sessions/:id", get(get_session).delete(close_session))
        .route("/sessions/:id/filter", put(update_session_filter));

    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

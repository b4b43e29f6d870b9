// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::session_service::{SessionLimits, SessionService};

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub session_service: SessionService,
}

impl AppState {
    pub fn new(dashboard_service: DashboardService, session_limits: SessionLimits) -> Self {
        let session_service = SessionService::new(dashboard_service.clone(), session_limits);
        Self {
            dashboard_service,
            session_service,
        }
    }
}

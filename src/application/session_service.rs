// Session service - Per-visitor filter state bound to chart recomputation
use crate::application::dashboard_service::{DashboardError, DashboardService};
use crate::domain::dashboard::DashboardView;
use crate::domain::filter::{FilterEvent, FilterState, PayloadRange, SiteSelection};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A partial edit of the filter controls. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterUpdate {
    pub site: Option<SiteSelection>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl FilterUpdate {
    /// Translate into transitions against the current state
    pub fn events(self, current: &FilterState) -> Vec<FilterEvent> {
        let mut events = Vec::new();
        if let Some(site) = self.site {
            events.push(FilterEvent::SiteSelected(site));
        }
        if self.low.is_some() || self.high.is_some() {
            let range = PayloadRange::new(
                self.low.unwrap_or(current.payload_range.low),
                self.high.unwrap_or(current.payload_range.high),
            );
            events.push(FilterEvent::PayloadRangeChanged(range));
        }
        events
    }
}

/// Filter state whose every transition recomputes both charts
#[derive(Clone)]
pub struct FilterSession {
    dashboard: DashboardService,
    state: FilterState,
}

impl FilterSession {
    pub fn new(dashboard: DashboardService) -> Self {
        let state = dashboard.initial_filter();
        Self { dashboard, state }
    }

    fn resume(dashboard: DashboardService, state: FilterState) -> Self {
        Self { dashboard, state }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> DashboardView {
        self.dashboard.view(&self.state)
    }

    pub fn apply(&mut self, event: FilterEvent) -> Result<DashboardView, DashboardError> {
        match &event {
            FilterEvent::SiteSelected(site) => self.dashboard.validate_site(site)?,
            FilterEvent::PayloadRangeChanged(range) => self.dashboard.validate_range(*range)?,
        }
        self.state = self.state.apply(event, self.dashboard.bounds());
        Ok(self.view())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub view: DashboardView,
}

/// Bounds on how many sessions are held and for how long
#[derive(Debug, Clone, Copy)]
pub struct SessionLimits {
    pub idle_timeout: Duration,
    pub max_sessions: usize,
}

#[derive(Debug, Clone)]
struct SessionEntry {
    state: FilterState,
    touched: Instant,
}

impl SessionEntry {
    fn new(state: FilterState) -> Self {
        Self {
            state,
            touched: Instant::now(),
        }
    }

    fn is_expired(&self, now: Instant, idle_timeout: Duration) -> bool {
        now.duration_since(self.touched) >= idle_timeout
    }
}

#[derive(Clone)]
pub struct SessionService {
    dashboard: DashboardService,
    limits: SessionLimits,
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
}

impl SessionService {
    pub fn new(dashboard: DashboardService, limits: SessionLimits) -> Self {
        Self {
            dashboard,
            limits,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn open(&self) -> SessionSnapshot {
        let id = Uuid::new_v4();
        let session = FilterSession::new(self.dashboard.clone());

        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions);
        while sessions.len() >= self.limits.max_sessions.max(1) {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(id, _)| *id)
            else {
                break;
            };
            sessions.remove(&oldest);
            tracing::info!("Evicted dashboard session {} at capacity", oldest);
        }
        sessions.insert(id, SessionEntry::new(session.state().clone()));

        tracing::info!("Opened dashboard session {} ({} held)", id, sessions.len());
        SessionSnapshot {
            id,
            view: session.view(),
        }
    }

    pub async fn current(&self, id: Uuid) -> Result<SessionSnapshot, DashboardError> {
        let mut sessions = self.sessions.write().await;
        let entry = self.live_entry(&mut sessions, id)?;
        entry.touched = Instant::now();
        let state = entry.state.clone();

        Ok(SessionSnapshot {
            id,
            view: FilterSession::resume(self.dashboard.clone(), state).view(),
        })
    }

    /// Apply an edit atomically: either every transition lands or none does
    pub async fn update(
        &self,
        id: Uuid,
        update: FilterUpdate,
    ) -> Result<SessionSnapshot, DashboardError> {
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions);
        let state = self.live_entry(&mut sessions, id)?.state.clone();

        let mut session = FilterSession::resume(self.dashboard.clone(), state);
        let mut view = None;
        for event in update.events(session.state()) {
            view = Some(session.apply(event)?);
        }
        let view = view.unwrap_or_else(|| session.view());

        tracing::debug!("Session {} filter is now {:?}", id, session.state());
        sessions.insert(id, SessionEntry::new(session.state().clone()));

        Ok(SessionSnapshot { id, view })
    }

    pub async fn close(&self, id: Uuid) -> Result<(), DashboardError> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                tracing::info!("Closed dashboard session {}", id);
                Ok(())
            }
            None => Err(DashboardError::SessionNotFound(id)),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Look up a session, dropping it if it has been idle too long
    fn live_entry<'a>(
        &self,
        sessions: &'a mut HashMap<Uuid, SessionEntry>,
        id: Uuid,
    ) -> Result<&'a mut SessionEntry, DashboardError> {
        let expired = sessions
            .get(&id)
            .map(|entry| entry.is_expired(Instant::now(), self.limits.idle_timeout))
            .ok_or(DashboardError::SessionNotFound(id))?;
        if expired {
            sessions.remove(&id);
            tracing::info!("Dashboard session {} expired", id);
            return Err(DashboardError::SessionNotFound(id));
        }
        sessions
            .get_mut(&id)
            .ok_or(DashboardError::SessionNotFound(id))
    }

    fn sweep(&self, sessions: &mut HashMap<Uuid, SessionEntry>) {
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now, self.limits.idle_timeout));
        let dropped = before - sessions.len();
        if dropped > 0 {
            tracing::info!("Expired {} idle dashboard sessions", dropped);
        }
    }
}

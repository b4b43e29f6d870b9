// Dashboard service - Use case for building chart views from filter state
use crate::application::payload_outcome::compute_scatter_view;
use crate::application::success_rate::compute_success_view;
use crate::domain::dashboard::{DashboardView, PieChart, ScatterChart};
use crate::domain::filter::{ALL_SITES, FilterState, PayloadRange, SiteSelection};
use crate::domain::launch::{LaunchTable, PayloadBounds};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown launch site '{0}'")]
    UnknownSite(String),

    #[error("payload range [{low}, {high}] must be finite")]
    InvalidRange { low: f64, high: f64 },

    #[error("session {0} not found")]
    SessionNotFound(Uuid),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
}

/// Everything the page needs to build its controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardControls {
    pub sites: Vec<SiteOption>,
    pub default_site: String,
    pub payload: PayloadSlider,
}

#[derive(Clone)]
pub struct DashboardService {
    table: Arc<LaunchTable>,
    payload_step: f64,
}

impl DashboardService {
    pub fn new(table: Arc<LaunchTable>, payload_step: f64) -> Self {
        Self { table, payload_step }
    }

    pub fn bounds(&self) -> PayloadBounds {
        self.table.bounds()
    }

    pub fn initial_filter(&self) -> FilterState {
        FilterState::initial(self.bounds())
    }

    pub fn controls(&self) -> DashboardControls {
        let mut sites = vec![SiteOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        sites.extend(self.table.sites().into_iter().map(|site| SiteOption {
            label: site.clone(),
            value: site,
        }));

        let bounds = self.bounds();
        DashboardControls {
            sites,
            default_site: ALL_SITES.to_string(),
            payload: PayloadSlider {
                min: bounds.min,
                max: bounds.max,
                step: self.payload_step,
                marks: slider_marks(bounds, self.payload_step),
            },
        }
    }

    /// Reject selections that are not in the dropdown
    pub fn validate_site(&self, site: &SiteSelection) -> Result<(), DashboardError> {
        match site {
            SiteSelection::All => Ok(()),
            SiteSelection::Site(name) if self.table.has_site(name) => Ok(()),
            SiteSelection::Site(name) => Err(DashboardError::UnknownSite(name.clone())),
        }
    }

    /// NaN and infinite ends cannot be clamped meaningfully
    pub fn validate_range(&self, range: PayloadRange) -> Result<(), DashboardError> {
        if range.is_finite() {
            Ok(())
        } else {
            Err(DashboardError::InvalidRange {
                low: range.low,
                high: range.high,
            })
        }
    }

    /// Build a filter state from optional inputs; absent values fall back to
    /// the initial state.
    pub fn filter_from(
        &self,
        site: Option<SiteSelection>,
        low: Option<f64>,
        high: Option<f64>,
    ) -> Result<FilterState, DashboardError> {
        let site = site.unwrap_or_default();
        self.validate_site(&site)?;

        let bounds = self.bounds();
        let range = PayloadRange::new(low.unwrap_or(bounds.min), high.unwrap_or(bounds.max));
        self.validate_range(range)?;
        Ok(FilterState::new(site, range, bounds))
    }

    pub fn success_view(&self, site: &SiteSelection) -> PieChart {
        compute_success_view(&self.table, site)
    }

    pub fn scatter_view(&self, site: &SiteSelection, range: PayloadRange) -> ScatterChart {
        compute_scatter_view(&self.table, site, range.clamped(self.bounds()))
    }

    /// Recompute both charts for a filter state
    pub fn view(&self, filter: &FilterState) -> DashboardView {
        DashboardView::new(
            filter.clone(),
            self.success_view(&filter.site),
            self.scatter_view(&filter.site, filter.payload_range),
        )
    }
}

/// Marks at the bounds plus every multiple of `step` strictly between them
fn slider_marks(bounds: PayloadBounds, step: f64) -> Vec<f64> {
    let mut marks = vec![bounds.min];
    let mut mark = (bounds.min / step).floor() * step + step;
    while mark < bounds.max {
        marks.push(mark);
        mark += step;
    }
    if bounds.max > bounds.min {
        marks.push(bounds.max);
    }
    marks
}

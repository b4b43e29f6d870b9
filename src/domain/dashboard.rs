// Dashboard view models (derived per request, never stored)
use super::filter::FilterState;
use super::launch::Outcome;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

impl PieSlice {
    pub fn new(label: String, value: f64) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn new(title: String, slices: Vec<PieSlice>) -> Self {
        Self { title, slices }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

impl ScatterPoint {
    pub fn new(payload_mass_kg: f64, outcome: Outcome, booster_category: String) -> Self {
        Self {
            payload_mass_kg,
            outcome,
            booster_category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Distinct booster categories among `points`, sorted; one trace each
    pub categories: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    pub fn new(
        title: String,
        x_label: String,
        y_label: String,
        categories: Vec<String>,
        points: Vec<ScatterPoint>,
    ) -> Self {
        Self {
            title,
            x_label,
            y_label,
            categories,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub filter: FilterState,
    pub success_pie: PieChart,
    pub payload_scatter: ScatterChart,
}

impl DashboardView {
    pub fn new(filter: FilterState, success_pie: PieChart, payload_scatter: ScatterChart) -> Self {
        Self {
            filter,
            success_pie,
            payload_scatter,
        }
    }
}

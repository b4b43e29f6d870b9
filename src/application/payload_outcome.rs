// Payload vs. outcome scatter plot
use crate::domain::dashboard::{ScatterChart, ScatterPoint};
use crate::domain::filter::{PayloadRange, SiteSelection};
use crate::domain::launch::LaunchTable;
use std::collections::BTreeSet;

pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "class";

pub fn compute_scatter_view(
    table: &LaunchTable,
    selected_site: &SiteSelection,
    payload_range: PayloadRange,
) -> ScatterChart {
    let points: Vec<ScatterPoint> = table
        .records()
        .iter()
        .filter(|r| selected_site.matches(&r.launch_site))
        .filter(|r| payload_range.contains(r.payload_mass_kg))
        .map(|r| ScatterPoint::new(r.payload_mass_kg, r.outcome, r.booster_category.clone()))
        .collect();

    let categories: Vec<String> = points
        .iter()
        .map(|p| p.booster_category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    let title = match selected_site {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(site) => {
            format!("Correlation between Payload and Success for site {}", site)
        }
    };

    tracing::debug!(
        "Scatter for {:?} in [{}, {}]: {} points",
        selected_site,
        payload_range.low,
        payload_range.high,
        points.len()
    );

    ScatterChart::new(
        title,
        PAYLOAD_AXIS_LABEL.to_string(),
        OUTCOME_AXIS_LABEL.to_string(),
        categories,
        points,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::launch::Outcome;
    use crate::domain::launch::fixtures::sample_table;

    fn point(mass: f64, outcome: Outcome, booster: &str) -> ScatterPoint {
        ScatterPoint::new(mass, outcome, booster.to_string())
    }

    #[test]
    fn test_all_sites_filters_by_range() {
        let chart = compute_scatter_view(
            &sample_table(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 1000.0),
        );

        assert_eq!(
            chart.points,
            vec![point(500.0, Outcome::Success, "v1"), point(800.0, Outcome::Success, "v2")]
        );
        assert_eq!(chart.categories, vec!["v1", "v2"]);
        assert_eq!(chart.x_label, "Payload Mass (kg)");
        assert_eq!(chart.y_label, "class");
    }

    #[test]
    fn test_single_site_filters_by_site_and_range() {
        let chart = compute_scatter_view(
            &sample_table(),
            &SiteSelection::Site("B".into()),
            PayloadRange::new(0.0, 1000.0),
        );

        assert_eq!(chart.points, vec![point(800.0, Outcome::Success, "v2")]);
        assert_eq!(chart.title, "Correlation between Payload and Success for site B");
    }

    #[test]
    fn test_range_ends_are_inclusive() {
        let chart = compute_scatter_view(
            &sample_table(),
            &SiteSelection::Site("A".into()),
            PayloadRange::new(500.0, 1500.0),
        );
        assert_eq!(chart.points.len(), 2);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let chart = compute_scatter_view(
            &sample_table(),
            &SiteSelection::All,
            PayloadRange::new(1000.0, 0.0),
        );
        assert!(chart.points.is_empty());
        assert!(chart.categories.is_empty());
    }

    #[test]
    fn test_range_excluding_site_rows_is_empty() {
        let chart = compute_scatter_view(
            &sample_table(),
            &SiteSelection::Site("B".into()),
            PayloadRange::new(1000.0, 1500.0),
        );
        assert!(chart.points.is_empty());
    }

    #[test]
    fn test_is_idempotent() {
        let table = sample_table();
        let range = PayloadRange::new(0.0, 2000.0);
        assert_eq!(
            compute_scatter_view(&table, &SiteSelection::All, range),
            compute_scatter_view(&table, &SiteSelection::All, range)
        );
    }
}

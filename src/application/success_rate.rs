// Success-rate aggregation for the pie chart
use crate::domain::dashboard::{PieChart, PieSlice};
use crate::domain::filter::SiteSelection;
use crate::domain::launch::{LaunchTable, Outcome};
use std::collections::BTreeMap;

/// All sites: successful launches summed per site.
/// One site: share of each outcome among that site's launches.
pub fn compute_success_view(table: &LaunchTable, selected_site: &SiteSelection) -> PieChart {
    match selected_site {
        SiteSelection::All => {
            let mut successes: BTreeMap<&str, u32> = BTreeMap::new();
            for record in table.records() {
                *successes.entry(record.launch_site.as_str()).or_default() +=
                    u32::from(record.outcome.class());
            }

            let slices = successes
                .into_iter()
                .map(|(site, count)| PieSlice::new(site.to_string(), f64::from(count)))
                .collect();

            PieChart::new("Total Success Launches by Site".to_string(), slices)
        }
        SiteSelection::Site(site) => {
            let title = format!("Total Success Launches for site {}", site);

            let mut counts: BTreeMap<Outcome, u32> = BTreeMap::new();
            for record in table.records().iter().filter(|r| &r.launch_site == site) {
                *counts.entry(record.outcome).or_default() += 1;
            }

            let total: u32 = counts.values().sum();
            if total == 0 {
                tracing::debug!("No launches recorded for site {}", site);
                return PieChart::new(title, Vec::new());
            }

            // Most frequent outcome first; ties keep ascending class order
            let mut ordered: Vec<(Outcome, u32)> = counts.into_iter().collect();
            ordered.sort_by(|a, b| b.1.cmp(&a.1));

            let slices = ordered
                .into_iter()
                .map(|(outcome, count)| {
                    PieSlice::new(outcome.to_string(), f64::from(count) / f64::from(total))
                })
                .collect();

            PieChart::new(title, slices)
        }
    }
}

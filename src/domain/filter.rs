// Filter state domain models
use super::launch::PayloadBounds;
use serde::{Deserialize, Serialize};

pub const ALL_SITES: &str = "ALL";

/// Dropdown selection: every site, or exactly one launch site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

/// Inclusive payload mass range in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn full(bounds: PayloadBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }

    /// Clamp both ends into the dataset bounds. An inverted range stays
    /// inverted and therefore matches nothing; so does a NaN end.
    pub fn clamped(self, bounds: PayloadBounds) -> Self {
        Self::new(
            self.low.clamp(bounds.min, bounds.max),
            self.high.clamp(bounds.min, bounds.max),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.low.is_finite() && self.high.is_finite()
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    SiteSelected(SiteSelection),
    PayloadRangeChanged(PayloadRange),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl FilterState {
    pub fn initial(bounds: PayloadBounds) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::full(bounds),
        }
    }

    pub fn new(site: SiteSelection, payload_range: PayloadRange, bounds: PayloadBounds) -> Self {
        Self {
            site,
            payload_range: payload_range.clamped(bounds),
        }
    }

    /// Produce the next state. The previous one is never edited in place.
    pub fn apply(&self, event: FilterEvent, bounds: PayloadBounds) -> Self {
        match event {
            FilterEvent::SiteSelected(site) => Self {
                site,
                payload_range: self.payload_range,
            },
            FilterEvent::PayloadRangeChanged(range) => Self {
                site: self.site.clone(),
                payload_range: range.clamped(bounds),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: PayloadBounds = PayloadBounds { min: 0.0, max: 9600.0 };

    #[test]
    fn test_initial_state_covers_everything() {
        let state = FilterState::initial(BOUNDS);
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_range_event_is_clamped() {
        let state = FilterState::initial(BOUNDS).apply(
            FilterEvent::PayloadRangeChanged(PayloadRange::new(-500.0, 12000.0)),
            BOUNDS,
        );
        assert_eq!(state.payload_range, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_site_event_keeps_range() {
        let state = FilterState::new(SiteSelection::All, PayloadRange::new(1000.0, 2000.0), BOUNDS)
            .apply(FilterEvent::SiteSelected(SiteSelection::Site("KSC LC-39A".into())), BOUNDS);

        assert_eq!(state.site, SiteSelection::Site("KSC LC-39A".into()));
        assert_eq!(state.payload_range, PayloadRange::new(1000.0, 2000.0));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = PayloadRange::new(5000.0, 1000.0).clamped(BOUNDS);
        assert!(!range.contains(3000.0));
        assert!(!range.contains(5000.0));
    }

    #[test]
    fn test_non_finite_range_is_detected() {
        assert!(PayloadRange::new(0.0, 10.0).is_finite());
        assert!(!PayloadRange::new(f64::NAN, 10.0).is_finite());
        assert!(!PayloadRange::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_default_selection_is_all_sites() {
        assert_eq!(SiteSelection::default(), SiteSelection::All);
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = PayloadRange::new(500.0, 1500.0);
        assert!(range.contains(500.0));
        assert!(range.contains(1500.0));
        assert!(!range.contains(1500.5));
    }

    #[test]
    fn test_site_selection_string_form() {
        assert_eq!(SiteSelection::from("ALL".to_string()), SiteSelection::All);
        assert_eq!(
            SiteSelection::from("CCAFS LC-40".to_string()),
            SiteSelection::Site("CCAFS LC-40".into())
        );
        assert_eq!(String::from(SiteSelection::All), "ALL");

        let json = serde_json::to_string(&SiteSelection::Site("VAFB SLC-4E".into())).unwrap();
        assert_eq!(json, "\"VAFB SLC-4E\"");
    }
}

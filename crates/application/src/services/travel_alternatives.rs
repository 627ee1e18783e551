//! Travel alternatives
//!
//! Rough time estimates for other ways of covering a driving route. These
//! are display heuristics scaled from the raw driving duration, not routed
//! results.

use std::fmt;

use domain::{RouteResult, format_duration_minutes};
use serde::{Deserialize, Serialize};

/// Ways of travelling shown next to the driving route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    /// The routed driving path
    Driving,
    /// On foot
    Walking,
    /// By bicycle
    Cycling,
    /// Public transport
    Transit,
}

impl TravelMode {
    /// All modes in display order
    pub const ALL: [Self; 4] = [Self::Driving, Self::Walking, Self::Cycling, Self::Transit];

    /// Multiplier applied to the driving duration, if this mode is estimated
    #[must_use]
    pub const fn duration_factor(&self) -> Option<f64> {
        match self {
            Self::Driving => Some(1.0),
            Self::Walking => Some(5.0),
            Self::Cycling => Some(2.0),
            Self::Transit => None,
        }
    }

    /// Emoji representation for terminal output
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Driving => "🚗",
            Self::Walking => "🚶",
            Self::Cycling => "🚲",
            Self::Transit => "🚌",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Driving => "Driving",
            Self::Walking => "Walking",
            Self::Cycling => "Cycling",
            Self::Transit => "Transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the alternatives table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelAlternative {
    /// Travel mode
    pub mode: TravelMode,
    /// Estimated duration in seconds, when one can be given
    pub estimated_seconds: Option<f64>,
    /// Text shown to the user
    pub estimate: String,
}

impl TravelAlternative {
    /// Format as `"🚶 Walking: ~1800 mins"`
    #[must_use]
    pub fn format_line(&self) -> String {
        format!("{} {}: {}", self.mode.emoji(), self.mode, self.estimate)
    }
}

/// Estimate every travel mode for a resolved route
#[must_use]
pub fn travel_alternatives(result: &RouteResult) -> Vec<TravelAlternative> {
    TravelMode::ALL
        .iter()
        .map(|&mode| {
            let estimated_seconds = mode
                .duration_factor()
                .map(|factor| result.duration_seconds * factor);
            let estimate = match (mode, estimated_seconds) {
                (TravelMode::Driving, _) => result.summary.duration_text.clone(),
                (_, Some(secs)) => format!("~{}", format_duration_minutes(secs)),
                (_, None) => "Check local schedule".to_string(),
            };
            TravelAlternative {
                mode,
                estimated_seconds,
                estimate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use domain::{Coordinate, PathGeometry, RoutedPath};

    use super::*;

    fn sample_result() -> RouteResult {
        let start = Coordinate::new(37.77, -122.42).unwrap();
        let end = Coordinate::new(34.05, -118.24).unwrap();
        RouteResult::assemble(
            RoutedPath {
                geometry: PathGeometry::new(vec![start, end]).unwrap(),
                distance_meters: 615_000.0,
                duration_seconds: 21_600.0,
            },
            start,
            end,
            "San Francisco, CA",
            "Los Angeles, CA",
            50,
        )
        .unwrap()
    }

    #[test]
    fn lists_all_modes_in_order() {
        let alternatives = travel_alternatives(&sample_result());
        let modes: Vec<TravelMode> = alternatives.iter().map(|a| a.mode).collect();
        assert_eq!(modes, TravelMode::ALL.to_vec());
    }

    #[test]
    fn driving_uses_route_duration() {
        let alternatives = travel_alternatives(&sample_result());
        assert_eq!(alternatives[0].estimate, "360 mins");
    }

    #[test]
    fn walking_and_cycling_scale_raw_seconds() {
        let alternatives = travel_alternatives(&sample_result());
        assert_eq!(alternatives[1].estimate, "~1800 mins");
        assert_eq!(alternatives[1].estimated_seconds, Some(108_000.0));
        assert_eq!(alternatives[2].estimate, "~720 mins");
    }

    #[test]
    fn transit_has_no_estimate() {
        let alternatives = travel_alternatives(&sample_result());
        assert_eq!(alternatives[3].estimated_seconds, None);
        assert_eq!(alternatives[3].estimate, "Check local schedule");
    }

    #[test]
    fn format_line() {
        let alternatives = travel_alternatives(&sample_result());
        assert_eq!(alternatives[1].format_line(), "🚶 Walking: ~1800 mins");
    }
}

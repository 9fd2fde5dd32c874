//! List query parameters and their translation into a `PaperFilter`

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tracing::debug;

use super::normalize::normalize_enum_list;
use crate::db::PaperFilter;

/// Query parameters accepted by `GET /api/papers`
///
/// Enum parameters are comma-separated lists in human-readable form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperQuery {
    pub domain: Option<String>,
    pub reading_stage: Option<String>,
    pub impact_score: Option<String>,
    pub date_added: Option<String>,
}

/// Relative time windows for the `dateAdded` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    ThisWeek,
    ThisMonth,
    LastThreeMonths,
    AllTime,
}

impl DateWindow {
    /// Parse a window label; unknown labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "This Week" => Some(Self::ThisWeek),
            "This Month" => Some(Self::ThisMonth),
            "Last 3 Months" => Some(Self::LastThreeMonths),
            "All time" => Some(Self::AllTime),
            _ => None,
        }
    }

    /// How far back the window reaches; `None` for all time
    pub fn lookback(self) -> Option<Duration> {
        match self {
            Self::ThisWeek => Some(Duration::days(7)),
            Self::ThisMonth => Some(Duration::days(30)),
            Self::LastThreeMonths => Some(Duration::days(90)),
            Self::AllTime => None,
        }
    }

    /// Inclusive lower bound on `date_added` relative to `now`
    pub fn lower_bound(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.lookback().map(|span| now - span)
    }
}

fn enum_values(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) if !raw.is_empty() => normalize_enum_list(raw),
        _ => Vec::new(),
    }
}

impl PaperQuery {
    /// Build the store filter, evaluating any date window against `now`
    pub fn to_filter(&self, now: DateTime<Utc>) -> PaperFilter {
        let added_since = match self.date_added.as_deref() {
            None | Some("") => None,
            Some(label) => match DateWindow::from_label(label) {
                Some(window) => window.lower_bound(now),
                None => {
                    debug!("Unrecognized dateAdded label {:?}, no date constraint applied", label);
                    None
                }
            },
        };

        PaperFilter {
            domains: enum_values(self.domain.as_deref()),
            reading_stages: enum_values(self.reading_stage.as_deref()),
            impact_scores: enum_values(self.impact_score.as_deref()),
            added_since,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_query_is_unconstrained() {
        let filter = PaperQuery::default().to_filter(fixed_now());
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn test_enum_lists_normalized() {
        let query = PaperQuery {
            domain: Some("Machine Learning".to_string()),
            reading_stage: Some("Abstract Read,FullyRead".to_string()),
            impact_score: Some("Very High".to_string()),
            date_added: None,
        };

        let filter = query.to_filter(fixed_now());

        assert_eq!(filter.domains, vec!["MachineLearning"]);
        assert_eq!(filter.reading_stages, vec!["AbstractRead", "FullyRead"]);
        assert_eq!(filter.impact_scores, vec!["VeryHigh"]);
        assert!(filter.added_since.is_none());
    }

    #[test]
    fn test_empty_parameter_is_no_constraint() {
        let query = PaperQuery {
            reading_stage: Some(String::new()),
            ..PaperQuery::default()
        };
        assert!(query.to_filter(fixed_now()).reading_stages.is_empty());
    }

    #[test]
    fn test_date_windows() {
        let now = fixed_now();
        for (label, days) in [("This Week", 7), ("This Month", 30), ("Last 3 Months", 90)] {
            let query = PaperQuery {
                date_added: Some(label.to_string()),
                ..PaperQuery::default()
            };
            assert_eq!(
                query.to_filter(now).added_since,
                Some(now - Duration::days(days)),
                "window {}",
                label
            );
        }
    }

    #[test]
    fn test_all_time_and_unknown_labels_apply_no_bound() {
        for label in ["All time", "Yesterday", "this week"] {
            let query = PaperQuery {
                date_added: Some(label.to_string()),
                ..PaperQuery::default()
            };
            assert!(query.to_filter(fixed_now()).added_since.is_none(), "label {}", label);
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(DateWindow::from_label("Last 3 Months"), Some(DateWindow::LastThreeMonths));
        assert_eq!(DateWindow::from_label("All time"), Some(DateWindow::AllTime));
        assert_eq!(DateWindow::from_label("All Time"), None);
        assert!(DateWindow::AllTime.lookback().is_none());
    }
}

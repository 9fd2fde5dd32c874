//! Analytics response shapes and the arithmetic behind the summary

use paper_common::db::{DomainCitationMean, DomainStageCount, ScatterPoint, StageCount};
use serde::{Serialize, Serializer};

/// Body of `GET /api/papers/analytics`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub funnel_data: Vec<StageCount>,
    pub scatter_data: Vec<ScatterPoint>,
    pub stacked_bar_data: Vec<DomainStageCount>,
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_papers: i64,
    pub completion_rate: CompletionRate,
    pub average_citations_per_domain: Vec<DomainAverage>,
}

/// Rounded mean citation count for one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainAverage {
    pub domain: String,
    pub average: i64,
}

/// Share of papers in the fully-read stage
///
/// Serializes as `"25.0%"` for `Percentage(25.0)` and as the number `0` for
/// `NoData`, which is what clients receive when no papers exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompletionRate {
    Percentage(f64),
    NoData,
}

impl CompletionRate {
    pub fn from_counts(completed: i64, total: i64) -> Self {
        if total > 0 {
            Self::Percentage(completed as f64 / total as f64 * 100.0)
        } else {
            Self::NoData
        }
    }
}

impl Serialize for CompletionRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Percentage(value) => {
                serializer.serialize_str(&format!("{:.1}%", round_half_up_tenths(*value)))
            }
            Self::NoData => serializer.serialize_u8(0),
        }
    }
}

/// Round to the nearest integer, halves towards positive infinity
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Round to one decimal place, halves up; `{:.1}` alone rounds ties to even
fn round_half_up_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

pub fn domain_averages(means: Vec<DomainCitationMean>) -> Vec<DomainAverage> {
    means
        .into_iter()
        .map(|m| DomainAverage {
            domain: m.domain,
            average: round_half_up(m.mean),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_completion_rate_formats_one_decimal() {
        let rate = CompletionRate::from_counts(1, 4);
        assert_eq!(rate, CompletionRate::Percentage(25.0));
        assert_eq!(serde_json::to_value(rate).unwrap(), json!("25.0%"));

        let rate = CompletionRate::from_counts(1, 3);
        assert_eq!(serde_json::to_value(rate).unwrap(), json!("33.3%"));

        let rate = CompletionRate::from_counts(2, 3);
        assert_eq!(serde_json::to_value(rate).unwrap(), json!("66.7%"));

        let rate = CompletionRate::from_counts(5, 5);
        assert_eq!(serde_json::to_value(rate).unwrap(), json!("100.0%"));
    }

    #[test]
    fn test_completion_rate_ties_round_up() {
        let rate = CompletionRate::from_counts(1, 16);
        assert_eq!(rate, CompletionRate::Percentage(6.25));
        assert_eq!(serde_json::to_value(rate).unwrap(), json!("6.3%"));

        let rate = CompletionRate::from_counts(5, 16);
        assert_eq!(serde_json::to_value(rate).unwrap(), json!("31.3%"));

        let rate = CompletionRate::from_counts(1, 8);
        assert_eq!(serde_json::to_value(rate).unwrap(), json!("12.5%"));
    }

    #[test]
    fn test_completion_rate_without_papers_is_bare_zero() {
        let rate = CompletionRate::from_counts(0, 0);
        assert_eq!(rate, CompletionRate::NoData);
        assert_eq!(serde_json::to_value(rate).unwrap(), json!(0));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(10.5), 11);
        assert_eq!(round_half_up(10.49), 10);
        assert_eq!(round_half_up(3.0), 3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_domain_averages_rounded() {
        let averages = domain_averages(vec![
            DomainCitationMean { domain: "Physics".to_string(), mean: 10.5 },
            DomainCitationMean { domain: "Biology".to_string(), mean: 2.25 },
        ]);
        assert_eq!(
            averages,
            vec![
                DomainAverage { domain: "Physics".to_string(), average: 11 },
                DomainAverage { domain: "Biology".to_string(), average: 2 },
            ]
        );
    }

    #[test]
    fn test_summary_field_names() {
        let summary = Summary {
            total_papers: 0,
            completion_rate: CompletionRate::NoData,
            average_citations_per_domain: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(summary).unwrap(),
            json!({"totalPapers": 0, "completionRate": 0, "averageCitationsPerDomain": []})
        );
    }
}

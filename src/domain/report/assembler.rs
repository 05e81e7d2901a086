//! Derives display data for a stored assessment.

use serde::Serialize;

use super::recommendation::recommend;
use crate::domain::assessment::Assessment;
use crate::domain::catalog::MaturityLevel;

/// Upper bound of the radar chart's radial axis.
const CHART_SCALE_MAX: f64 = 5.0;

/// One spoke of the radar/spider chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
    pub max: f64,
}

/// One advisory line for a domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub label: &'static str,
    pub score: f64,
    pub advisory: String,
}

/// Display-ready view of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Maturity tier resolved from the overall score via the floor rule.
    pub maturity: &'static MaturityLevel,
    /// Chart series in catalog domain order.
    pub chart_series: Vec<ChartPoint>,
    /// Per-domain advisories in catalog domain order.
    pub recommendations: Vec<Recommendation>,
}

/// Assembles the report for a stored assessment.
///
/// Pure transformation: deterministic for the same record and reference
/// data, no side effects.
pub fn build_report(assessment: &Assessment) -> Report {
    let scores = assessment.scores();

    let chart_series = scores
        .domain_scores
        .iter()
        .map(|entry| ChartPoint {
            label: entry.domain.code(),
            value: entry.score,
            max: CHART_SCALE_MAX,
        })
        .collect();

    let recommendations = scores
        .domain_scores
        .iter()
        .map(|entry| Recommendation {
            label: entry.domain.code(),
            score: entry.score,
            advisory: recommend(entry.score, entry.domain.code()),
        })
        .collect();

    Report {
        maturity: MaturityLevel::for_score(scores.overall),
        chart_series,
        recommendations,
    }
}

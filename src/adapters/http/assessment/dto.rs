//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::handlers::assessment::AssessmentReport;
use crate::domain::assessment::Assessment;
use crate::domain::catalog::MaturityLevel;
use crate::domain::foundation::QuestionId;
use crate::domain::report::{ChartPoint, Recommendation};
use crate::domain::scoring::{AnswerSet, ScoreCard};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to submit a completed questionnaire.
///
/// Answers arrive as a flat map of question id to raw level, matching
/// the stored wire shape.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub name: String,
    pub answers: BTreeMap<String, u8>,
}

impl SubmitAssessmentRequest {
    /// Converts the raw answer map into a typed answer set.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending entry when a question id
    /// is malformed or a level is outside 0-5.
    pub fn typed_answers(&self) -> Result<AnswerSet, String> {
        self.answers
            .iter()
            .map(|(id, level)| {
                let id = QuestionId::new(id.as_str())
                    .map_err(|_| format!("invalid question id: {:?}", id))?;
                let level = crate::domain::catalog::Level::try_from_u8(*level)
                    .map_err(|_| format!("invalid level for {}: {}", id, level))?;
                Ok((id, level))
            })
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Per-domain score entry.
#[derive(Debug, Clone, Serialize)]
pub struct DomainScoreResponse {
    pub domain: String,
    pub score: f64,
}

/// Computed scores for one assessment.
#[derive(Debug, Clone, Serialize)]
pub struct ScoresResponse {
    pub domains: Vec<DomainScoreResponse>,
    pub overall: f64,
}

impl From<&ScoreCard> for ScoresResponse {
    fn from(scores: &ScoreCard) -> Self {
        Self {
            domains: scores
                .domain_scores
                .iter()
                .map(|entry| DomainScoreResponse {
                    domain: entry.domain.code().to_string(),
                    score: entry.score,
                })
                .collect(),
            overall: scores.overall,
        }
    }
}

/// Detailed assessment view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub id: String,
    pub name: String,
    pub answers: AnswerSet,
    pub scores: ScoresResponse,
    pub created_at: String,
}

impl From<&Assessment> for AssessmentResponse {
    fn from(record: &Assessment) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            answers: record.answers().clone(),
            scores: record.scores().into(),
            created_at: record.created_at().to_rfc3339(),
        }
    }
}

/// Assessment summary for list responses and live updates.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummaryResponse {
    pub id: String,
    pub name: String,
    pub overall: f64,
    pub created_at: String,
}

impl From<&Assessment> for AssessmentSummaryResponse {
    fn from(record: &Assessment) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            overall: record.overall(),
            created_at: record.created_at().to_rfc3339(),
        }
    }
}

/// List of assessments, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentListResponse {
    pub items: Vec<AssessmentSummaryResponse>,
    pub total: usize,
}

impl AssessmentListResponse {
    pub fn from_records(records: &[Assessment]) -> Self {
        Self {
            items: records.iter().map(Into::into).collect(),
            total: records.len(),
        }
    }
}

/// Resolved maturity tier.
#[derive(Debug, Clone, Serialize)]
pub struct MaturityResponse {
    pub level: u8,
    pub title: String,
    pub description: String,
}

impl From<&MaturityLevel> for MaturityResponse {
    fn from(maturity: &MaturityLevel) -> Self {
        Self {
            level: maturity.level.value(),
            title: maturity.title.to_string(),
            description: maturity.description.to_string(),
        }
    }
}

/// One radar chart spoke.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPointResponse {
    pub label: String,
    pub value: f64,
    pub max: f64,
}

impl From<&ChartPoint> for ChartPointResponse {
    fn from(point: &ChartPoint) -> Self {
        Self {
            label: point.label.to_string(),
            value: point.value,
            max: point.max,
        }
    }
}

/// One per-domain advisory.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub label: String,
    pub score: f64,
    pub advisory: String,
}

impl From<&Recommendation> for RecommendationResponse {
    fn from(recommendation: &Recommendation) -> Self {
        Self {
            label: recommendation.label.to_string(),
            score: recommendation.score,
            advisory: recommendation.advisory.clone(),
        }
    }
}

/// Full report view for one assessment.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub assessment_id: String,
    pub name: String,
    pub overall: f64,
    pub maturity: MaturityResponse,
    pub chart_series: Vec<ChartPointResponse>,
    pub recommendations: Vec<RecommendationResponse>,
}

impl From<&AssessmentReport> for ReportResponse {
    fn from(view: &AssessmentReport) -> Self {
        Self {
            assessment_id: view.assessment.id().to_string(),
            name: view.assessment.name().to_string(),
            overall: view.assessment.overall(),
            maturity: view.report.maturity.into(),
            chart_series: view.report.chart_series.iter().map(Into::into).collect(),
            recommendations: view.report.recommendations.iter().map(Into::into).collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::NewAssessment;
    use crate::domain::catalog::{reference_catalog, Level};
    use crate::domain::foundation::{AssessmentId, Timestamp, UserId};
    use crate::domain::scoring::compute_scores;

    fn sample_record() -> Assessment {
        let answers: AnswerSet = reference_catalog()
            .questions()
            .iter()
            .map(|q| (q.id.clone(), Level::Established))
            .collect();
        let scores = compute_scores(&answers, reference_catalog());
        Assessment::new(
            AssessmentId::new(),
            UserId::new("user-1").unwrap(),
            NewAssessment::new("Acme Corp", answers, scores),
            Timestamp::now(),
        )
        .unwrap()
    }

    #[test]
    fn submit_request_deserializes_flat_answer_map() {
        let json = r#"{"name": "Acme", "answers": {"MEA01.01": 3, "MEA02.05": 0}}"#;
        let req: SubmitAssessmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Acme");
        assert_eq!(req.answers.len(), 2);
    }

    #[test]
    fn typed_answers_converts_valid_entries() {
        let req = SubmitAssessmentRequest {
            name: "Acme".to_string(),
            answers: BTreeMap::from([("MEA01.01".to_string(), 3)]),
        };
        let answers = req.typed_answers().unwrap();
        assert_eq!(
            answers.get(&QuestionId::new("MEA01.01").unwrap()),
            Some(Level::Established)
        );
    }

    #[test]
    fn typed_answers_rejects_out_of_range_level() {
        let req = SubmitAssessmentRequest {
            name: "Acme".to_string(),
            answers: BTreeMap::from([("MEA01.01".to_string(), 6)]),
        };
        let err = req.typed_answers().unwrap_err();
        assert!(err.contains("MEA01.01"));
    }

    #[test]
    fn typed_answers_rejects_blank_question_id() {
        let req = SubmitAssessmentRequest {
            name: "Acme".to_string(),
            answers: BTreeMap::from([("  ".to_string(), 3)]),
        };
        assert!(req.typed_answers().is_err());
    }

    #[test]
    fn assessment_response_carries_scores_and_timestamp() {
        let record = sample_record();
        let response: AssessmentResponse = (&record).into();

        assert_eq!(response.name, "Acme Corp");
        assert_eq!(response.scores.domains.len(), 3);
        assert_eq!(response.scores.overall, 3.0);
        assert!(!response.created_at.is_empty());
    }

    #[test]
    fn list_response_counts_items() {
        let records = vec![sample_record(), sample_record()];
        let response = AssessmentListResponse::from_records(&records);
        assert_eq!(response.total, 2);
        assert_eq!(response.items.len(), 2);
    }

    #[test]
    fn error_response_not_found_names_the_resource() {
        let error = ErrorResponse::not_found("Assessment", "abc-123");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("Assessment"));
        assert!(error.message.contains("abc-123"));
    }
}

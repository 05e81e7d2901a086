//! Pure aggregation of raw answers into per-domain and overall averages.

use serde::{Deserialize, Serialize};

use super::AnswerSet;
use crate::domain::catalog::{Catalog, ProcessDomain};

/// Average score for one process domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: ProcessDomain,
    pub score: f64,
}

/// Computed scores for one assessment: one entry per domain plus the
/// overall average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Per-domain averages in catalog domain order.
    pub domain_scores: Vec<DomainScore>,
    /// Mean over all raw answers.
    ///
    /// This is the count-weighted mean across domains, not the mean of
    /// the domain averages; the two differ when domain sizes differ.
    pub overall: f64,
}

impl ScoreCard {
    /// Returns the average for one domain, if present.
    pub fn score_for(&self, domain: ProcessDomain) -> Option<f64> {
        self.domain_scores
            .iter()
            .find(|entry| entry.domain == domain)
            .map(|entry| entry.score)
    }
}

/// Computes per-domain and overall averages for an answer set.
///
/// Iterates the catalog rather than the answer set so every domain keeps
/// its full expected denominator; a missing answer counts as level 0.
/// Completeness is validated earlier in the submission flow, so this
/// fallback only matters for defensive recomputation. A domain with zero
/// questions scores 0.
pub fn compute_scores(answers: &AnswerSet, catalog: &Catalog) -> ScoreCard {
    let mut total_sum = 0u32;
    let mut total_count = 0u32;

    let domain_scores = ProcessDomain::ALL
        .iter()
        .map(|&domain| {
            let mut sum = 0u32;
            let mut count = 0u32;
            for question in catalog.questions_in(domain) {
                let level = answers.get(&question.id).map(|l| l.value()).unwrap_or(0);
                sum += u32::from(level);
                count += 1;
            }
            total_sum += sum;
            total_count += count;

            let score = if count == 0 {
                0.0
            } else {
                f64::from(sum) / f64::from(count)
            };
            DomainScore { domain, score }
        })
        .collect();

    let overall = if total_count == 0 {
        0.0
    } else {
        f64::from(total_sum) / f64::from(total_count)
    };

    ScoreCard {
        domain_scores,
        overall,
    }
}

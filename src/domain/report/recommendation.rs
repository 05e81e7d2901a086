//! Threshold-based advisory texts for domain scores.

/// Ordered ladder of (lower bound, advisory text) pairs over half-open
/// intervals: a score falls in the band with the highest lower bound not
/// exceeding it. Kept as an explicit table so the boundary semantics are
/// auditable and testable in isolation from rendering.
pub const RECOMMENDATION_BANDS: &[(f64, &str)] = &[
    (0.0, "Urgent: basic implementation and process logging"),
    (2.0, "Priority: standardize existing processes"),
    (3.0, "Improvement: apply well-defined, measured processes"),
    (4.0, "Optimization: focus on predictability and continuous improvement"),
    (5.0, "Excellent: sustain and innovate"),
];

/// Returns the advisory text for a score, without the domain label.
///
/// Total over [0,5]; scores below the scale fall into the lowest band.
pub fn advisory_for(score: f64) -> &'static str {
    RECOMMENDATION_BANDS
        .iter()
        .rev()
        .find(|(lower, _)| score >= *lower)
        .map(|(_, text)| *text)
        .unwrap_or(RECOMMENDATION_BANDS[0].1)
}

/// Returns the advisory for a domain score with the domain label embedded.
pub fn recommend(score: f64, domain_label: &str) -> String {
    format!("[{}] {}", domain_label, advisory_for(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_below_two_are_urgent() {
        assert!(advisory_for(0.0).starts_with("Urgent"));
        assert!(advisory_for(1.9).starts_with("Urgent"));
    }

    #[test]
    fn boundaries_fall_into_the_upper_band() {
        // Half-open intervals: each boundary belongs to the band it opens.
        assert!(advisory_for(2.0).starts_with("Priority"));
        assert!(advisory_for(3.0).starts_with("Improvement"));
        assert!(advisory_for(4.0).starts_with("Optimization"));
        assert!(advisory_for(5.0).starts_with("Excellent"));
    }

    #[test]
    fn just_below_each_boundary_stays_in_the_lower_band() {
        assert!(advisory_for(2.999).starts_with("Priority"));
        assert!(advisory_for(3.999).starts_with("Improvement"));
        assert!(advisory_for(4.999).starts_with("Optimization"));
    }

    #[test]
    fn recommend_embeds_the_domain_label() {
        let text = recommend(1.2, "MEA01");
        assert_eq!(text, "[MEA01] Urgent: basic implementation and process logging");
    }

    #[test]
    fn bands_are_ordered_by_lower_bound() {
        for window in RECOMMENDATION_BANDS.windows(2) {
            assert!(window[0].0 < window[1].0);
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn exactly_one_band_matches_every_score(score in 0.0f64..=5.0) {
                // Total function: the scan always resolves a band, and the
                // resolved band's interval actually contains the score.
                let text = advisory_for(score);
                let index = RECOMMENDATION_BANDS
                    .iter()
                    .position(|(_, t)| *t == text)
                    .unwrap();

                let (lower, _) = RECOMMENDATION_BANDS[index];
                prop_assert!(score >= lower);
                if let Some((next_lower, _)) = RECOMMENDATION_BANDS.get(index + 1) {
                    prop_assert!(score < *next_lower);
                }
            }
        }
    }
}

//! # Confidence Module
//!
//! Confidence scoring and verdicts for system analysis.
//!
//! - Score blends the measurable-privilege ratio with mean reach confidence
//! - Verdict buckets: MEASURABLE / ESTIMABLE / SPECULATION
//! - The `is_measurable` flag uses its own threshold, independent of the buckets

use crate::types::ReachEstimation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest confidence with a MEASURABLE verdict.
pub const MEASURABLE_THRESHOLD: f64 = 0.85;

/// Lowest confidence with an ESTIMABLE verdict.
pub const ESTIMABLE_THRESHOLD: f64 = 0.5;

/// Lowest confidence for which an analysis reports `is_measurable`.
///
/// Deliberately not aligned with the verdict buckets: confidence in
/// `[0.7, 0.85)` reports `is_measurable = true` with an ESTIMABLE verdict.
pub const MEASURABLE_FLAG_THRESHOLD: f64 = 0.7;

/// Verdict on how quantifiable a system's power is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// confidence < 0.5
    Speculation,
    /// 0.5 <= confidence < 0.85
    Estimable,
    /// confidence >= 0.85
    Measurable,
}

impl Verdict {
    /// Bucket a confidence value, evaluated from high to low.
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= MEASURABLE_THRESHOLD {
            Verdict::Measurable
        } else if confidence >= ESTIMABLE_THRESHOLD {
            Verdict::Estimable
        } else {
            Verdict::Speculation
        }
    }

    /// The literal verdict label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Measurable => "MEASURABLE",
            Verdict::Estimable => "ESTIMABLE",
            Verdict::Speculation => "SPECULATION",
        }
    }

    /// Marker printed in front of the label in reports.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Verdict::Measurable => "✓",
            Verdict::Estimable => "~",
            Verdict::Speculation => "✗",
        }
    }

    /// Label with its marker, e.g. `✓ MEASURABLE`.
    #[must_use]
    pub fn marked(&self) -> String {
        format!("{} {}", self.symbol(), self.label())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a confidence value clears [`MEASURABLE_FLAG_THRESHOLD`].
#[must_use]
pub fn is_measurable(confidence: f64) -> bool {
    confidence >= MEASURABLE_FLAG_THRESHOLD
}

/// Blend the measurable-privilege ratio with mean reach confidence.
///
/// - `total == 0` yields 0.0
/// - otherwise `(measurable / total + mean(reach confidence)) / 2`
/// - an empty estimation list contributes a mean of 0.0
#[must_use]
pub fn compute_confidence(measurable: usize, total: usize, reaches: &[ReachEstimation]) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let base_confidence = measurable as f64 / total as f64;
    let reach_sum: f64 = reaches.iter().map(ReachEstimation::confidence).sum();
    let avg_reach_confidence = reach_sum / reaches.len().max(1) as f64;

    (base_confidence + avg_reach_confidence) / 2.0
}

/// Render a ratio as a whole percentage, e.g. `0.654` as `65%`.
#[must_use]
pub fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reach(confidence: f64) -> ReachEstimation {
        ReachEstimation::new(true, 1, 2, confidence, "test", "units").expect("valid reach")
    }

    #[test]
    fn verdict_boundaries() {
        assert_eq!(Verdict::from_confidence(1.0), Verdict::Measurable);
        assert_eq!(Verdict::from_confidence(0.85), Verdict::Measurable);
        assert_eq!(Verdict::from_confidence(0.849999), Verdict::Estimable);
        assert_eq!(Verdict::from_confidence(0.5), Verdict::Estimable);
        assert_eq!(Verdict::from_confidence(0.499999), Verdict::Speculation);
        assert_eq!(Verdict::from_confidence(0.0), Verdict::Speculation);
    }

    #[test]
    fn flag_threshold_boundary() {
        assert!(!is_measurable(0.699999));
        assert!(is_measurable(0.7));
        assert!(is_measurable(0.75));
    }

    #[test]
    fn flag_and_verdict_disagree_between_thresholds() {
        let confidence = 0.75;
        assert!(is_measurable(confidence));
        assert_eq!(Verdict::from_confidence(confidence), Verdict::Estimable);
    }

    #[test]
    fn verdict_ordering() {
        assert!(Verdict::Speculation < Verdict::Estimable);
        assert!(Verdict::Estimable < Verdict::Measurable);
    }

    #[test]
    fn verdict_labels() {
        assert_eq!(Verdict::Measurable.to_string(), "MEASURABLE");
        assert_eq!(Verdict::Estimable.marked(), "~ ESTIMABLE");
        assert_eq!(Verdict::Speculation.marked(), "✗ SPECULATION");
    }

    #[test]
    fn confidence_without_privileges_is_zero() {
        assert_eq!(compute_confidence(0, 0, &[]), 0.0);
        assert_eq!(compute_confidence(0, 0, &[reach(1.0)]), 0.0);
    }

    #[test]
    fn confidence_without_estimations_halves_ratio() {
        assert_eq!(compute_confidence(2, 2, &[]), 0.5);
    }

    #[test]
    fn confidence_blends_ratio_and_reach() {
        let reaches = [reach(0.9), reach(0.9), reach(0.9), reach(0.5), reach(0.5)];
        let confidence = compute_confidence(3, 5, &reaches);
        // (0.6 + 0.74) / 2
        assert!((confidence - 0.67).abs() < 1e-9);
    }

    #[test]
    fn percent_rounds_to_whole_number() {
        assert_eq!(percent(0.0), "0%");
        assert_eq!(percent(0.4), "40%");
        assert_eq!(percent(1.0), "100%");
    }
}

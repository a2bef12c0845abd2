//! # Overview Module
//!
//! Comparative overview of several systems: one analysis per system plus the
//! most and least measurable among them.

use crate::analyzer::{SystemAnalysis, analyze};
use crate::confidence::percent;
use crate::system::PowerSystem;
use serde::Serialize;
use std::fmt;

/// Width of the overview table.
const TABLE_WIDTH: usize = 95;

/// Analyses of several systems, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    analyses: Vec<SystemAnalysis>,
}

impl Overview {
    /// Analyze every system, preserving input order.
    #[must_use]
    pub fn from_systems(systems: &[Box<dyn PowerSystem>]) -> Self {
        Self {
            analyses: systems.iter().map(|system| analyze(system.as_ref())).collect(),
        }
    }

    #[must_use]
    pub fn analyses(&self) -> &[SystemAnalysis] {
        &self.analyses
    }

    /// First analysis with the highest confidence.
    #[must_use]
    pub fn most_measurable(&self) -> Option<&SystemAnalysis> {
        self.first_by(|candidate, best| candidate > best)
    }

    /// First analysis with the lowest confidence.
    #[must_use]
    pub fn least_measurable(&self) -> Option<&SystemAnalysis> {
        self.first_by(|candidate, best| candidate < best)
    }

    /// Keep the current pick unless `replaces(candidate, current)` holds.
    fn first_by(&self, replaces: impl Fn(f64, f64) -> bool) -> Option<&SystemAnalysis> {
        self.analyses.iter().reduce(|best, candidate| {
            if replaces(candidate.confidence, best.confidence) {
                candidate
            } else {
                best
            }
        })
    }
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = "-".repeat(TABLE_WIDTH);

        writeln!(f, "SYSTEM OVERVIEW")?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<45} {:<20} {:<12} Measurable/Total",
            "System", "Verdict", "Confidence"
        )?;
        writeln!(f, "{divider}")?;

        for analysis in &self.analyses {
            let ratio = format!(
                "{}/{}",
                analysis.measurable_privileges, analysis.total_privileges
            );
            writeln!(
                f,
                "{:<45} {:<20} {:>6}      {:>8}",
                analysis.system_name,
                analysis.verdict.marked(),
                percent(analysis.confidence),
                ratio
            )?;
        }
        writeln!(f, "{divider}")?;

        let extremes = [
            ("MOST MEASURABLE", self.most_measurable()),
            ("LEAST MEASURABLE", self.least_measurable()),
        ];
        for (heading, pick) in extremes {
            if let Some(analysis) = pick {
                writeln!(f)?;
                writeln!(f, "{heading}: {}", analysis.system_name)?;
                writeln!(f, "Confidence: {}", percent(analysis.confidence))?;
                writeln!(f, "Why: {}", analysis.reasoning)?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

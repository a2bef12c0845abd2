//! # Analyzer Module
//!
//! Reduces a [`PowerSystem`] to a [`SystemAnalysis`].
//!
//! Each call to [`analyze`] builds a fresh analysis. Nothing is cached and no
//! state survives between calls, so the same system always yields an
//! identical analysis.

use crate::confidence::{Verdict, compute_confidence, is_measurable, percent};
use crate::system::PowerSystem;
use crate::types::ReachEstimation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural metrics of a system, gathered alongside its verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCharacteristics {
    /// Relations per distinct position.
    pub power_density: f64,
    /// Share of surveillance mechanisms.
    pub surveillance_intensity: f64,
    /// Whether any mechanism produces knowledge.
    pub produces_knowledge: bool,
    /// Number of disciplinary mechanisms.
    pub disciplinary_count: usize,
    /// Number of power relations.
    pub total_relations: usize,
}

impl PowerCharacteristics {
    /// Gather the characteristics of a system.
    #[must_use]
    pub fn from_system(system: &dyn PowerSystem) -> Self {
        Self {
            power_density: system.power_density(),
            surveillance_intensity: system.surveillance_intensity(),
            produces_knowledge: system.produces_knowledge(),
            disciplinary_count: system.disciplinary_mechanisms().len(),
            total_relations: system.power_relations().len(),
        }
    }
}

/// Complete measurability analysis of one system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemAnalysis {
    pub system_name: String,
    /// `confidence >= 0.7`; independent of `verdict`.
    pub is_measurable: bool,
    pub confidence: f64,
    /// Sum of every privilege's minimum impact.
    pub minimum_reach: u64,
    /// Sum of every privilege's maximum impact.
    pub maximum_reach: u64,
    pub measurable_privileges: usize,
    pub total_privileges: usize,
    pub verdict: Verdict,
    pub reasoning: String,
    pub power_characteristics: PowerCharacteristics,
}

impl SystemAnalysis {
    /// Measurable privileges over total privileges (0.0 with no privileges).
    #[must_use]
    pub fn measurability_ratio(&self) -> f64 {
        if self.total_privileges == 0 {
            return 0.0;
        }
        self.measurable_privileges as f64 / self.total_privileges as f64
    }
}

/// Human-readable summary of an analysis.
impl fmt::Display for SystemAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let traits = &self.power_characteristics;

        writeln!(f, "{} {}", self.verdict.marked(), self.system_name)?;
        writeln!(f, "Confidence: {}", percent(self.confidence))?;
        writeln!(
            f,
            "Measurable Privileges: {}/{}",
            self.measurable_privileges, self.total_privileges
        )?;
        writeln!(f, "Reach: {} - {}", self.minimum_reach, self.maximum_reach)?;
        writeln!(f)?;
        writeln!(f, "{}", self.reasoning)?;
        writeln!(f)?;
        writeln!(f, "Power Characteristics:")?;
        writeln!(f, "- Power Density: {:.2}", traits.power_density)?;
        writeln!(
            f,
            "- Surveillance Intensity: {}",
            percent(traits.surveillance_intensity)
        )?;
        writeln!(f, "- Produces Knowledge: {}", traits.produces_knowledge)?;
        writeln!(f, "- Disciplinary Mechanisms: {}", traits.disciplinary_count)?;
        writeln!(f, "- Power Relations: {}", traits.total_relations)
    }
}

/// Analyze a system's measurability.
///
/// `estimate_reach` is called exactly once per privilege; the same
/// estimations feed both the confidence score and the reach totals.
#[must_use]
pub fn analyze(system: &dyn PowerSystem) -> SystemAnalysis {
    let privileges = system.privileges();
    let total = privileges.len();
    let measurable = privileges
        .iter()
        .filter(|privilege| privilege.is_measurable())
        .count();

    let reaches: Vec<ReachEstimation> = privileges
        .iter()
        .map(|privilege| system.estimate_reach(privilege))
        .collect();

    let confidence = compute_confidence(measurable, total, &reaches);

    let minimum_reach = reaches
        .iter()
        .fold(0u64, |acc, reach| acc.saturating_add(reach.minimum_impact()));
    let maximum_reach = reaches
        .iter()
        .fold(0u64, |acc, reach| acc.saturating_add(reach.maximum_impact()));

    let verdict = Verdict::from_confidence(confidence);

    SystemAnalysis {
        system_name: system.name().to_string(),
        is_measurable: is_measurable(confidence),
        confidence,
        minimum_reach,
        maximum_reach,
        measurable_privileges: measurable,
        total_privileges: total,
        verdict,
        reasoning: reasoning(verdict, measurable, total),
        power_characteristics: PowerCharacteristics::from_system(system),
    }
}

/// Explanation for a verdict, citing the measurable/total count.
#[must_use]
pub fn reasoning(verdict: Verdict, measurable: usize, total: usize) -> String {
    match verdict {
        Verdict::Measurable => format!(
            "This system demonstrates HIGH MEASURABILITY. \
             {measurable}/{total} privileges have concrete limitations. \
             Power effects are quantifiable and observable, so this power \
             can be analyzed through its measurable effects."
        ),
        Verdict::Estimable => format!(
            "This system shows MODERATE MEASURABILITY. \
             {measurable}/{total} privileges have some concrete limits, \
             but others remain more abstract. \
             Power is partially quantifiable but requires estimation: \
             more diffuse, yet still analyzable."
        ),
        Verdict::Speculation => format!(
            "This system exhibits LOW MEASURABILITY. \
             Only {measurable}/{total} privileges have concrete limitations. \
             Power appears more as abstract influence than measurable capacity; \
             it operates through discourse and subjectification, \
             harder to quantify but no less real."
        ),
    }
}

// =============================================================================
// TESTS
// =============================================================================

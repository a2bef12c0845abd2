//! # Report Module
//!
//! Text reports layered over the analyzer:
//! - [`compare`]: side-by-side comparison of two systems
//! - [`demonstrate_concept`]: privilege → limitation → measurement walkthrough
//!
//! Both read the same accessors as [`analyze`] and never reorder them.

use crate::analyzer::{SystemAnalysis, analyze};
use crate::confidence::percent;
use crate::system::PowerSystem;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Width of the rules drawn between report sections.
pub const RULE_WIDTH: usize = 70;

pub(crate) fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

// =============================================================================
// COMPARISON
// =============================================================================

/// Two analyses side by side.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub first: SystemAnalysis,
    pub second: SystemAnalysis,
}

impl Comparison {
    /// Analyze both systems.
    #[must_use]
    pub fn new(first: &dyn PowerSystem, second: &dyn PowerSystem) -> Self {
        Self {
            first: analyze(first),
            second: analyze(second),
        }
    }

    /// `(more measurable, less measurable)`, or `None` on a tie.
    fn ranked(&self) -> Option<(&SystemAnalysis, &SystemAnalysis)> {
        match self.first.confidence.partial_cmp(&self.second.confidence) {
            Some(Ordering::Greater) => Some((&self.first, &self.second)),
            Some(Ordering::Less) => Some((&self.second, &self.first)),
            _ => None,
        }
    }

    /// The analysis with strictly higher confidence, or `None` on a tie.
    #[must_use]
    pub fn more_measurable(&self) -> Option<&SystemAnalysis> {
        self.ranked().map(|(winner, _)| winner)
    }

    /// One-line interpretation naming the more measurable system.
    #[must_use]
    pub fn interpretation(&self) -> String {
        match self.ranked() {
            Some((winner, loser)) => format!(
                "{} is MORE MEASURABLE than {}.",
                winner.system_name, loser.system_name
            ),
            None => "Both systems show similar measurability.".to_string(),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (&self.first, &self.second);
        let (ta, tb) = (&a.power_characteristics, &b.power_characteristics);

        writeln!(f, "POWER SYSTEM COMPARISON")?;
        writeln!(f)?;
        writeln!(f, "System 1: {}", a.system_name)?;
        writeln!(
            f,
            "{} | Confidence: {}",
            a.verdict.marked(),
            percent(a.confidence)
        )?;
        writeln!(f)?;
        writeln!(f, "System 2: {}", b.system_name)?;
        writeln!(
            f,
            "{} | Confidence: {}",
            b.verdict.marked(),
            percent(b.confidence)
        )?;
        writeln!(f)?;

        writeln!(f, "MEASURABILITY:")?;
        writeln!(
            f,
            "- {}: {} measurable",
            a.system_name,
            percent(a.measurability_ratio())
        )?;
        writeln!(
            f,
            "- {}: {} measurable",
            b.system_name,
            percent(b.measurability_ratio())
        )?;
        writeln!(f)?;

        writeln!(f, "POWER DENSITY (relations per position):")?;
        writeln!(f, "- {}: {:.2}", a.system_name, ta.power_density)?;
        writeln!(f, "- {}: {:.2}", b.system_name, tb.power_density)?;
        writeln!(f)?;

        writeln!(f, "SURVEILLANCE:")?;
        writeln!(
            f,
            "- {}: {}",
            a.system_name,
            percent(ta.surveillance_intensity)
        )?;
        writeln!(
            f,
            "- {}: {}",
            b.system_name,
            percent(tb.surveillance_intensity)
        )?;
        writeln!(f)?;

        writeln!(f, "KNOWLEDGE PRODUCTION:")?;
        writeln!(f, "- {}: {}", a.system_name, ta.produces_knowledge)?;
        writeln!(f, "- {}: {}", b.system_name, tb.produces_knowledge)?;
        writeln!(f)?;

        writeln!(f, "{}", self.interpretation())?;
        match self.more_measurable() {
            Some(_) => writeln!(
                f,
                "More measurable systems often have more explicit disciplinary mechanisms."
            ),
            None => writeln!(
                f,
                "Different power regimes can have equivalent measurability."
            ),
        }
    }
}

/// Compare two systems and render the comparison.
#[must_use]
pub fn compare(first: &dyn PowerSystem, second: &dyn PowerSystem) -> String {
    Comparison::new(first, second).to_string()
}

// =============================================================================
// CONCEPT DEMONSTRATION
// =============================================================================

/// Full walkthrough of one system's privileges, mechanisms and relations.
pub struct ConceptDemonstration<'a> {
    system: &'a dyn PowerSystem,
}

impl<'a> ConceptDemonstration<'a> {
    #[must_use]
    pub fn new(system: &'a dyn PowerSystem) -> Self {
        Self { system }
    }

    fn write_privileges(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PRIVILEGE → LIMITATION → MEASUREMENT")?;
        writeln!(f, "{}", rule('-'))?;
        writeln!(f)?;

        for privilege in self.system.privileges() {
            writeln!(f, "Privilege: {}", privilege.name)?;
            writeln!(f, "  Scope: {}", privilege.scope)?;

            if !privilege.limitations.is_empty() {
                writeln!(f, "  Limitations:")?;
                for limitation in &privilege.limitations {
                    writeln!(f, "    • {}", limitation)?;
                }
            }

            let reach = self.system.estimate_reach(privilege);
            writeln!(f, "  Measurement:")?;
            writeln!(f, "    • Measurable: {}", reach.is_measurable())?;
            writeln!(
                f,
                "    • Reach: {} - {}",
                reach.minimum_impact(),
                reach.maximum_impact()
            )?;
            writeln!(f, "    • Confidence: {}", percent(reach.confidence()))?;
            writeln!(f, "    • Type: {}", reach.measurement_type())?;

            if !privilege.produces.is_empty() {
                writeln!(f, "  Produces (productive power):")?;
                for effect in &privilege.produces {
                    writeln!(f, "    • {}", effect)?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }

    fn write_mechanisms(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mechanisms = self.system.disciplinary_mechanisms();
        if mechanisms.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "DISCIPLINARY MECHANISMS")?;
        writeln!(f, "{}", rule('-'))?;
        for mechanism in mechanisms {
            writeln!(f)?;
            writeln!(f, "{}", mechanism.name)?;
            writeln!(f, "  Type: {}", mechanism.mechanism_type)?;
            writeln!(f, "  Visibility Pattern: {}", mechanism.visibility_pattern)?;
            writeln!(f, "  Produces Knowledge: {}", mechanism.produces_knowledge)?;
        }

        Ok(())
    }

    fn write_relations(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relations = self.system.power_relations();
        if relations.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "POWER RELATIONS")?;
        writeln!(f, "{}", rule('-'))?;
        for relation in relations {
            writeln!(f)?;
            writeln!(
                f,
                "{} {} {}",
                relation.from_position,
                relation.direction.arrow(),
                relation.to_position
            )?;
            writeln!(f, "  Privilege: {}", relation.privilege.name)?;
            writeln!(f, "  Direction: {}", relation.direction)?;
            if relation.is_reversible() {
                writeln!(
                    f,
                    "  Resistance Points: {}",
                    relation.resistance_points.join(", ")
                )?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ConceptDemonstration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", rule('='))?;
        writeln!(f, "POWER ANALYSIS: {}", self.system.name())?;
        writeln!(f, "{}", rule('='))?;
        writeln!(f)?;
        writeln!(f, "Description: {}", self.system.description())?;
        writeln!(f)?;

        self.write_privileges(f)?;
        self.write_mechanisms(f)?;
        self.write_relations(f)?;

        writeln!(f)?;
        writeln!(f, "{}", rule('='))
    }
}

/// Render the privilege → limitation → measurement walkthrough of a system.
#[must_use]
pub fn demonstrate_concept(system: &dyn PowerSystem) -> String {
    ConceptDemonstration::new(system).to_string()
}

// =============================================================================
// TESTS
// =============================================================================

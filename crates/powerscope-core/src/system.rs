//! # System Module
//!
//! The `PowerSystem` capability and the metrics derived from it.
//!
//! A system supplies four read-only accessors and a reach estimator. Every
//! other metric here is computed from those accessors and carries no state
//! of its own.

use crate::types::{DisciplinaryMechanism, PowerRelation, Privilege, ReachEstimation};
use std::collections::BTreeSet;

/// Mechanism type counted by [`PowerSystem::surveillance_intensity`].
pub const SURVEILLANCE_KIND: &str = "surveillance";

/// A modelled power system.
///
/// Implementors must be `Send + Sync`: systems are immutable after
/// construction and may be analyzed from several threads at once.
///
/// # Contract
///
/// - Accessors return items in a stable order; reports preserve that order.
/// - `estimate_reach` is a pure function of `(self, privilege)`.
pub trait PowerSystem: Send + Sync {
    /// Name of this system.
    fn name(&self) -> &str;

    /// How power operates in this system.
    fn description(&self) -> &str;

    /// All privileges, in declaration order.
    fn privileges(&self) -> &[Privilege];

    /// All power relations, in declaration order.
    fn power_relations(&self) -> &[PowerRelation];

    /// All disciplinary mechanisms, in declaration order.
    fn disciplinary_mechanisms(&self) -> &[DisciplinaryMechanism];

    /// Estimate the measurable reach of a privilege.
    fn estimate_reach(&self, privilege: &Privilege) -> ReachEstimation;

    /// Number of privileges.
    fn total_privileges(&self) -> usize {
        self.privileges().len()
    }

    /// Number of privileges whose limitations are measurable.
    fn measurable_privileges(&self) -> usize {
        self.privileges()
            .iter()
            .filter(|privilege| privilege.is_measurable())
            .count()
    }

    /// Relations per distinct position.
    ///
    /// Returns 0.0 when there are no relations. Higher values mean power is
    /// concentrated on fewer positions.
    fn power_density(&self) -> f64 {
        let relations = self.power_relations();
        if relations.is_empty() {
            return 0.0;
        }

        let positions: BTreeSet<&str> = relations
            .iter()
            .flat_map(|relation| [relation.from_position.as_str(), relation.to_position.as_str()])
            .collect();

        if positions.is_empty() {
            return 0.0;
        }

        relations.len() as f64 / positions.len() as f64
    }

    /// Share of mechanisms whose type mentions surveillance.
    ///
    /// Returns 0.0 when there are no mechanisms.
    fn surveillance_intensity(&self) -> f64 {
        let mechanisms = self.disciplinary_mechanisms();
        let surveillance_count = mechanisms
            .iter()
            .filter(|mechanism| mechanism.is_kind(SURVEILLANCE_KIND))
            .count();

        surveillance_count as f64 / mechanisms.len().max(1) as f64
    }

    /// Whether any mechanism produces knowledge.
    fn produces_knowledge(&self) -> bool {
        self.disciplinary_mechanisms()
            .iter()
            .any(|mechanism| mechanism.produces_knowledge)
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Property-Based Tests
//!
//! Invariants of the measurability model checked with proptest.

use powerscope_core::confidence::compute_confidence;
use powerscope_core::{
    DisciplinaryMechanism, MEASURABILITY_KEYWORDS, PowerDirection, PowerRelation, PowerSystem,
    Privilege, PrivilegeScope, ReachEstimation, Verdict, analyze,
};
use proptest::collection::vec;
use proptest::prelude::*;

/// Generated system; every privilege reaches with the same confidence.
#[derive(Debug)]
struct Generated {
    privileges: Vec<Privilege>,
    relations: Vec<PowerRelation>,
    mechanisms: Vec<DisciplinaryMechanism>,
    confidence: f64,
}

impl PowerSystem for Generated {
    fn name(&self) -> &str {
        "Generated"
    }

    fn description(&self) -> &str {
        "generated by proptest"
    }

    fn privileges(&self) -> &[Privilege] {
        &self.privileges
    }

    fn power_relations(&self) -> &[PowerRelation] {
        &self.relations
    }

    fn disciplinary_mechanisms(&self) -> &[DisciplinaryMechanism] {
        &self.mechanisms
    }

    fn estimate_reach(&self, _privilege: &Privilege) -> ReachEstimation {
        ReachEstimation::new(true, 1, 10, self.confidence, "generated", "units")
            .unwrap_or_else(|_| ReachEstimation::unknown())
    }
}

fn direction() -> impl Strategy<Value = PowerDirection> {
    prop_oneof![
        Just(PowerDirection::TopDown),
        Just(PowerDirection::BottomUp),
        Just(PowerDirection::Lateral),
        Just(PowerDirection::Circular),
        Just(PowerDirection::Capillary),
    ]
}

fn generated() -> impl Strategy<Value = Generated> {
    (
        vec(any::<bool>(), 0..8),
        vec((0u8..6, 0u8..6, direction()), 0..12),
        vec((any::<bool>(), any::<bool>()), 0..8),
        0.0f64..=1.0,
    )
        .prop_map(|(bounded, links, kinds, confidence)| Generated {
            privileges: bounded
                .iter()
                .enumerate()
                .map(|(i, &bounded)| {
                    let limitation = if bounded { "max 3 per day" } else { "whenever" };
                    Privilege::new(format!("p{i}"), PrivilegeScope::Global, "generated")
                        .with_limitations([limitation])
                })
                .collect(),
            relations: links
                .iter()
                .map(|&(from, to, direction)| {
                    let privilege = Privilege::new("link", PrivilegeScope::Limited, "generated");
                    PowerRelation::new(
                        format!("pos{from}"),
                        format!("pos{to}"),
                        privilege,
                        direction,
                    )
                })
                .collect(),
            mechanisms: kinds
                .iter()
                .map(|&(watching, knowing)| {
                    let kind = if watching { "Peer Surveillance" } else { "normalization" };
                    DisciplinaryMechanism::new("m", kind, "distributed", knowing)
                })
                .collect(),
            confidence,
        })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Any limitation embedding a keyword, in any case, is measurable.
    #[test]
    fn embedded_keyword_is_measurable(
        prefix in "[a-z ]{0,12}",
        suffix in "[a-z ]{0,12}",
        index in 0usize..MEASURABILITY_KEYWORDS.len(),
        upper in any::<bool>(),
    ) {
        let keyword = MEASURABILITY_KEYWORDS[index];
        let keyword = if upper { keyword.to_uppercase() } else { keyword.to_string() };
        let privilege = Privilege::new("p", PrivilegeScope::Global, "p")
            .with_limitations([format!("{prefix}{keyword}{suffix}")]);

        prop_assert!(privilege.is_measurable());
    }

    /// Limitations drawn from letters that spell no keyword are never measurable.
    #[test]
    fn keyword_free_limitation_is_not_measurable(text in "[bdfghjopqvwy ]{0,40}") {
        let privilege = Privilege::new("p", PrivilegeScope::Global, "p")
            .with_limitations([text]);

        prop_assert!(!privilege.is_measurable());
    }

    /// Construction succeeds exactly when both invariants hold.
    #[test]
    fn reach_validation(
        minimum in any::<u64>(),
        maximum in any::<u64>(),
        confidence in -1.0f64..2.0,
    ) {
        let result = ReachEstimation::new(true, minimum, maximum, confidence, "r", "units");
        let valid = (0.0..=1.0).contains(&confidence) && minimum <= maximum;

        prop_assert_eq!(result.is_ok(), valid);
    }

    /// Density is zero without relations and never exceeds the relation count.
    #[test]
    fn density_bounds(system in generated()) {
        let density = system.power_density();
        let relations = system.power_relations().len();

        if relations == 0 {
            prop_assert_eq!(density, 0.0);
        } else {
            prop_assert!(density > 0.0);
            prop_assert!(density <= relations as f64);
        }
    }

    /// Surveillance intensity is a share in [0, 1].
    #[test]
    fn intensity_bounds(system in generated()) {
        let intensity = system.surveillance_intensity();
        prop_assert!((0.0..=1.0).contains(&intensity));
    }

    /// Confidence is in [0, 1] and the verdict agrees with it.
    #[test]
    fn analysis_is_consistent(system in generated()) {
        let analysis = analyze(&system);

        prop_assert!((0.0..=1.0).contains(&analysis.confidence));
        prop_assert!(analysis.measurable_privileges <= analysis.total_privileges);
        prop_assert_eq!(analysis.verdict, Verdict::from_confidence(analysis.confidence));
        prop_assert_eq!(analysis.is_measurable, analysis.confidence >= 0.7);
    }

    /// Analyzing twice yields identical results.
    #[test]
    fn analysis_is_deterministic(system in generated()) {
        prop_assert_eq!(analyze(&system), analyze(&system));
    }

    /// Blended confidence never leaves [0, 1].
    #[test]
    fn blended_confidence_bounds(
        confidences in vec(0.0f64..=1.0, 0..10),
        total in 0usize..10,
        measurable in 0usize..10,
    ) {
        let measurable = measurable.min(total);
        let reaches: Vec<ReachEstimation> = confidences
            .iter()
            .map(|&c| ReachEstimation::new(true, 0, 0, c, "r", "units").expect("valid"))
            .collect();

        let confidence = compute_confidence(measurable, total, &reaches);
        prop_assert!((0.0..=1.0).contains(&confidence));
    }
}

//! # Analysis Tier Tests (T0-T3)
//!
//! Each tier builds on the one below it. A failure in a lower tier makes the
//! results of every higher tier meaningless.
//!
//! ## Tiers
//! - T0: Record Integrity
//! - T1: Structural Metrics
//! - T2: Measurability Analysis
//! - T3: Cross-System Reports

use powerscope_core::{
    Invariant, PowerError, PowerSystem, Privilege, PrivilegeScope, ReachEstimation, SystemKind,
    Verdict, all_systems, analyze,
};

fn build(kind: SystemKind) -> Box<dyn PowerSystem> {
    kind.build().expect("catalog system builds")
}

// =============================================================================
// TIER T0: RECORD INTEGRITY
// =============================================================================

mod t0_record_integrity {
    use super::*;

    /// T0.1: Confidence outside [0, 1] is rejected.
    #[test]
    fn confidence_above_one_rejected() {
        let result = ReachEstimation::new(true, 1, 2, 1.5, "too sure", "units");
        assert_eq!(
            result,
            Err(PowerError::InvariantViolation(Invariant::ConfidenceRange(1.5)))
        );
    }

    /// T0.2: Inverted impact bounds are rejected.
    #[test]
    fn inverted_impacts_rejected() {
        let result = ReachEstimation::new(true, 10, 5, 0.5, "backwards", "units");
        assert!(matches!(
            result,
            Err(PowerError::InvariantViolation(Invariant::ImpactOrder {
                minimum: 10,
                maximum: 5
            }))
        ));
    }

    /// T0.3: Equal bounds with mid confidence are accepted.
    #[test]
    fn equal_impacts_accepted() {
        let reach = ReachEstimation::new(true, 5, 5, 0.5, "exact", "units").expect("valid");
        assert_eq!(reach.minimum_impact(), 5);
        assert_eq!(reach.maximum_impact(), 5);
    }

    /// T0.4: "unlimited" counts as a measurable limitation.
    #[test]
    fn unlimited_matches_limit_keyword() {
        let privilege = Privilege::new("Retention", PrivilegeScope::Global, "keep data")
            .with_limitations(["Retention: UNLIMITED duration"]);
        assert!(privilege.is_measurable());
    }

    /// T0.5: Limitations without keywords are not measurable.
    #[test]
    fn no_constraints_is_not_measurable() {
        let privilege = Privilege::new("Anything", PrivilegeScope::Global, "do anything")
            .with_limitations(["no constraints"]);
        assert!(!privilege.is_measurable());

        let bare = Privilege::new("Bare", PrivilegeScope::None, "nothing declared");
        assert!(!bare.is_measurable());
    }
}

// =============================================================================
// TIER T1: STRUCTURAL METRICS
// =============================================================================

mod t1_structural_metrics {
    use super::*;

    /// T1.1: Density counts distinct positions across both ends.
    #[test]
    fn catalog_power_density() {
        let expected = [
            (SystemKind::SocialMedia, 6.0 / 7.0),
            (SystemKind::Workplace, 2.0 / 3.0),
            (SystemKind::Education, 1.0),
            (SystemKind::AcademicPublishing, 1.0),
            (SystemKind::PublicHealth, 4.0 / 6.0),
            (SystemKind::FitnessTracking, 3.0 / 5.0),
        ];
        for (kind, density) in expected {
            let system = build(kind);
            assert!(
                (system.power_density() - density).abs() < 1e-12,
                "{kind}: {}",
                system.power_density()
            );
        }
    }

    /// T1.2: Intensity is the share of surveillance mechanisms.
    #[test]
    fn catalog_surveillance_intensity() {
        let expected = [
            (SystemKind::SocialMedia, 0.2),
            (SystemKind::Workplace, 0.5),
            (SystemKind::Education, 0.2),
            (SystemKind::AcademicPublishing, 1.0 / 3.0),
            (SystemKind::PublicHealth, 0.4),
            (SystemKind::FitnessTracking, 1.0 / 3.0),
        ];
        for (kind, intensity) in expected {
            let system = build(kind);
            assert!((system.surveillance_intensity() - intensity).abs() < 1e-12, "{kind}");
        }
    }

    /// T1.3: Every catalog system produces knowledge.
    #[test]
    fn catalog_produces_knowledge() {
        for system in all_systems().expect("catalog") {
            assert!(system.produces_knowledge(), "{}", system.name());
        }
    }

    /// T1.4: Metrics stay within their bounds.
    #[test]
    fn metrics_are_bounded() {
        for system in all_systems().expect("catalog") {
            let intensity = system.surveillance_intensity();
            assert!((0.0..=1.0).contains(&intensity));
            assert!(system.power_density() >= 0.0);
            assert!(system.measurable_privileges() <= system.total_privileges());
        }
    }
}

// =============================================================================
// TIER T2: MEASURABILITY ANALYSIS
// =============================================================================

mod t2_measurability {
    use super::*;

    /// T2.1: Confidence matches the blended formula for every system.
    #[test]
    fn catalog_confidence() {
        let expected = [
            (SystemKind::SocialMedia, 0.71),
            (SystemKind::Workplace, (0.0 + (0.98 + 0.95 + 0.99) / 3.0) / 2.0),
            (SystemKind::Education, 0.483),
            (SystemKind::AcademicPublishing, (1.0 + (0.97 + 0.99 + 0.90) / 3.0) / 2.0),
            (SystemKind::PublicHealth, 0.67),
            (SystemKind::FitnessTracking, 0.79),
        ];
        for (kind, confidence) in expected {
            let analysis = analyze(build(kind).as_ref());
            assert!(
                (analysis.confidence - confidence).abs() < 1e-9,
                "{kind}: {}",
                analysis.confidence
            );
        }
    }

    /// T2.2: The measurable flag and the verdict use separate thresholds.
    #[test]
    fn flag_and_verdict_can_disagree() {
        let analysis = analyze(build(SystemKind::FitnessTracking).as_ref());
        assert!(analysis.is_measurable);
        assert_eq!(analysis.verdict, Verdict::Estimable);

        let analysis = analyze(build(SystemKind::PublicHealth).as_ref());
        assert!(!analysis.is_measurable);
        assert_eq!(analysis.verdict, Verdict::Estimable);
    }

    /// T2.3: Reach totals sum every privilege's bounds.
    #[test]
    fn reach_totals() {
        let analysis = analyze(build(SystemKind::PublicHealth).as_ref());
        assert_eq!(analysis.minimum_reach, 1_353_500_120);
        assert_eq!(analysis.maximum_reach, 11_750_000_000);

        let analysis = analyze(build(SystemKind::Workplace).as_ref());
        assert_eq!(analysis.minimum_reach, 10_110);
        assert_eq!(analysis.maximum_reach, 1_060_000);
    }

    /// T2.4: Reasoning follows the verdict bucket.
    #[test]
    fn reasoning_follows_verdict() {
        let high = analyze(build(SystemKind::AcademicPublishing).as_ref());
        assert!(high.reasoning.contains("HIGH MEASURABILITY"));
        assert!(high.reasoning.contains("3/3"));

        let low = analyze(build(SystemKind::Education).as_ref());
        assert!(low.reasoning.contains("LOW MEASURABILITY"));
        assert!(low.reasoning.contains("0/5"));
    }

    /// T2.5: Analysis is deterministic.
    #[test]
    fn analysis_is_deterministic() {
        for kind in SystemKind::ALL {
            let system = build(kind);
            assert_eq!(analyze(system.as_ref()), analyze(system.as_ref()));
        }
    }
}

// =============================================================================
// TIER T3: CROSS-SYSTEM REPORTS
// =============================================================================

mod t3_reports {
    use super::*;
    use powerscope_core::{Comparison, Overview, ThematicAnalysis, compare, demonstrate_concept};

    /// T3.1: The overview picks the catalog extremes.
    #[test]
    fn overview_extremes() {
        let overview = Overview::from_systems(&all_systems().expect("catalog"));
        assert_eq!(overview.analyses().len(), 6);
        assert_eq!(
            overview.most_measurable().map(|a| a.system_name.as_str()),
            Some("Academic Publishing Power System")
        );
        assert_eq!(
            overview.least_measurable().map(|a| a.system_name.as_str()),
            Some("Educational Examination System")
        );
    }

    /// T3.2: The comparison names the more measurable system.
    #[test]
    fn comparison_interpretation() {
        let academic = build(SystemKind::AcademicPublishing);
        let education = build(SystemKind::Education);

        let text = compare(education.as_ref(), academic.as_ref());
        assert!(text.contains(
            "Academic Publishing Power System is MORE MEASURABLE than Educational Examination System."
        ));

        let same = Comparison::new(academic.as_ref(), academic.as_ref());
        assert!(same.more_measurable().is_none());
        assert_eq!(
            same.interpretation(),
            "Both systems show similar measurability."
        );
    }

    /// T3.3: Every catalog system shows up under every theme.
    #[test]
    fn catalog_themes() {
        let themes = ThematicAnalysis::from_systems(&all_systems().expect("catalog"));
        assert_eq!(themes.surveillance.len(), 6);
        assert_eq!(themes.power_knowledge.len(), 6);
        assert_eq!(themes.normalization.len(), 6);
        assert_eq!(themes.circulation.len(), 6);
        assert_eq!(themes.resistance.len(), 6);

        let social = &themes.resistance[0];
        let privileges: Vec<&str> = social.relations.iter().map(|n| n.privilege.as_str()).collect();
        assert_eq!(privileges, vec!["Data Collection", "Algorithmic Curation"]);
        assert_eq!(
            social.relations[0].points,
            vec!["Ad blockers", "Privacy settings (limited)", "Not using platform (social cost)"]
        );
    }

    /// T3.4: The demonstration walks the system in declaration order.
    #[test]
    fn demonstration_order() {
        let system = build(SystemKind::Workplace);
        let text = demonstrate_concept(system.as_ref());

        let positions: Vec<usize> = [
            "Productivity Monitoring",
            "Communication Surveillance",
            "Performance Metrics",
            "DISCIPLINARY MECHANISMS",
            "Productivity Dashboard",
            "POWER RELATIONS",
            "Employer/Management → Employee",
            "Employee ↔ Employee (Self)",
        ]
        .iter()
        .map(|needle| text.find(needle).expect("present"))
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

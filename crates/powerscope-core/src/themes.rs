//! # Themes Module
//!
//! Reads a set of systems through five cross-cutting lenses:
//!
//! 1. Surveillance and the panopticon
//! 2. Power/knowledge
//! 3. Normalization
//! 4. Circulation (circular and lateral relations)
//! 5. Resistance
//!
//! A system only appears under a theme when it has something to show there.

use crate::confidence::percent;
use crate::report::rule;
use crate::system::{PowerSystem, SURVEILLANCE_KIND};
use crate::types::{PowerDirection, PowerRelation};
use serde::Serialize;
use std::fmt;

/// Reversible relations shown per system under the resistance theme.
pub const RESISTANCE_RELATIONS_SHOWN: usize = 2;

/// Resistance points shown per relation.
pub const RESISTANCE_POINTS_SHOWN: usize = 3;

const NORMALIZING_KINDS: [&str; 2] = ["normalization", "examination"];

/// A mechanism named under a theme, with the detail that theme cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MechanismNote {
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveillanceTheme {
    pub system_name: String,
    pub intensity: f64,
    /// Surveillance mechanisms with their visibility pattern.
    pub mechanisms: Vec<MechanismNote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeTheme {
    pub system_name: String,
    /// Knowledge-producing mechanisms with their type.
    pub mechanisms: Vec<MechanismNote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizationTheme {
    pub system_name: String,
    pub norms: Vec<String>,
}

/// Two positions joined by a relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationLink {
    pub from: String,
    pub to: String,
}

impl From<&PowerRelation> for RelationLink {
    fn from(relation: &PowerRelation) -> Self {
        Self {
            from: relation.from_position.clone(),
            to: relation.to_position.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CirculationTheme {
    pub system_name: String,
    pub circular: Vec<RelationLink>,
    pub lateral: Vec<RelationLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResistanceNote {
    pub privilege: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResistanceTheme {
    pub system_name: String,
    pub relations: Vec<ResistanceNote>,
}

/// All five themes across a set of systems, each in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThematicAnalysis {
    pub surveillance: Vec<SurveillanceTheme>,
    pub power_knowledge: Vec<KnowledgeTheme>,
    pub normalization: Vec<NormalizationTheme>,
    pub circulation: Vec<CirculationTheme>,
    pub resistance: Vec<ResistanceTheme>,
}

impl ThematicAnalysis {
    #[must_use]
    pub fn from_systems(systems: &[Box<dyn PowerSystem>]) -> Self {
        let systems: Vec<&dyn PowerSystem> =
            systems.iter().map(|system| system.as_ref()).collect();

        Self {
            surveillance: systems.iter().filter_map(|s| surveillance(*s)).collect(),
            power_knowledge: systems.iter().filter_map(|s| power_knowledge(*s)).collect(),
            normalization: systems.iter().filter_map(|s| normalization(*s)).collect(),
            circulation: systems.iter().filter_map(|s| circulation(*s)).collect(),
            resistance: systems.iter().filter_map(|s| resistance(*s)).collect(),
        }
    }
}

fn surveillance(system: &dyn PowerSystem) -> Option<SurveillanceTheme> {
    let intensity = system.surveillance_intensity();
    if intensity <= 0.0 {
        return None;
    }

    let mechanisms = system
        .disciplinary_mechanisms()
        .iter()
        .filter(|mechanism| mechanism.is_kind(SURVEILLANCE_KIND))
        .map(|mechanism| MechanismNote {
            name: mechanism.name.clone(),
            detail: mechanism.visibility_pattern.clone(),
        })
        .collect();

    Some(SurveillanceTheme {
        system_name: system.name().to_string(),
        intensity,
        mechanisms,
    })
}

fn power_knowledge(system: &dyn PowerSystem) -> Option<KnowledgeTheme> {
    if !system.produces_knowledge() {
        return None;
    }

    let mechanisms = system
        .disciplinary_mechanisms()
        .iter()
        .filter(|mechanism| mechanism.produces_knowledge)
        .map(|mechanism| MechanismNote {
            name: mechanism.name.clone(),
            detail: mechanism.mechanism_type.clone(),
        })
        .collect();

    Some(KnowledgeTheme {
        system_name: system.name().to_string(),
        mechanisms,
    })
}

fn normalization(system: &dyn PowerSystem) -> Option<NormalizationTheme> {
    let normalizing: Vec<_> = system
        .disciplinary_mechanisms()
        .iter()
        .filter(|mechanism| NORMALIZING_KINDS.iter().any(|kind| mechanism.is_kind(kind)))
        .collect();

    if normalizing.is_empty() {
        return None;
    }

    Some(NormalizationTheme {
        system_name: system.name().to_string(),
        norms: normalizing
            .iter()
            .filter_map(|mechanism| mechanism.normalizes_to.clone())
            .collect(),
    })
}

fn circulation(system: &dyn PowerSystem) -> Option<CirculationTheme> {
    let links = |direction: PowerDirection| -> Vec<RelationLink> {
        system
            .power_relations()
            .iter()
            .filter(|relation| relation.direction == direction)
            .map(RelationLink::from)
            .collect()
    };

    let circular = links(PowerDirection::Circular);
    let lateral = links(PowerDirection::Lateral);
    if circular.is_empty() && lateral.is_empty() {
        return None;
    }

    Some(CirculationTheme {
        system_name: system.name().to_string(),
        circular,
        lateral,
    })
}

fn resistance(system: &dyn PowerSystem) -> Option<ResistanceTheme> {
    let relations: Vec<ResistanceNote> = system
        .power_relations()
        .iter()
        .filter(|relation| relation.is_reversible())
        .take(RESISTANCE_RELATIONS_SHOWN)
        .map(|relation| ResistanceNote {
            privilege: relation.privilege.name.clone(),
            points: relation
                .resistance_points
                .iter()
                .take(RESISTANCE_POINTS_SHOWN)
                .cloned()
                .collect(),
        })
        .collect();

    if relations.is_empty() {
        return None;
    }

    Some(ResistanceTheme {
        system_name: system.name().to_string(),
        relations,
    })
}

// =============================================================================
// RENDERING
// =============================================================================

fn heading(f: &mut fmt::Formatter<'_>, title: &str, gloss: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", rule('-'))?;
    writeln!(f, "{gloss}")?;
    writeln!(f)
}

impl fmt::Display for ThematicAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "THEMATIC ANALYSIS: KEY FOUCAULDIAN CONCEPTS")?;

        heading(
            f,
            "1. SURVEILLANCE AND THE PANOPTICON",
            "Foucault: Power through visibility. The awareness of being watched\ncreates self-discipline.",
        )?;
        for theme in &self.surveillance {
            writeln!(
                f,
                "  {}: {} surveillance intensity",
                theme.system_name,
                percent(theme.intensity)
            )?;
            for mechanism in &theme.mechanisms {
                writeln!(f, "    → {} ({})", mechanism.name, mechanism.detail)?;
            }
        }

        heading(
            f,
            "2. POWER/KNOWLEDGE RELATIONSHIP",
            "Foucault: Power and knowledge directly imply one another.",
        )?;
        for theme in &self.power_knowledge {
            writeln!(f, "  {}: Produces knowledge", theme.system_name)?;
            for mechanism in &theme.mechanisms {
                writeln!(f, "    → {}: {}", mechanism.name, mechanism.detail)?;
            }
        }

        heading(
            f,
            "3. NORMALIZATION AND DISCIPLINARY MECHANISMS",
            "Foucault: Power normalizes by establishing standards and measuring\ndeviations from those standards.",
        )?;
        for theme in &self.normalization {
            writeln!(f, "  {}:", theme.system_name)?;
            for norm in &theme.norms {
                writeln!(f, "    → Normalizes to: {norm}")?;
            }
        }

        heading(
            f,
            "4. POWER AS RELATIONAL AND CIRCULATING",
            "Foucault: Power is not possessed but exercised in relations.",
        )?;
        for theme in &self.circulation {
            writeln!(f, "  {}:", theme.system_name)?;
            for link in &theme.circular {
                writeln!(f, "    ↔ Circular: {} ⟷ {}", link.from, link.to)?;
            }
            for link in &theme.lateral {
                writeln!(f, "    ↔ Lateral: {} ↔ {}", link.from, link.to)?;
            }
        }

        heading(
            f,
            "5. RESISTANCE POINTS",
            "Foucault: Where there is power, there is resistance.",
        )?;
        for theme in &self.resistance {
            writeln!(f, "  {}:", theme.system_name)?;
            for note in &theme.relations {
                writeln!(f, "    Resistance to '{}':", note.privilege)?;
                for point in &note.points {
                    writeln!(f, "      • {point}")?;
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DisciplinaryMechanism, Privilege, PrivilegeScope, ReachEstimation};

    #[derive(Default)]
    struct Sketch {
        name: &'static str,
        relations: Vec<PowerRelation>,
        mechanisms: Vec<DisciplinaryMechanism>,
    }

    impl PowerSystem for Sketch {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "sketch"
        }

        fn privileges(&self) -> &[Privilege] {
            &[]
        }

        fn power_relations(&self) -> &[PowerRelation] {
            &self.relations
        }

        fn disciplinary_mechanisms(&self) -> &[DisciplinaryMechanism] {
            &self.mechanisms
        }

        fn estimate_reach(&self, _privilege: &Privilege) -> ReachEstimation {
            ReachEstimation::unknown()
        }
    }

    fn relation(name: &str, direction: PowerDirection, points: &[&str]) -> PowerRelation {
        let privilege = Privilege::new(name, PrivilegeScope::Global, name);
        PowerRelation::new("A", "B", privilege, direction).with_resistance(points.iter().copied())
    }

    #[test]
    fn empty_system_appears_nowhere() {
        let systems: Vec<Box<dyn PowerSystem>> = vec![Box::new(Sketch {
            name: "Empty",
            ..Sketch::default()
        })];
        let themes = ThematicAnalysis::from_systems(&systems);

        assert!(themes.surveillance.is_empty());
        assert!(themes.power_knowledge.is_empty());
        assert!(themes.normalization.is_empty());
        assert!(themes.circulation.is_empty());
        assert!(themes.resistance.is_empty());
    }

    #[test]
    fn mechanisms_sorted_into_themes() {
        let systems: Vec<Box<dyn PowerSystem>> = vec![Box::new(Sketch {
            name: "School",
            mechanisms: vec![
                DisciplinaryMechanism::new("Record", "surveillance", "panopticon", true),
                DisciplinaryMechanism::new("Exam", "examination", "examination", true)
                    .normalizing_to("Correct answers"),
                DisciplinaryMechanism::new("Bell", "normalization", "distributed", false),
                DisciplinaryMechanism::new("Grade", "classification", "examination", false),
            ],
            ..Sketch::default()
        })];
        let themes = ThematicAnalysis::from_systems(&systems);

        let watched = &themes.surveillance[0];
        assert!((watched.intensity - 0.25).abs() < 1e-12);
        assert_eq!(
            watched.mechanisms,
            vec![MechanismNote {
                name: "Record".to_string(),
                detail: "panopticon".to_string()
            }]
        );

        let knowing: Vec<&str> = themes.power_knowledge[0]
            .mechanisms
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(knowing, vec!["Record", "Exam"]);

        // Bell normalizes without a declared norm
        assert_eq!(themes.normalization[0].norms, vec!["Correct answers".to_string()]);
    }

    #[test]
    fn circulation_splits_directions() {
        let systems: Vec<Box<dyn PowerSystem>> = vec![Box::new(Sketch {
            name: "Feed",
            relations: vec![
                relation("down", PowerDirection::TopDown, &[]),
                relation("loop", PowerDirection::Circular, &[]),
                relation("peer", PowerDirection::Lateral, &[]),
            ],
            ..Sketch::default()
        })];
        let themes = ThematicAnalysis::from_systems(&systems);

        let circulation = &themes.circulation[0];
        assert_eq!(circulation.circular.len(), 1);
        assert_eq!(circulation.lateral.len(), 1);
        assert_eq!(circulation.lateral[0].from, "A");
    }

    #[test]
    fn resistance_is_truncated() {
        let points = ["a", "b", "c", "d"];
        let systems: Vec<Box<dyn PowerSystem>> = vec![Box::new(Sketch {
            name: "Prison",
            relations: vec![
                relation("silent", PowerDirection::TopDown, &[]),
                relation("first", PowerDirection::TopDown, &points),
                relation("second", PowerDirection::TopDown, &points),
                relation("third", PowerDirection::TopDown, &points),
            ],
            ..Sketch::default()
        })];
        let themes = ThematicAnalysis::from_systems(&systems);

        let notes = &themes.resistance[0].relations;
        assert_eq!(notes.len(), RESISTANCE_RELATIONS_SHOWN);
        assert_eq!(notes[0].privilege, "first");
        assert_eq!(notes[1].privilege, "second");
        assert_eq!(notes[0].points, vec!["a", "b", "c"]);
    }

    #[test]
    fn rendering_lists_all_headings() {
        let text = ThematicAnalysis::from_systems(&[]).to_string();
        for title in [
            "1. SURVEILLANCE AND THE PANOPTICON",
            "2. POWER/KNOWLEDGE RELATIONSHIP",
            "3. NORMALIZATION AND DISCIPLINARY MECHANISMS",
            "4. POWER AS RELATIONAL AND CIRCULATING",
            "5. RESISTANCE POINTS",
        ] {
            assert!(text.contains(title), "missing {title}");
        }
    }
}

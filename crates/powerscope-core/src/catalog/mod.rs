//! # Catalog Module
//!
//! The six built-in example systems, each a distinct type implementing
//! [`PowerSystem`] over literal data:
//!
//! | Slug | Type |
//! |------|------|
//! | `social-media` | [`SocialMediaSurveillance`] |
//! | `workplace` | [`WorkplaceSurveillance`] |
//! | `education` | [`EducationalExamination`] |
//! | `academic-publishing` | [`AcademicPublishing`] |
//! | `public-health` | [`PublicHealthBiopower`] |
//! | `fitness-tracking` | [`FitnessTrackingBiopower`] |
//!
//! Constructors are fallible because every reach table entry goes through
//! [`ReachEstimation::new`].

mod biopower;
mod knowledge;
mod surveillance;

pub use biopower::{FitnessTrackingBiopower, PublicHealthBiopower};
pub use knowledge::{AcademicPublishing, EducationalExamination};
pub use surveillance::{SocialMediaSurveillance, WorkplaceSurveillance};

use crate::system::PowerSystem;
use crate::types::{DisciplinaryMechanism, PowerError, PowerRelation, Privilege, ReachEstimation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SYSTEM KIND
// =============================================================================

/// Selector for a built-in system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemKind {
    SocialMedia,
    Workplace,
    Education,
    AcademicPublishing,
    PublicHealth,
    FitnessTracking,
}

impl SystemKind {
    /// Every built-in system, in canonical order.
    pub const ALL: [SystemKind; 6] = [
        SystemKind::SocialMedia,
        SystemKind::Workplace,
        SystemKind::Education,
        SystemKind::AcademicPublishing,
        SystemKind::PublicHealth,
        SystemKind::FitnessTracking,
    ];

    /// Command-line name of the system.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            SystemKind::SocialMedia => "social-media",
            SystemKind::Workplace => "workplace",
            SystemKind::Education => "education",
            SystemKind::AcademicPublishing => "academic-publishing",
            SystemKind::PublicHealth => "public-health",
            SystemKind::FitnessTracking => "fitness-tracking",
        }
    }

    /// Build the system.
    pub fn build(&self) -> Result<Box<dyn PowerSystem>, PowerError> {
        Ok(match self {
            SystemKind::SocialMedia => Box::new(SocialMediaSurveillance::new()?),
            SystemKind::Workplace => Box::new(WorkplaceSurveillance::new()?),
            SystemKind::Education => Box::new(EducationalExamination::new()?),
            SystemKind::AcademicPublishing => Box::new(AcademicPublishing::new()?),
            SystemKind::PublicHealth => Box::new(PublicHealthBiopower::new()?),
            SystemKind::FitnessTracking => Box::new(FitnessTrackingBiopower::new()?),
        })
    }
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SystemKind {
    type Err = PowerError;

    /// Parse a slug, ignoring case and accepting `_` for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        SystemKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| PowerError::UnknownSystem(s.to_string()))
    }
}

/// Build every built-in system, in canonical order.
pub fn all_systems() -> Result<Vec<Box<dyn PowerSystem>>, PowerError> {
    SystemKind::ALL.iter().map(SystemKind::build).collect()
}

// =============================================================================
// SHARED SYSTEM DATA
// =============================================================================

/// Literal content shared by every catalog type.
#[derive(Debug, Clone)]
struct SystemData {
    name: &'static str,
    description: &'static str,
    privileges: Vec<Privilege>,
    relations: Vec<PowerRelation>,
    mechanisms: Vec<DisciplinaryMechanism>,
    reach: BTreeMap<&'static str, ReachEstimation>,
}

impl SystemData {
    /// Reach table lookup, falling back to [`ReachEstimation::unknown`].
    fn estimate_reach(&self, privilege: &Privilege) -> ReachEstimation {
        self.reach
            .get(privilege.name.as_str())
            .cloned()
            .unwrap_or_else(ReachEstimation::unknown)
    }
}

/// Validated, measurable reach table entry.
fn measured(
    minimum_impact: u64,
    maximum_impact: u64,
    confidence: f64,
    reasoning: &str,
    measurement_type: &str,
) -> Result<ReachEstimation, PowerError> {
    ReachEstimation::new(
        true,
        minimum_impact,
        maximum_impact,
        confidence,
        reasoning,
        measurement_type,
    )
}

/// Implement [`PowerSystem`] for a type holding its content in `self.data`.
macro_rules! catalog_system {
    ($ty:ident) => {
        impl $crate::system::PowerSystem for $ty {
            fn name(&self) -> &str {
                self.data.name
            }

            fn description(&self) -> &str {
                self.data.description
            }

            fn privileges(&self) -> &[$crate::types::Privilege] {
                &self.data.privileges
            }

            fn power_relations(&self) -> &[$crate::types::PowerRelation] {
                &self.data.relations
            }

            fn disciplinary_mechanisms(&self) -> &[$crate::types::DisciplinaryMechanism] {
                &self.data.mechanisms
            }

            fn estimate_reach(
                &self,
                privilege: &$crate::types::Privilege,
            ) -> $crate::types::ReachEstimation {
                self.data.estimate_reach(privilege)
            }
        }
    };
}

use catalog_system;

// =============================================================================
// TESTS
// =============================================================================

//! # Core Type Definitions
//!
//! This module contains the value types every power system is described with:
//! - Capabilities and their reach (`Privilege`, `PrivilegeScope`)
//! - Relations between positions (`PowerRelation`, `PowerDirection`)
//! - Techniques of observation (`DisciplinaryMechanism`)
//! - Bounded impact estimates (`ReachEstimation`)
//! - Error types (`PowerError`, `Invariant`)
//!
//! ## Immutability
//!
//! All records are built once (usually from literal data) and only read
//! afterwards. `ReachEstimation` is the only type with invariants, so it is
//! the only one whose fields are private and whose constructor is fallible.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// MEASURABILITY KEYWORDS
// =============================================================================

/// Keywords whose presence in a limitation marks a privilege as measurable.
///
/// Matching is a case-insensitive substring scan, so "unlimited" matches
/// "limit" and "rates" matches "rate".
pub const MEASURABILITY_KEYWORDS: [&str; 6] = ["limit", "max", "count", "rate", "number", "size"];

// =============================================================================
// PRIVILEGE
// =============================================================================

/// Scope of a privilege's reach within its system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivilegeScope {
    /// Power throughout the system.
    Global,
    /// Power in specific domains.
    Limited,
    /// Highly constrained power.
    Restricted,
    /// No power in this dimension.
    None,
}

impl PrivilegeScope {
    /// Get the lowercase label used in reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PrivilegeScope::Global => "global",
            PrivilegeScope::Limited => "limited",
            PrivilegeScope::Restricted => "restricted",
            PrivilegeScope::None => "none",
        }
    }
}

impl fmt::Display for PrivilegeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named capability within a power system.
///
/// A privilege is bounded by concrete limitations and credited with the
/// effects it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privilege {
    /// Name, unique within a system.
    pub name: String,
    /// How far the privilege reaches.
    pub scope: PrivilegeScope,
    /// What the privilege allows.
    pub description: String,
    /// Concrete bounds on the privilege, in declaration order.
    pub limitations: Vec<String>,
    /// Productive effects, in declaration order.
    pub produces: Vec<String>,
}

impl Privilege {
    /// Create a privilege with no limitations and no produced effects.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        scope: PrivilegeScope,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            scope,
            description: description.into(),
            limitations: Vec::new(),
            produces: Vec::new(),
        }
    }

    /// Attach limitations, preserving their order.
    #[must_use]
    pub fn with_limitations<I, S>(mut self, limitations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.limitations = limitations.into_iter().map(Into::into).collect();
        self
    }

    /// Attach produced effects, preserving their order.
    #[must_use]
    pub fn with_produces<I, S>(mut self, produces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.produces = produces.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether any limitation names a countable bound.
    ///
    /// True iff at least one limitation contains one of
    /// [`MEASURABILITY_KEYWORDS`], ignoring case. Each limitation is scanned
    /// on its own; a keyword split across two entries does not count.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.limitations.iter().any(|limitation| {
            let lowered = limitation.to_lowercase();
            MEASURABILITY_KEYWORDS
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
    }
}

// =============================================================================
// POWER RELATION
// =============================================================================

/// Direction in which power flows along a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerDirection {
    /// Traditional hierarchy.
    TopDown,
    /// Resistance and counter-power.
    BottomUp,
    /// Peer-to-peer.
    Lateral,
    /// Self-reinforcing loop.
    Circular,
    /// Micro-level power.
    Capillary,
}

impl PowerDirection {
    /// Get the snake_case label used in reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerDirection::TopDown => "top_down",
            PowerDirection::BottomUp => "bottom_up",
            PowerDirection::Lateral => "lateral",
            PowerDirection::Circular => "circular",
            PowerDirection::Capillary => "capillary",
        }
    }

    /// Arrow drawn between the two positions of a relation.
    #[must_use]
    pub fn arrow(&self) -> &'static str {
        match self {
            PowerDirection::Circular => "↔",
            _ => "→",
        }
    }
}

impl fmt::Display for PowerDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation between two named positions, mediated by a privilege.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerRelation {
    /// Position exercising the privilege.
    pub from_position: String,
    /// Position the privilege is exercised on.
    pub to_position: String,
    /// The mediating privilege.
    pub privilege: Privilege,
    /// Flow of power along the relation.
    pub direction: PowerDirection,
    /// Where the relation can be resisted, in declaration order.
    pub resistance_points: Vec<String>,
}

impl PowerRelation {
    /// Create a relation with no resistance points.
    #[must_use]
    pub fn new(
        from_position: impl Into<String>,
        to_position: impl Into<String>,
        privilege: Privilege,
        direction: PowerDirection,
    ) -> Self {
        Self {
            from_position: from_position.into(),
            to_position: to_position.into(),
            privilege,
            direction,
            resistance_points: Vec::new(),
        }
    }

    /// Attach resistance points, preserving their order.
    #[must_use]
    pub fn with_resistance<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resistance_points = points.into_iter().map(Into::into).collect();
        self
    }

    /// A relation is reversible when at least one resistance point exists.
    #[must_use]
    pub fn is_reversible(&self) -> bool {
        !self.resistance_points.is_empty()
    }
}

// =============================================================================
// DISCIPLINARY MECHANISM
// =============================================================================

/// A technique through which a system observes and normalizes behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplinaryMechanism {
    /// Mechanism name.
    pub name: String,
    /// Conventionally surveillance, normalization, examination or classification.
    pub mechanism_type: String,
    /// What or who is observed.
    pub observes: Vec<String>,
    /// The norm being enforced, if any.
    pub normalizes_to: Option<String>,
    /// Whether observation feeds back into knowledge.
    pub produces_knowledge: bool,
    /// Conventionally panopticon, distributed, self-surveillance or examination.
    pub visibility_pattern: String,
}

impl DisciplinaryMechanism {
    /// Create a mechanism that observes nothing and enforces no norm.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        mechanism_type: impl Into<String>,
        visibility_pattern: impl Into<String>,
        produces_knowledge: bool,
    ) -> Self {
        Self {
            name: name.into(),
            mechanism_type: mechanism_type.into(),
            observes: Vec::new(),
            normalizes_to: None,
            produces_knowledge,
            visibility_pattern: visibility_pattern.into(),
        }
    }

    /// Attach the observed targets, preserving their order.
    #[must_use]
    pub fn observing<I, S>(mut self, observes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.observes = observes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the enforced norm.
    #[must_use]
    pub fn normalizing_to(mut self, norm: impl Into<String>) -> Self {
        self.normalizes_to = Some(norm.into());
        self
    }

    /// Check whether `mechanism_type` mentions `kind`, ignoring case.
    #[must_use]
    pub fn is_kind(&self, kind: &str) -> bool {
        self.mechanism_type
            .to_lowercase()
            .contains(&kind.to_lowercase())
    }
}

// =============================================================================
// REACH ESTIMATION
// =============================================================================

/// A bounded estimate of a privilege's measurable impact.
///
/// Invariants, checked by [`ReachEstimation::new`]:
/// - `0.0 <= confidence <= 1.0`
/// - `minimum_impact <= maximum_impact`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachEstimation {
    is_measurable: bool,
    minimum_impact: u64,
    maximum_impact: u64,
    confidence: f64,
    reasoning: String,
    measurement_type: String,
}

impl ReachEstimation {
    /// Create a validated estimation.
    ///
    /// Returns `PowerError::InvariantViolation` if `confidence` lies outside
    /// `[0.0, 1.0]` (NaN included) or `minimum_impact > maximum_impact`.
    /// Values are never clamped.
    pub fn new(
        is_measurable: bool,
        minimum_impact: u64,
        maximum_impact: u64,
        confidence: f64,
        reasoning: impl Into<String>,
        measurement_type: impl Into<String>,
    ) -> Result<Self, PowerError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(PowerError::InvariantViolation(Invariant::ConfidenceRange(
                confidence,
            )));
        }

        if minimum_impact > maximum_impact {
            return Err(PowerError::InvariantViolation(Invariant::ImpactOrder {
                minimum: minimum_impact,
                maximum: maximum_impact,
            }));
        }

        Ok(Self {
            is_measurable,
            minimum_impact,
            maximum_impact,
            confidence,
            reasoning: reasoning.into(),
            measurement_type: measurement_type.into(),
        })
    }

    /// Estimation for a privilege the system knows nothing about.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            is_measurable: false,
            minimum_impact: 0,
            maximum_impact: 0,
            confidence: 0.0,
            reasoning: "Unknown privilege".to_string(),
            measurement_type: "unknown".to_string(),
        }
    }

    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.is_measurable
    }

    #[must_use]
    pub fn minimum_impact(&self) -> u64 {
        self.minimum_impact
    }

    #[must_use]
    pub fn maximum_impact(&self) -> u64 {
        self.maximum_impact
    }

    /// Confidence in `[0.0, 1.0]`.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    #[must_use]
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    /// What is being counted, e.g. "data points × users × time".
    #[must_use]
    pub fn measurement_type(&self) -> &str {
        &self.measurement_type
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// A constraint a `ReachEstimation` failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Invariant {
    /// Confidence outside `[0.0, 1.0]`.
    ConfidenceRange(f64),
    /// Minimum impact above maximum impact.
    ImpactOrder { minimum: u64, maximum: u64 },
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invariant::ConfidenceRange(value) => {
                write!(f, "confidence must be between 0.0 and 1.0, got {}", value)
            }
            Invariant::ImpactOrder { minimum, maximum } => write!(
                f,
                "minimum impact {} cannot exceed maximum impact {}",
                minimum, maximum
            ),
        }
    }
}

/// Errors that can occur in Powerscope.
///
/// - Construction of a `ReachEstimation` is the only fallible core operation
/// - Analysis itself is total over well-formed input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PowerError {
    /// A reach estimation violated one of its invariants.
    #[error("Invariant violation: {0}")]
    InvariantViolation(Invariant),

    /// No built-in system goes by the requested name.
    #[error("Unknown power system: {0}")]
    UnknownSystem(String),

    /// Rendering structured output failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// =============================================================================
// TESTS
// =============================================================================

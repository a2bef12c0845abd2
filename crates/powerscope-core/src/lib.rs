//! # powerscope-core
//!
//! Measurability analysis of power systems - THE LOGIC.
//!
//! A power system is described by its privileges, the relations through
//! which those privileges are exercised, and the disciplinary mechanisms that
//! observe and normalize its subjects. This crate scores how concretely that
//! power can be measured and renders the result as reports.
//!
//! ## Layout
//!
//! - `types`: the domain records and `PowerError`
//! - `system`: the `PowerSystem` trait and its derived metrics
//! - `confidence` / `analyzer`: scoring and the per-system analysis
//! - `report` / `overview` / `themes`: text and JSON-ready views
//! - `catalog`: six built-in example systems
//!
//! ## Constraints
//!
//! - Pure and synchronous: no I/O, no logging, no global state
//! - Analysis is deterministic: the same system always yields the same result
//! - Every entity is immutable after construction

// =============================================================================
// MODULES
// =============================================================================

pub mod analyzer;
pub mod catalog;
pub mod confidence;
pub mod overview;
pub mod report;
pub mod system;
pub mod themes;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    DisciplinaryMechanism, Invariant, MEASURABILITY_KEYWORDS, PowerDirection, PowerError,
    PowerRelation, Privilege, PrivilegeScope, ReachEstimation,
};

// =============================================================================
// RE-EXPORTS: Analysis
// =============================================================================

pub use analyzer::{PowerCharacteristics, SystemAnalysis, analyze};
pub use confidence::{ESTIMABLE_THRESHOLD, MEASURABLE_FLAG_THRESHOLD, MEASURABLE_THRESHOLD, Verdict};
pub use system::PowerSystem;

// =============================================================================
// RE-EXPORTS: Reports
// =============================================================================

pub use overview::Overview;
pub use report::{Comparison, ConceptDemonstration, compare, demonstrate_concept};
pub use themes::ThematicAnalysis;

// =============================================================================
// RE-EXPORTS: Catalog
// =============================================================================

pub use catalog::{SystemKind, all_systems};

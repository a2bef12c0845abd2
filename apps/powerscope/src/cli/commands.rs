//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Text goes to stdout; with `--json` every command prints a single JSON
//! document instead.

use powerscope_core::{
    Comparison, Overview, PowerError, PowerSystem, SystemKind, ThematicAnalysis, all_systems,
    analyze, demonstrate_concept, report::RULE_WIDTH,
};
use serde::Serialize;

/// Systems detailed at the end of the tour.
const TOUR_DETAILS: [SystemKind; 2] = [SystemKind::Education, SystemKind::PublicHealth];

// =============================================================================
// HELPERS
// =============================================================================

/// Resolve a slug and build the system.
fn load_system(slug: &str) -> Result<Box<dyn PowerSystem>, PowerError> {
    let kind: SystemKind = slug.parse()?;
    tracing::debug!("Building system {}", kind);
    kind.build()
}

/// Pretty-print a value as JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), PowerError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| PowerError::SerializationError(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

fn print_separator(ch: char) {
    println!();
    println!("{}", ch.to_string().repeat(RULE_WIDTH));
    println!();
}

fn print_title(title: &str) {
    print_separator('=');
    println!("{}", title);
    print_separator('=');
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// List the built-in systems.
pub fn cmd_list(json_mode: bool) -> Result<(), PowerError> {
    tracing::info!("Listing {} systems", SystemKind::ALL.len());

    let entries = SystemKind::ALL
        .iter()
        .map(|kind| Ok((*kind, kind.build()?)))
        .collect::<Result<Vec<_>, PowerError>>()?;

    if json_mode {
        let output: Vec<serde_json::Value> = entries
            .iter()
            .map(|(kind, system)| {
                serde_json::json!({
                    "slug": kind.slug(),
                    "name": system.name(),
                    "description": system.description(),
                })
            })
            .collect();
        return print_json(&output);
    }

    println!("Power Systems");
    println!("=============");
    for (kind, system) in &entries {
        println!();
        println!("{:<22} {}", kind.slug(), system.name());
        println!("  {}", system.description());
    }
    Ok(())
}

// =============================================================================
// ANALYZE COMMAND
// =============================================================================

/// Print the measurability summary of one system.
pub fn cmd_analyze(slug: &str, json_mode: bool) -> Result<(), PowerError> {
    tracing::info!("Analyzing {}", slug);

    let system = load_system(slug)?;
    let analysis = analyze(system.as_ref());
    tracing::debug!(
        confidence = analysis.confidence,
        verdict = %analysis.verdict,
        measurable = analysis.measurable_privileges,
        total = analysis.total_privileges,
        "Analysis complete"
    );

    if json_mode {
        return print_json(&analysis);
    }

    println!("{}", analysis);
    Ok(())
}

// =============================================================================
// DEMONSTRATE COMMAND
// =============================================================================

/// Walk through one system.
pub fn cmd_demonstrate(slug: &str, json_mode: bool) -> Result<(), PowerError> {
    tracing::info!("Demonstrating {}", slug);

    let system = load_system(slug)?;

    if json_mode {
        let privileges: Vec<serde_json::Value> = system
            .privileges()
            .iter()
            .map(|privilege| {
                serde_json::json!({
                    "privilege": privilege,
                    "reach": system.estimate_reach(privilege),
                })
            })
            .collect();
        let output = serde_json::json!({
            "system": system.name(),
            "description": system.description(),
            "privileges": privileges,
            "disciplinary_mechanisms": system.disciplinary_mechanisms(),
            "power_relations": system.power_relations(),
        });
        return print_json(&output);
    }

    print!("{}", demonstrate_concept(system.as_ref()));
    Ok(())
}

// =============================================================================
// COMPARE COMMAND
// =============================================================================

/// Compare two systems.
pub fn cmd_compare(first: &str, second: &str, json_mode: bool) -> Result<(), PowerError> {
    tracing::info!("Comparing {} with {}", first, second);

    let a = load_system(first)?;
    let b = load_system(second)?;
    let comparison = Comparison::new(a.as_ref(), b.as_ref());
    tracing::debug!(
        first = comparison.first.confidence,
        second = comparison.second.confidence,
        "Comparison complete"
    );

    if json_mode {
        let output = serde_json::json!({
            "first": comparison.first,
            "second": comparison.second,
            "more_measurable": comparison
                .more_measurable()
                .map(|winner| winner.system_name.as_str()),
            "interpretation": comparison.interpretation(),
        });
        return print_json(&output);
    }

    print!("{}", comparison);
    Ok(())
}

// =============================================================================
// OVERVIEW COMMAND
// =============================================================================

/// Comparative overview of every built-in system.
pub fn cmd_overview(json_mode: bool) -> Result<(), PowerError> {
    tracing::info!("Building overview");

    let overview = Overview::from_systems(&all_systems()?);

    if json_mode {
        let output = serde_json::json!({
            "analyses": overview.analyses(),
            "most_measurable": overview.most_measurable().map(|a| a.system_name.as_str()),
            "least_measurable": overview.least_measurable().map(|a| a.system_name.as_str()),
        });
        return print_json(&output);
    }

    print!("{}", overview);
    Ok(())
}

// =============================================================================
// THEMES COMMAND
// =============================================================================

/// Read every built-in system through the five themes.
pub fn cmd_themes(json_mode: bool) -> Result<(), PowerError> {
    tracing::info!("Building thematic analysis");

    let themes = ThematicAnalysis::from_systems(&all_systems()?);
    tracing::debug!(
        surveillance = themes.surveillance.len(),
        resistance = themes.resistance.len(),
        "Themes collected"
    );

    if json_mode {
        return print_json(&themes);
    }

    print!("{}", themes);
    Ok(())
}

// =============================================================================
// TOUR COMMAND
// =============================================================================

/// Guided walkthrough of the whole catalog.
///
/// In JSON mode the tour is a single document holding the deep dive system,
/// the overview, the themes and the detailed analyses.
pub fn cmd_tour(json_mode: bool) -> Result<(), PowerError> {
    tracing::info!("Starting tour");

    let systems = all_systems()?;
    let overview = Overview::from_systems(&systems);
    let themes = ThematicAnalysis::from_systems(&systems);
    let deep_dive = SystemKind::SocialMedia.build()?;
    let details = TOUR_DETAILS
        .iter()
        .map(SystemKind::build)
        .collect::<Result<Vec<_>, PowerError>>()?;

    if json_mode {
        let detailed: Vec<_> = details.iter().map(|system| analyze(system.as_ref())).collect();
        let output = serde_json::json!({
            "deep_dive": analyze(deep_dive.as_ref()),
            "overview": overview.analyses(),
            "themes": themes,
            "details": detailed,
        });
        return print_json(&output);
    }

    println!("{}", TOUR_INTRO);

    print_title("DEEP DIVE: SOCIAL MEDIA AS MODERN PANOPTICON");
    println!("{}", PANOPTICON_INTRO);
    print!("{}", demonstrate_concept(deep_dive.as_ref()));
    println!("{}", PANOPTICON_INSIGHT);

    print_title("COMPARATIVE POWER ANALYSIS");
    print!("{}", overview);

    print_separator('=');
    print!("{}", themes);

    for system in &details {
        tracing::debug!("Detailing {}", system.name());
        print_title(&format!("ANALYZING: {}", system.name()));
        print!("{}", demonstrate_concept(system.as_ref()));
        println!();
        println!("{}", analyze(system.as_ref()));
    }

    print_title("CONCLUSION");
    println!("{}", TOUR_CONCLUSION);
    Ok(())
}

const TOUR_INTRO: &str = r#""Power is not an institution, and not a structure; neither is it a certain
strength we are endowed with; it is the name that one attributes to a complex
strategical situation in a particular society."
                                                    Michel Foucault

This tour shows how Foucault's concepts of power can be read through
concrete, measurable systems."#;

const PANOPTICON_INTRO: &str = "\
The Panopticon is a prison design where a central tower can observe every
prisoner while the prisoners cannot see into the tower. Prisoners need not be
watched at all times: the mere possibility of observation produces
self-discipline.

Social media platforms work as digital panopticons:
- Users are potentially always observed (platforms, employers, states, peers)
- Users cannot know when they are being watched
- The result is self-censorship and normalization
- Power operates through visibility, not force
";

const PANOPTICON_INSIGHT: &str = r#"
Sovereign power says "I can kill you". Disciplinary power and biopower say
"I can optimize you".

Social media works less through censorship than by producing a certain kind
of subject: quantified, visible, self-policing users who internalize the
platform's norms. The most effective power is the power exercised on oneself."#;

const TOUR_CONCLUSION: &str = r#"1. Abstract concepts of power can be read through concrete, measurable
   systems.

2. Systems differ in how measurable they are. The overview above ranks the
   catalog from the most to the least measurable.

3. Power is productive as well as repressive. Surveillance produces
   self-policing subjects; examination produces comparable individuals.

4. Power and knowledge are inseparable. Schools produce legitimate
   knowledge; medicine produces normal and pathological bodies.

5. Where there is power, there is resistance, though resistance can itself
   reinforce the system it opposes.

"The judges of normality are present everywhere."
                                                    Michel Foucault"#;

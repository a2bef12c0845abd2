//! Panoptic systems: social media platforms and workplace monitoring.

use super::{SystemData, catalog_system, measured};
use crate::types::{
    DisciplinaryMechanism, PowerDirection, PowerError, PowerRelation, Privilege, PrivilegeScope,
};
use std::collections::BTreeMap;

// =============================================================================
// SOCIAL MEDIA
// =============================================================================

/// Social media as a digital panopticon.
///
/// Platforms, employers, states and peers all watch; the possibility of
/// being watched is enough to produce self-censorship.
#[derive(Debug, Clone)]
pub struct SocialMediaSurveillance {
    data: SystemData,
}

impl SocialMediaSurveillance {
    pub fn new() -> Result<Self, PowerError> {
        let data_collection = Privilege::new(
            "Data Collection",
            PrivilegeScope::Global,
            "Platform can collect all user data",
        )
        .with_limitations([
            "Collects every click, scroll, pause",
            "Tracks 150+ data points per user",
            "Retention: unlimited duration",
            "Shares with 1,200+ third parties on average",
        ])
        .with_produces([
            "User behavioral profiles",
            "Predictive models of behavior",
            "Targeted manipulation capabilities",
            "Normalized digital subjects",
        ]);

        let curation = Privilege::new(
            "Algorithmic Curation",
            PrivilegeScope::Global,
            "Platform controls what users see",
        )
        .with_limitations([
            "Processes 500M+ posts daily",
            "Recommends content based on engagement metrics",
            "Filter bubble affects 100% of users",
            "Appeals process: < 1% success rate",
        ])
        .with_produces([
            "Echo chambers",
            "Normalized viewpoints",
            "Behavioral modification",
            "Attention economy subjects",
        ]);

        let employee_monitoring = Privilege::new(
            "Employee Monitoring",
            PrivilegeScope::Limited,
            "Employers monitor employee social media",
        )
        .with_limitations([
            "70% of employers screen social media",
            "54% have rejected candidates based on posts",
            "Monitor public posts only (legally)",
            "Average 3-5 years of history reviewed",
        ])
        .with_produces([
            "Self-censorship",
            "Curated public personas",
            "Professional normalization",
            "Blurred work/life boundaries",
        ]);

        let state_surveillance = Privilege::new(
            "State Surveillance",
            PrivilegeScope::Limited,
            "Government surveillance of social media",
        )
        .with_limitations([
            "NSA: Collects metadata from all major platforms",
            "Warrants required for content (in theory)",
            "Facial recognition on public photos",
            "Keyword monitoring on millions of accounts",
        ])
        .with_produces([
            "Chilling effect on speech",
            "Political normalization",
            "Internalized surveillance",
            "Docile digital citizens",
        ]);

        let peer_surveillance = Privilege::new(
            "Peer Surveillance",
            PrivilegeScope::Global,
            "Users police each other",
        )
        .with_limitations([
            "Every post visible to network",
            "Average user has 338 friends/followers",
            "Screenshots live forever",
            "Cancel culture reach: potentially millions",
        ])
        .with_produces([
            "Self-policing behavior",
            "Conformity to group norms",
            "Performance of identity",
            "Lateral power relations",
        ]);

        let relations = vec![
            PowerRelation::new(
                "Platform",
                "User",
                data_collection.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Ad blockers",
                "Privacy settings (limited)",
                "Not using platform (social cost)",
                "Regulations (GDPR, etc.)",
            ]),
            // users feed the algorithm that curates them
            PowerRelation::new("Platform", "User", curation.clone(), PowerDirection::Circular)
                .with_resistance([
                    "Chronological feeds (rarely available)",
                    "Diverse following",
                    "Recognizing manipulation",
                ]),
            PowerRelation::new(
                "Employer",
                "Employee/Candidate",
                employee_monitoring.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Private accounts",
                "Separate professional/personal accounts",
                "Self-censorship (but this is power working!)",
            ]),
            PowerRelation::new(
                "State",
                "Citizen",
                state_surveillance.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Encryption",
                "Anonymity tools",
                "Legal challenges",
                "Public awareness",
            ]),
            PowerRelation::new(
                "User",
                "User",
                peer_surveillance.clone(),
                PowerDirection::Lateral,
            )
            .with_resistance([
                "Limited sharing",
                "Private accounts",
                "Awareness of performance",
            ]),
            PowerRelation::new(
                "User",
                "User (Self)",
                peer_surveillance.clone(),
                PowerDirection::Circular,
            )
            .with_resistance([
                "Critical awareness",
                "Intentional authenticity",
                "Rejecting normalization",
            ]),
        ];

        let mechanisms = vec![
            DisciplinaryMechanism::new("The Digital Panopticon", "surveillance", "panopticon", true)
                .observing([
                    "All user activity",
                    "Behavioral patterns",
                    "Social connections",
                    "Location data",
                    "Consumption habits",
                ])
                .normalizing_to("Algorithmically-defined 'engagement'"),
            DisciplinaryMechanism::new(
                "Algorithmic Normalization",
                "normalization",
                "distributed",
                true,
            )
            .observing(["User content", "Engagement metrics", "Deviation from norms"])
            .normalizing_to("Platform community standards + engagement optimization"),
            DisciplinaryMechanism::new(
                "Metrics and Analytics",
                "examination",
                "self-surveillance",
                true,
            )
            .observing([
                "Likes, shares, comments",
                "Follower counts",
                "Reach and impressions",
                "Engagement rates",
            ])
            .normalizing_to("Quantified social worth"),
            DisciplinaryMechanism::new("Content Moderation", "normalization", "distributed", true)
                .observing(["All posted content", "Reported content", "Flagged keywords"])
                .normalizing_to("Acceptable discourse boundaries"),
            DisciplinaryMechanism::new(
                "Social Comparison",
                "examination",
                "self-surveillance",
                false,
            )
            .observing([
                "Others' curated lives",
                "Others' metrics",
                "Others' achievements",
            ])
            .normalizing_to("Idealized lifestyle standards"),
        ];

        let reach = BTreeMap::from([
            (
                "Data Collection",
                measured(
                    150,
                    1_200,
                    0.95,
                    "Highly measurable: concrete data points tracked, documented third-party sharing numbers.",
                    "data points × users × time",
                )?,
            ),
            (
                "Algorithmic Curation",
                measured(
                    500_000_000,
                    3_000_000_000,
                    0.90,
                    "Very measurable: daily post processing numbers, 100% user reach within platform.",
                    "posts processed × users affected",
                )?,
            ),
            (
                "Employee Monitoring",
                measured(
                    70,
                    100,
                    0.85,
                    "Survey data provides concrete percentages of employer surveillance and rejection rates.",
                    "percentage of workforce × actions taken",
                )?,
            ),
            (
                "State Surveillance",
                measured(
                    1_000_000,
                    100_000_000,
                    0.60,
                    "Partially measurable: some programs documented (PRISM, etc.), but full scope classified. Known metadata collection is total.",
                    "accounts monitored × data collected",
                )?,
            ),
            (
                "Peer Surveillance",
                measured(
                    338,
                    10_000_000,
                    0.80,
                    "Network size measurable, viral potential calculable, screenshot permanence documented.",
                    "network size × visibility duration",
                )?,
            ),
        ]);

        Ok(Self {
            data: SystemData {
                name: "Social Media Surveillance System",
                description: "A modern panopticon: users are constantly observed by platforms, \
                    employers, governments, and each other. The knowledge that one might be \
                    watched creates self-censorship and normalization. \
                    Foucault: 'Visibility is a trap.'",
                privileges: vec![
                    data_collection,
                    curation,
                    employee_monitoring,
                    state_surveillance,
                    peer_surveillance,
                ],
                relations,
                mechanisms,
                reach,
            },
        })
    }
}

catalog_system!(SocialMediaSurveillance);

// =============================================================================
// WORKPLACE
// =============================================================================

/// Digital Taylorism: every keystroke and minute of work is measured.
#[derive(Debug, Clone)]
pub struct WorkplaceSurveillance {
    data: SystemData,
}

impl WorkplaceSurveillance {
    pub fn new() -> Result<Self, PowerError> {
        let productivity = Privilege::new(
            "Productivity Monitoring",
            PrivilegeScope::Global,
            "Track all employee computer activity",
        )
        .with_limitations([
            "Keystroke logging: every key press",
            "Mouse movement tracking: 60 times per minute",
            "Screenshot capture: every 5-10 minutes",
            "Active/idle time: down to the second",
            "Application usage: full timeline",
        ])
        .with_produces([
            "Productivity scores",
            "Normalized work pace",
            "Self-monitoring behavior",
            "Anxiety and compliance",
        ]);

        let communication = Privilege::new(
            "Communication Surveillance",
            PrivilegeScope::Global,
            "Monitor all workplace communications",
        )
        .with_limitations([
            "Email scanning: 100% of messages",
            "Slack/Teams monitoring: all channels",
            "Keyword flagging: customizable lists",
            "Sentiment analysis: automated scoring",
            "Retention: typically 7 years",
        ])
        .with_produces([
            "Self-censorship",
            "Professional language norms",
            "Controlled discourse",
            "Risk-averse communication",
        ]);

        let performance = Privilege::new(
            "Performance Metrics",
            PrivilegeScope::Global,
            "Quantify all work output",
        )
        .with_limitations([
            "Tickets closed per day",
            "Lines of code written",
            "Calls handled per hour",
            "Customer satisfaction scores",
            "Time to completion metrics",
        ])
        .with_produces([
            "Quantified workers",
            "Competitive pressure",
            "Normalized productivity levels",
            "Gamification of labor",
        ]);

        let relations = vec![
            PowerRelation::new(
                "Employer/Management",
                "Employee",
                productivity.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Union organizing",
                "Legal limits (minimal)",
                "Quiet quitting",
                "Working to rule",
            ]),
            PowerRelation::new(
                "Employee",
                "Employee (Self)",
                productivity.clone(),
                PowerDirection::Circular,
            )
            .with_resistance([
                "Awareness of surveillance",
                "Collective resistance",
                "Finding other employment",
            ]),
        ];

        let mechanisms = vec![
            DisciplinaryMechanism::new("Productivity Dashboard", "examination", "panopticon", true)
                .observing(["All work metrics", "Time utilization", "Output quality"])
                .normalizing_to("Optimal productivity score"),
            DisciplinaryMechanism::new("Automated Alerts", "surveillance", "distributed", true)
                .observing(["Idle time", "Policy violations", "Productivity dips"])
                .normalizing_to("Constant activity"),
        ];

        let reach = BTreeMap::from([
            (
                "Productivity Monitoring",
                measured(
                    10_000,
                    1_000_000,
                    0.98,
                    "Extremely precise tracking of every action",
                    "actions tracked × time",
                )?,
            ),
            (
                "Communication Surveillance",
                measured(
                    100,
                    50_000,
                    0.95,
                    "Every message logged and analyzable",
                    "communications × retention period",
                )?,
            ),
            (
                "Performance Metrics",
                measured(
                    10,
                    10_000,
                    0.99,
                    "Perfectly quantified performance data",
                    "metrics × frequency",
                )?,
            ),
        ]);

        Ok(Self {
            data: SystemData {
                name: "Workplace Surveillance System",
                description: "Digital Taylorism: constant measurement and surveillance of worker \
                    productivity. Every keystroke, mouse movement, and minute tracked. Workers \
                    internalize surveillance, becoming self-disciplining subjects. \
                    Foucault: 'Discipline makes individuals.'",
                privileges: vec![productivity, communication, performance],
                relations,
                mechanisms,
                reach,
            },
        })
    }
}

catalog_system!(WorkplaceSurveillance);

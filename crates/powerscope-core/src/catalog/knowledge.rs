//! Power/knowledge systems: the school and academic publishing.

use super::{SystemData, catalog_system, measured};
use crate::types::{
    DisciplinaryMechanism, PowerDirection, PowerError, PowerRelation, Privilege, PrivilegeScope,
};
use std::collections::BTreeMap;

// =============================================================================
// EDUCATION
// =============================================================================

/// The school as a disciplinary institution built around examination.
#[derive(Debug, Clone)]
pub struct EducationalExamination {
    data: SystemData,
}

impl EducationalExamination {
    pub fn new() -> Result<Self, PowerError> {
        let examination = Privilege::new(
            "Examination Authority",
            PrivilegeScope::Global,
            "Power to test and grade students",
        )
        .with_limitations([
            "Standardized tests: 2-4 per year",
            "Weekly quizzes and homework",
            "Final exams: cumulative assessment",
            "GPA scale: 0.0-4.0",
            "Class rank: percentile ranking",
            "Retention: permanent academic records",
        ])
        .with_produces([
            "Categorized students (A, B, C, D, F)",
            "Normalized knowledge",
            "Academic hierarchies",
            "Self-identifying subjects (smart/dumb)",
            "Measurable human capital",
        ]);

        let curriculum = Privilege::new(
            "Curriculum Control",
            PrivilegeScope::Global,
            "Power to define what counts as knowledge",
        )
        .with_limitations([
            "Standardized curriculum: state-mandated",
            "Textbook selection: approved lists",
            "Learning objectives: measurable outcomes",
            "Time allocation: 50-minute periods",
            "Subject hierarchy: STEM > humanities",
        ])
        .with_produces([
            "Legitimate vs illegitimate knowledge",
            "Disciplinary boundaries",
            "Truth regimes",
            "Normalized epistemology",
            "Cultural reproduction",
        ]);

        let behavior = Privilege::new(
            "Behavioral Surveillance",
            PrivilegeScope::Global,
            "Constant observation and discipline",
        )
        .with_limitations([
            "Attendance tracking: daily records",
            "Behavior grades: conduct scores",
            "Discipline referrals: documented incidents",
            "Parent notifications: triggered by thresholds",
            "Surveillance cameras: hallways and classrooms",
        ])
        .with_produces([
            "Docile bodies",
            "Internalized discipline",
            "Self-regulating students",
            "Normalized behavior",
            "Institutional subjects",
        ]);

        let credentialing = Privilege::new(
            "Credentialing Authority",
            PrivilegeScope::Global,
            "Power to grant or deny credentials",
        )
        .with_limitations([
            "Graduation requirements: specific credit hours",
            "Degree levels: AA, BA, MA, PhD hierarchy",
            "Accreditation: institutional gatekeeping",
            "Prerequisites: ordered knowledge progression",
            "Certification exams: pass/fail gates",
        ])
        .with_produces([
            "Credentialed vs non-credentialed subjects",
            "Educational capital",
            "Social stratification",
            "Legitimate expertise",
            "Barrier to entry for professions",
        ]);

        let ranking = Privilege::new(
            "Comparative Ranking",
            PrivilegeScope::Global,
            "Power to rank and compare students",
        )
        .with_limitations([
            "Class rank: 1 to N",
            "Percentile scores: relative standing",
            "Honor roll: top 10-20%",
            "Dean's list: GPA thresholds",
            "Valedictorian: single top student",
        ])
        .with_produces([
            "Competitive subjects",
            "Internalized comparison",
            "Winners and losers",
            "Meritocratic ideology",
            "Normalized inequality",
        ]);

        let relations = vec![
            PowerRelation::new(
                "Institution/Teacher",
                "Student",
                examination.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Cheating (but reinforces system)",
                "Dropping out (costly)",
                "Alternative education",
                "Critical pedagogy",
            ]),
            PowerRelation::new(
                "Student",
                "Student (Self)",
                examination.clone(),
                PowerDirection::Circular,
            )
            .with_resistance([
                "Critical consciousness",
                "Recognizing social construction",
                "Collective resistance",
            ]),
            PowerRelation::new(
                "State/Accreditors",
                "Institution",
                curriculum.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Academic freedom",
                "Teacher autonomy",
                "Informal curriculum",
            ]),
            PowerRelation::new(
                "Institution",
                "Student",
                credentialing.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Self-education",
                "Alternative credentials",
                "Questioning legitimacy",
            ]),
            PowerRelation::new("Student", "Student", ranking.clone(), PowerDirection::Lateral)
                .with_resistance([
                    "Cooperative learning",
                    "Rejecting competition",
                    "Solidarity",
                ]),
        ];

        let mechanisms = vec![
            DisciplinaryMechanism::new("The Examination", "examination", "panopticon", true)
                .observing([
                    "Student knowledge",
                    "Performance under pressure",
                    "Memorization ability",
                    "Compliance with format",
                ])
                .normalizing_to("Standard correct answers"),
            DisciplinaryMechanism::new("The Grade", "classification", "examination", true)
                .observing([
                    "Test scores",
                    "Assignment quality",
                    "Participation",
                    "Behavior",
                ])
                .normalizing_to("Grade distribution curve"),
            DisciplinaryMechanism::new("The Class Schedule", "normalization", "distributed", false)
                .observing(["Time usage", "Attention span", "Transition behavior"])
                .normalizing_to("Industrial time discipline"),
            DisciplinaryMechanism::new("The Permanent Record", "surveillance", "panopticon", true)
                .observing([
                    "Academic history",
                    "Behavioral incidents",
                    "Attendance patterns",
                    "Test scores over time",
                ])
                .normalizing_to("Ideal student trajectory"),
            DisciplinaryMechanism::new("Standardized Testing", "examination", "examination", true)
                .observing([
                    "Comparative performance",
                    "State/national standards",
                    "School effectiveness",
                ])
                .normalizing_to("National benchmarks"),
        ];

        let reach = BTreeMap::from([
            (
                "Examination Authority",
                measured(
                    100,
                    10_000,
                    0.99,
                    "Extremely measurable: exact number of tests, precise grading scales, permanent records.",
                    "examinations × students × permanence",
                )?,
            ),
            (
                "Curriculum Control",
                // 13 years of 180 school days
                measured(
                    180,
                    2_340,
                    0.95,
                    "Highly measurable: exact hours, specific standards, documented learning objectives.",
                    "instructional hours × content coverage",
                )?,
            ),
            (
                "Behavioral Surveillance",
                measured(
                    1_800,
                    23_400,
                    0.92,
                    "Very measurable: attendance records, discipline reports, documented incidents.",
                    "surveillance hours × documented behaviors",
                )?,
            ),
            (
                "Credentialing Authority",
                measured(
                    1,
                    10,
                    0.98,
                    "Perfectly measurable: exact credentials, specific requirements, clear gates.",
                    "credentials × requirements × gatekeeping effects",
                )?,
            ),
            (
                "Comparative Ranking",
                measured(
                    1,
                    1_000,
                    0.99,
                    "Extremely measurable: precise rankings, exact percentiles, documented comparisons.",
                    "rankings × comparisons × psychological effects",
                )?,
            ),
        ]);

        Ok(Self {
            data: SystemData {
                name: "Educational Examination System",
                description: "Schools as factories of normalization. Through constant examination, \
                    students are measured, compared, and categorized. Knowledge and power are \
                    inseparable: exams don't reveal truth, they produce it. \
                    Foucault: 'The examination combines the techniques of an observing hierarchy \
                    and those of a normalizing judgment.'",
                privileges: vec![examination, curriculum, behavior, credentialing, ranking],
                relations,
                mechanisms,
                reach,
            },
        })
    }
}

catalog_system!(EducationalExamination);

// =============================================================================
// ACADEMIC PUBLISHING
// =============================================================================

/// Academic publishing as a regime that decides what counts as knowledge.
#[derive(Debug, Clone)]
pub struct AcademicPublishing {
    data: SystemData,
}

impl AcademicPublishing {
    pub fn new() -> Result<Self, PowerError> {
        let peer_review = Privilege::new(
            "Peer Review Gatekeeping",
            PrivilegeScope::Global,
            "Power to accept/reject knowledge claims",
        )
        .with_limitations([
            "Rejection rate: 70-90% for top journals",
            "Review time: 3-12 months average",
            "Reviewers: 2-3 per submission",
            "Revisions: multiple rounds typically",
            "Appeal process: limited, rarely successful",
        ])
        .with_produces([
            "Legitimate vs illegitimate knowledge",
            "Disciplinary boundaries",
            "Authorized knowers",
            "Citation networks",
            "Truth regimes",
        ]);

        let impact_factor = Privilege::new(
            "Impact Factor Ranking",
            PrivilegeScope::Global,
            "Quantification of knowledge value",
        )
        .with_limitations([
            "Impact factor: 0-100+ scale",
            "H-index: researcher ranking",
            "Citation counts: measurable influence",
            "Journal tiers: Q1, Q2, Q3, Q4",
            "Rankings updated: annually",
        ])
        .with_produces([
            "Hierarchies of knowledge",
            "Prestige economies",
            "Publishing pressure",
            "Normalized research agendas",
            "Quantified scholarship",
        ]);

        let institutional = Privilege::new(
            "Institutional Credentialing",
            PrivilegeScope::Limited,
            "Power of institutional affiliation",
        )
        .with_limitations([
            "R1 universities: top 130 in US",
            "Ivy League: 8 institutions",
            "Publication rates: R1 > others",
            "Name recognition: affects peer review",
            "Resource access: library subscriptions, funding",
        ])
        .with_produces([
            "Legitimate vs peripheral scholars",
            "Geographic/institutional inequalities",
            "Self-perpetuating elites",
            "Credibility by association",
            "Knowledge monopolies",
        ]);

        let relations = vec![
            PowerRelation::new(
                "Journal Editors/Reviewers",
                "Researchers",
                peer_review.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Open access publishing",
                "Preprint servers",
                "Alternative metrics",
                "Public scholarship",
            ]),
            PowerRelation::new(
                "Researchers",
                "Researchers",
                impact_factor.clone(),
                PowerDirection::Lateral,
            )
            .with_resistance([
                "Ignoring impact factors",
                "Slow scholarship movements",
                "Collective action",
            ]),
        ];

        let mechanisms = vec![
            DisciplinaryMechanism::new("Peer Review", "examination", "examination", true)
                .observing([
                    "Research methodology",
                    "Argument structure",
                    "Literature engagement",
                    "Disciplinary conformity",
                ])
                .normalizing_to("Disciplinary standards and paradigms"),
            DisciplinaryMechanism::new("Citation Analysis", "surveillance", "distributed", true)
                .observing([
                    "Who cites whom",
                    "Citation frequency",
                    "Citation networks",
                    "Knowledge lineages",
                ])
                .normalizing_to("Citation norms and impact expectations"),
            DisciplinaryMechanism::new("Metrics and Rankings", "classification", "examination", true)
                .observing([
                    "Journal rankings",
                    "Author metrics",
                    "University rankings",
                    "Department rankings",
                ])
                .normalizing_to("Quantified academic worth"),
        ];

        let reach = BTreeMap::from([
            (
                "Peer Review Gatekeeping",
                measured(
                    70,
                    90,
                    0.97,
                    "Highly documented rejection rates and review processes",
                    "acceptance rates × submissions × time",
                )?,
            ),
            (
                "Impact Factor Ranking",
                measured(
                    1,
                    100,
                    0.99,
                    "Precisely calculated metrics, publicly available",
                    "citations × publications × time",
                )?,
            ),
            (
                "Institutional Credentialing",
                measured(
                    130,
                    4_000,
                    0.90,
                    "Documented institutional hierarchies and rankings",
                    "institutions × prestige × access",
                )?,
            ),
        ]);

        Ok(Self {
            data: SystemData {
                name: "Academic Publishing Power System",
                description: "Academic publishing doesn't just disseminate knowledge, it produces \
                    legitimate knowledge and legitimate knowers. Peer review, impact factors, and \
                    citation counts create hierarchies of truth. \
                    Foucault: 'Truth is a thing of this world.'",
                privileges: vec![peer_review, impact_factor, institutional],
                relations,
                mechanisms,
                reach,
            },
        })
    }
}

catalog_system!(AcademicPublishing);

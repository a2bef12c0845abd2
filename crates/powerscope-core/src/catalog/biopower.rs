//! Biopower systems: power over populations and over one's own body.

use super::{SystemData, catalog_system, measured};
use crate::types::{
    DisciplinaryMechanism, PowerDirection, PowerError, PowerRelation, Privilege, PrivilegeScope,
};
use std::collections::BTreeMap;

// =============================================================================
// PUBLIC HEALTH
// =============================================================================

/// Public health as biopower: states managing births, deaths and disease.
#[derive(Debug, Clone)]
pub struct PublicHealthBiopower {
    data: SystemData,
}

impl PublicHealthBiopower {
    pub fn new() -> Result<Self, PowerError> {
        let population = Privilege::new(
            "Population Surveillance",
            PrivilegeScope::Global,
            "Statistical monitoring of population health",
        )
        .with_limitations([
            "Disease reporting: mandatory for 120+ conditions",
            "Vital statistics: all births, deaths recorded",
            "Vaccination tracking: state registries",
            "Cancer registries: comprehensive databases",
            "COVID tracking: real-time case counts",
            "Life expectancy: calculated to decimal points",
        ])
        .with_produces([
            "Population norms",
            "Normal vs abnormal bodies",
            "Risk profiles",
            "Biomedical subjects",
            "Governable populations",
        ]);

        let intervention = Privilege::new(
            "Health Intervention Authority",
            PrivilegeScope::Global,
            "Power to mandate health behaviors",
        )
        .with_limitations([
            "Vaccination mandates: required for school entry",
            "Quarantine authority: forced isolation",
            "Fluoridation: municipal water treatment",
            "Screenings: mandatory for certain jobs/schools",
            "Health codes: restaurant inspections, standards",
        ])
        .with_produces([
            "Normalized health practices",
            "Compliant populations",
            "Biomedical citizenship",
            "Healthy vs unhealthy subjects",
            "Collective body management",
        ]);

        let reproduction = Privilege::new(
            "Reproductive Regulation",
            PrivilegeScope::Limited,
            "Control over reproduction and sexuality",
        )
        .with_limitations([
            "Birth certificates: state registration required",
            "Prenatal screening: encouraged/required",
            "Genetic counseling: normalization of genetics",
            "IVF regulations: who can access",
            "Abortion laws: geographic variation",
            "Contraception access: policy-determined",
        ])
        .with_produces([
            "Normal vs abnormal reproduction",
            "Regulated sexuality",
            "Optimized populations",
            "Eugenic pressures",
            "Reproductive subjects",
        ]);

        let health_data = Privilege::new(
            "Health Data Collection",
            PrivilegeScope::Global,
            "Comprehensive medical surveillance",
        )
        .with_limitations([
            "Electronic Health Records: all encounters",
            "Insurance claims: every procedure",
            "Prescription monitoring: opioid databases",
            "Genetic databases: millions of profiles",
            "Wearable data: continuous biometric tracking",
        ])
        .with_produces([
            "Legible bodies",
            "Risk-sorted populations",
            "Predictive health profiles",
            "Data subjects",
            "Algorithmic health governance",
        ]);

        let metrics = Privilege::new(
            "Normalization Through Metrics",
            PrivilegeScope::Global,
            "Definition of healthy through measurement",
        )
        .with_limitations([
            "BMI standards: 18.5-24.9 'normal'",
            "Blood pressure: <120/80 'normal'",
            "Blood sugar: 70-99 mg/dL 'normal'",
            "Cholesterol: <200 mg/dL 'desirable'",
            "Growth charts: percentile rankings",
            "Mental health scales: DSM-5 criteria",
        ])
        .with_produces([
            "Normal vs abnormal bodies",
            "Self-monitoring subjects",
            "Medicalized daily life",
            "Health anxiety",
            "Constant self-improvement",
        ]);

        let relations = vec![
            PowerRelation::new(
                "State/Public Health",
                "Population",
                population.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Privacy protections (limited)",
                "Refusing testing",
                "Alternative health movements",
                "Health freedom activism",
            ]),
            PowerRelation::new(
                "State/Public Health",
                "Population",
                intervention.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Vaccine refusal",
                "Civil disobedience",
                "Legal challenges",
                "Religious exemptions",
            ]),
            PowerRelation::new(
                "Individual",
                "Individual (Self)",
                metrics.clone(),
                PowerDirection::Circular,
            )
            .with_resistance([
                "Body positivity",
                "Disability justice",
                "Mad pride movements",
                "Rejecting medicalization",
            ]),
            PowerRelation::new(
                "Medical Profession",
                "Patient/Citizen",
                health_data.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Refusing tests",
                "Data privacy laws",
                "Alternative medicine",
                "Patient autonomy",
            ]),
        ];

        let mechanisms = vec![
            DisciplinaryMechanism::new("The Medical Gaze", "surveillance", "examination", true)
                .observing([
                    "Bodies and symptoms",
                    "Deviations from norms",
                    "Risk factors",
                    "Behavioral patterns",
                ])
                .normalizing_to("Medical definitions of health"),
            DisciplinaryMechanism::new(
                "Population Statistics",
                "classification",
                "distributed",
                true,
            )
            .observing([
                "Birth/death rates",
                "Disease prevalence",
                "Life expectancy",
                "Health disparities",
            ])
            .normalizing_to("Population-level norms"),
            DisciplinaryMechanism::new("Health Campaigns", "normalization", "distributed", false)
                .observing([
                    "Public behavior",
                    "Lifestyle choices",
                    "Compliance with recommendations",
                ])
                .normalizing_to("Healthy lifestyle standards"),
            DisciplinaryMechanism::new(
                "Diagnostic Classification",
                "classification",
                "examination",
                true,
            )
            .observing(["Symptoms and signs", "Test results", "Behavioral patterns"])
            .normalizing_to("ICD-10/DSM-5 categories"),
            DisciplinaryMechanism::new(
                "Biometric Tracking",
                "surveillance",
                "self-surveillance",
                true,
            )
            .observing([
                "Heart rate",
                "Steps walked",
                "Sleep patterns",
                "Calorie consumption",
            ])
            .normalizing_to("Optimal health metrics"),
        ];

        let reach = BTreeMap::from([
            (
                "Population Surveillance",
                measured(
                    120,
                    300_000_000,
                    0.98,
                    "Extremely measurable: comprehensive vital statistics, disease registries, mandatory reporting.",
                    "data points × population × time",
                )?,
            ),
            (
                "Health Intervention Authority",
                measured(
                    50_000_000,
                    300_000_000,
                    0.95,
                    "Highly measurable: documented vaccination rates, quarantine orders, municipal fluoridation coverage.",
                    "interventions × population coverage",
                )?,
            ),
            (
                "Reproductive Regulation",
                measured(
                    3_500_000,
                    150_000_000,
                    0.85,
                    "Measurable through birth certificates, IVF statistics, abortion rates, though some aspects harder to quantify.",
                    "reproductive events × regulations × reach",
                )?,
            ),
            (
                "Health Data Collection",
                measured(
                    1_000_000_000,
                    10_000_000_000,
                    0.99,
                    "Extremely measurable: EHRs track everything, insurance claims documented, wearables generate continuous data.",
                    "data points × encounters × retention",
                )?,
            ),
            (
                "Normalization Through Metrics",
                measured(
                    300_000_000,
                    1_000_000_000,
                    0.93,
                    "Highly measurable: precise metric definitions, documented normal ranges, standardized across medicine.",
                    "measurements × individuals × lifetime",
                )?,
            ),
        ]);

        Ok(Self {
            data: SystemData {
                name: "Public Health Biopower System",
                description: "Biopower operates on populations rather than individuals. Through \
                    statistics, norms, and interventions, states manage life itself: birth rates, \
                    mortality, disease, vaccination, reproduction. \
                    Foucault: 'Power would no longer be dealing simply with legal subjects over \
                    whom the ultimate dominion was death, but with living beings.'",
                privileges: vec![population, intervention, reproduction, health_data, metrics],
                relations,
                mechanisms,
                reach,
            },
        })
    }
}

catalog_system!(PublicHealthBiopower);

// =============================================================================
// FITNESS TRACKING
// =============================================================================

/// The quantified self: wearables turning bodies into data streams.
#[derive(Debug, Clone)]
pub struct FitnessTrackingBiopower {
    data: SystemData,
}

impl FitnessTrackingBiopower {
    pub fn new() -> Result<Self, PowerError> {
        let biometrics = Privilege::new(
            "Continuous Biometric Surveillance",
            PrivilegeScope::Global,
            "24/7 tracking of body metrics",
        )
        .with_limitations([
            "Heart rate: measured every second",
            "Steps: counted continuously",
            "Sleep stages: monitored all night",
            "Calories: estimated constantly",
            "GPS tracking: continuous location",
            "Data retention: unlimited",
        ])
        .with_produces([
            "Self-optimizing subjects",
            "Gamified health",
            "Normalized activity levels",
            "Data-driven bodies",
            "Voluntary surveillance",
        ]);

        let competition = Privilege::new(
            "Social Comparison and Competition",
            PrivilegeScope::Global,
            "Ranking and comparing fitness data",
        )
        .with_limitations([
            "Leaderboards: ranked by steps/calories",
            "Badges and achievements: gamification",
            "Challenges: competitive events",
            "Social sharing: automatic posts",
            "Peer pressure: visible activity",
        ])
        .with_produces([
            "Competitive optimization",
            "Social pressure to perform",
            "Normalized fitness culture",
            "Externalized motivation",
            "Fitness hierarchies",
        ]);

        let insurance = Privilege::new(
            "Health Insurance Integration",
            PrivilegeScope::Limited,
            "Linking activity data to insurance",
        )
        .with_limitations([
            "Premium discounts: up to 25% for data sharing",
            "Step goals: typically 7,000-10,000 per day",
            "Wellness points: earn rewards",
            "Data sharing: with employers/insurers",
            "Penalties: for non-compliance",
        ])
        .with_produces([
            "Coerced participation",
            "Economic biopower",
            "Surveillance as condition of coverage",
            "Optimized worker bodies",
            "Actuarial subjects",
        ]);

        let relations = vec![
            PowerRelation::new(
                "Platform/Device Company",
                "User",
                biometrics.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Not wearing device",
                "Data deletion",
                "Privacy settings (limited)",
            ]),
            PowerRelation::new(
                "User",
                "User (Self)",
                biometrics.clone(),
                PowerDirection::Circular,
            )
            .with_resistance([
                "Critical awareness",
                "Rejecting quantification",
                "Body autonomy",
            ]),
            PowerRelation::new(
                "Employer/Insurer",
                "Employee/Insured",
                insurance.clone(),
                PowerDirection::TopDown,
            )
            .with_resistance([
                "Refusing to participate (costly)",
                "Regulation (limited)",
                "Collective bargaining",
            ]),
        ];

        let mechanisms = vec![
            DisciplinaryMechanism::new(
                "Activity Rings/Goals",
                "normalization",
                "self-surveillance",
                true,
            )
            .observing(["Daily activity", "Goal completion", "Streaks"])
            .normalizing_to("10,000 steps, 30 active minutes, etc."),
            DisciplinaryMechanism::new(
                "Notifications and Reminders",
                "surveillance",
                "panopticon",
                true,
            )
            .observing(["Inactivity periods", "Missed goals", "Irregular patterns"])
            .normalizing_to("Constant activity"),
            DisciplinaryMechanism::new("Health Scoring", "examination", "examination", true)
                .observing(["All biometric data", "Activity patterns", "Trends over time"])
                .normalizing_to("Optimal health score"),
        ];

        // one data point per second, per day and per year
        let reach = BTreeMap::from([
            (
                "Continuous Biometric Surveillance",
                measured(
                    86_400,
                    31_536_000,
                    0.99,
                    "Perfectly measurable: continuous digital tracking",
                    "data points per second × time",
                )?,
            ),
            (
                "Social Comparison and Competition",
                measured(
                    100,
                    10_000,
                    0.90,
                    "Measurable through connection counts and engagement",
                    "connections × interactions × visibility",
                )?,
            ),
            (
                "Health Insurance Integration",
                measured(
                    10_000_000,
                    100_000_000,
                    0.85,
                    "Documented participation rates in wellness programs",
                    "participants × incentives × compliance",
                )?,
            ),
        ]);

        Ok(Self {
            data: SystemData {
                name: "Fitness Tracking Biopower System",
                description: "The quantified self: wearable devices turn bodies into data streams. \
                    Users voluntarily surveil themselves, internalize health norms, and optimize \
                    their biology. Biopower operates through self-discipline. \
                    Foucault: 'There is no need for arms, physical violence, material \
                    constraints. Just a gaze.'",
                privileges: vec![biometrics, competition, insurance],
                relations,
                mechanisms,
                reach,
            },
        })
    }
}

catalog_system!(FitnessTrackingBiopower);

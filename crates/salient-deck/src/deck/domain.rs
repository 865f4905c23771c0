use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideKind {
    Title,
    Agenda,
    YendoContext,
    Problem,
    Impact,
    SolutionIntro,
    WhySalient,
    LifecycleOverview,
    #[serde(rename = "phase-1")]
    PhaseOne,
    #[serde(rename = "phase-2")]
    PhaseTwo,
    #[serde(rename = "phase-3")]
    PhaseThree,
    FeatureRules,
    Simulations,
    Mastercom,
    EvidencePackages,
    Compliance,
    Comparison,
    ValueProp,
    BusinessCalculator,
    Takeaways,
}

impl SlideKind {
    pub const fn ordered() -> [Self; 20] {
        [
            Self::Title,
            Self::Agenda,
            Self::YendoContext,
            Self::Problem,
            Self::Impact,
            Self::SolutionIntro,
            Self::WhySalient,
            Self::LifecycleOverview,
            Self::PhaseOne,
            Self::PhaseTwo,
            Self::PhaseThree,
            Self::FeatureRules,
            Self::Simulations,
            Self::Mastercom,
            Self::EvidencePackages,
            Self::Compliance,
            Self::Comparison,
            Self::ValueProp,
            Self::BusinessCalculator,
            Self::Takeaways,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Agenda => "agenda",
            Self::YendoContext => "yendo-context",
            Self::Problem => "problem",
            Self::Impact => "impact",
            Self::SolutionIntro => "solution-intro",
            Self::WhySalient => "why-salient",
            Self::LifecycleOverview => "lifecycle-overview",
            Self::PhaseOne => "phase-1",
            Self::PhaseTwo => "phase-2",
            Self::PhaseThree => "phase-3",
            Self::FeatureRules => "feature-rules",
            Self::Simulations => "simulations",
            Self::Mastercom => "mastercom",
            Self::EvidencePackages => "evidence-packages",
            Self::Compliance => "compliance",
            Self::Comparison => "comparison",
            Self::ValueProp => "value-prop",
            Self::BusinessCalculator => "business-calculator",
            Self::Takeaways => "takeaways",
        }
    }

    pub const fn badge(self) -> Option<&'static str> {
        match self {
            Self::Title => None,
            Self::Agenda => Some("Overview"),
            Self::YendoContext => Some("Why Yendo"),
            Self::Problem => Some("The Problem"),
            Self::Impact => Some("The Impact"),
            Self::SolutionIntro => Some("The Solution"),
            Self::WhySalient => Some("Why Salient"),
            Self::LifecycleOverview => Some("Product Overview"),
            Self::PhaseOne => Some("Steps 1-4"),
            Self::PhaseTwo => Some("Steps 5-7"),
            Self::PhaseThree => Some("Steps 8-12"),
            Self::FeatureRules => Some("Programmatic Rules"),
            Self::Simulations => Some("Programmatic Advantage"),
            Self::Mastercom => Some("Mastercard Integration"),
            Self::EvidencePackages => Some("Documentation Automation"),
            Self::Compliance => Some("Compliance & Governance"),
            Self::Comparison => Some("Comparison"),
            Self::ValueProp => Some("Value Analysis"),
            Self::BusinessCalculator => Some("Business Calculator"),
            Self::Takeaways => Some("Key Takeaways"),
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Title => "AI-Powered Dispute Resolution",
            Self::Agenda => "Today's Discussion",
            Self::YendoContext => "The Ideal Partner for AI-Powered Disputes",
            Self::Problem => "Disputes Today: Manual & Unstructured",
            Self::Impact => "The Real Cost of Status Quo",
            Self::SolutionIntro => "Salient Automates the Dispute Lifecycle",
            Self::WhySalient => "Purpose-built AI for regulated lending",
            Self::LifecycleOverview => "12-Step Dispute Lifecycle",
            Self::PhaseOne => "Case Initiation & Classification",
            Self::PhaseTwo => "Early Screening & Evidence Evaluation",
            Self::PhaseThree => "Decisioning, Execution & Documentation",
            Self::FeatureRules => "Versionable & Auditable Logic",
            Self::Simulations => "Simulation & What-If Analysis",
            Self::Mastercom => "Direct Mastercom API Submission",
            Self::EvidencePackages => "Auto-Generated Evidence Packages",
            Self::Compliance => "Why Compliance-First Matters for Disputes",
            Self::Comparison => "Before & After Salient",
            Self::ValueProp => "The Business Case for Yendo",
            Self::BusinessCalculator => "Model Your Annual Value",
            Self::Takeaways => "Why Salient for Yendo?",
        }
    }

    pub const fn theme(self) -> SlideTheme {
        match self {
            Self::SolutionIntro | Self::WhySalient | Self::Takeaways => SlideTheme::Dark,
            Self::Impact | Self::Comparison | Self::BusinessCalculator => SlideTheme::Secondary,
            _ => SlideTheme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideTheme {
    Light,
    Secondary,
    Dark,
}

/// Static metadata for one slide in the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub kind: SlideKind,
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub headline: &'static str,
    pub theme: SlideTheme,
}

impl From<SlideKind> for Slide {
    fn from(kind: SlideKind) -> Self {
        Self {
            kind,
            id: kind.id(),
            badge: kind.badge(),
            headline: kind.headline(),
            theme: kind.theme(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("a deck needs at least one slide")]
    EmptyDeck,
    #[error("slide index {index} is outside the deck (0..{len})")]
    SlideOutOfRange { index: usize, len: usize },
}

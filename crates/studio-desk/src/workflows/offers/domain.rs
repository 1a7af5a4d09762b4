use serde::{Deserialize, Serialize};

/// Professional profile an offer is priced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionalRole {
    Influencer,
    Developer,
    SocialMediaManager,
    GraphicDesigner,
    Other,
}

impl ProfessionalRole {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Influencer,
            Self::Developer,
            Self::SocialMediaManager,
            Self::GraphicDesigner,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Influencer => "Influencer",
            Self::Developer => "Developer",
            Self::SocialMediaManager => "Social Media Manager",
            Self::GraphicDesigner => "Graphic Designer",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    #[default]
    Low,
    Medium,
    High,
}

impl Complexity {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 1.2,
            Self::High => 1.5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Deliverable formats an influencer campaign includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentFormats {
    pub post: bool,
    pub carousel: bool,
    pub story: bool,
    pub reels: bool,
    pub live: bool,
    pub article: bool,
}

/// Toggles shared by every role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteOptions {
    pub apply_vat: bool,
    pub is_expedited: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerInput {
    pub followers: f64,
    pub engagement_pct: f64,
    #[serde(default)]
    pub formats: ContentFormats,
    #[serde(default)]
    pub exclusivity: bool,
    #[serde(default)]
    pub license: bool,
    #[serde(default)]
    pub cta: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperInput {
    pub hourly_rate: f64,
    pub estimated_hours: f64,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub travel_cost: f64,
    #[serde(default)]
    pub license_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaManagerInput {
    pub channels: f64,
    pub posts_per_week: f64,
    #[serde(default)]
    pub community_hours: f64,
    #[serde(default)]
    pub strategy_fee: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicDesignerInput {
    pub base_price: f64,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub revisions: f64,
    #[serde(default)]
    pub license_usage: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherInput {
    pub base_rate: f64,
    #[serde(default)]
    pub additional_cost: f64,
}

/// Role-specific pricing form; exactly one role is active per quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum QuoteInput {
    Influencer {
        #[serde(flatten)]
        details: InfluencerInput,
        #[serde(flatten)]
        options: QuoteOptions,
    },
    Developer {
        #[serde(flatten)]
        details: DeveloperInput,
        #[serde(flatten)]
        options: QuoteOptions,
    },
    SocialMediaManager {
        #[serde(flatten)]
        details: SocialMediaManagerInput,
        #[serde(flatten)]
        options: QuoteOptions,
    },
    GraphicDesigner {
        #[serde(flatten)]
        details: GraphicDesignerInput,
        #[serde(flatten)]
        options: QuoteOptions,
    },
    Other {
        #[serde(flatten)]
        details: OtherInput,
        #[serde(flatten)]
        options: QuoteOptions,
    },
}

impl QuoteInput {
    pub fn role(&self) -> ProfessionalRole {
        match self {
            Self::Influencer { .. } => ProfessionalRole::Influencer,
            Self::Developer { .. } => ProfessionalRole::Developer,
            Self::SocialMediaManager { .. } => ProfessionalRole::SocialMediaManager,
            Self::GraphicDesigner { .. } => ProfessionalRole::GraphicDesigner,
            Self::Other { .. } => ProfessionalRole::Other,
        }
    }

    pub fn options(&self) -> QuoteOptions {
        match self {
            Self::Influencer { options, .. }
            | Self::Developer { options, .. }
            | Self::SocialMediaManager { options, .. }
            | Self::GraphicDesigner { options, .. }
            | Self::Other { options, .. } => *options,
        }
    }

    pub fn options_mut(&mut self) -> &mut QuoteOptions {
        match self {
            Self::Influencer { options, .. }
            | Self::Developer { options, .. }
            | Self::SocialMediaManager { options, .. }
            | Self::GraphicDesigner { options, .. }
            | Self::Other { options, .. } => options,
        }
    }
}

/// Priced offer, each amount rounded to the nearest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub base: f64,
    pub surcharges: f64,
    pub net: f64,
    pub gross: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    Base,
    Surcharge,
    Expedited,
    Vat,
}

/// Single priced term, kept so offers can show how the total was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLineItem {
    pub kind: LineItemKind,
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub role: ProfessionalRole,
    pub role_label: String,
    pub result: QuoteResult,
    pub line_items: Vec<QuoteLineItem>,
}

impl QuoteBreakdown {
    pub fn summary(&self) -> String {
        format!(
            "{} offer: base {:.0}, surcharges {:.0}, net {:.0}, gross {:.0}",
            self.role_label,
            self.result.base,
            self.result.surcharges,
            self.result.net,
            self.result.gross
        )
    }
}

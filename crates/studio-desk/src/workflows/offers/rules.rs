use super::domain::{
    ContentFormats, DeveloperInput, GraphicDesignerInput, InfluencerInput, LineItemKind,
    OtherInput, QuoteLineItem, SocialMediaManagerInput,
};

/// Rate per 1 000 followers before engagement uplift.
pub(crate) const INFLUENCER_RATE_PER_THOUSAND: f64 = 20.0;
/// Flat price per post in a social media management retainer.
pub(crate) const SOCIAL_POST_PRICE: f64 = 50.0;
pub(crate) const WEEKS_PER_MONTH: f64 = 4.0;
pub(crate) const COMMUNITY_HOUR_PRICE: f64 = 100.0;
pub(crate) const REVISION_PRICE: f64 = 100.0;
pub(crate) const DESIGN_LICENSE_FEE: f64 = 200.0;

/// Keyword bonuses for the declared developer stack. Every keyword is checked on
/// its own, so "React/Next.js" collects both the React and the Next bonus.
const TECH_STACK_BONUSES: [(&str, f64); 5] = [
    ("React", 0.10),
    ("Next", 0.10),
    ("Node", 0.05),
    ("AI", 0.20),
    ("ML", 0.20),
];

/// Rounds half up to the nearest currency unit (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_currency(value: f64) -> f64 {
    let whole = value.floor();
    if value - whole >= 0.5 {
        whole + 1.0
    } else {
        whole
    }
}

pub fn tech_stack_bonus(stack: &str) -> f64 {
    TECH_STACK_BONUSES
        .iter()
        .filter(|(keyword, _)| stack.contains(keyword))
        .map(|(_, bonus)| bonus)
        .sum()
}

/// Base price plus the role surcharge before rounding, with audit lines.
pub(crate) struct RolePricing {
    pub base: f64,
    pub surcharge: f64,
    pub line_items: Vec<QuoteLineItem>,
}

impl RolePricing {
    fn new(base: f64, base_label: String) -> Self {
        Self {
            base,
            surcharge: 0.0,
            line_items: vec![QuoteLineItem {
                kind: LineItemKind::Base,
                label: base_label,
                amount: base,
            }],
        }
    }

    fn add_flat(&mut self, label: impl Into<String>, amount: f64) {
        self.surcharge += amount;
        self.line_items.push(QuoteLineItem {
            kind: LineItemKind::Surcharge,
            label: label.into(),
            amount,
        });
    }
}

pub(crate) fn price_influencer(input: &InfluencerInput) -> RolePricing {
    let base = round_currency(
        (input.followers / 1000.0)
            * INFLUENCER_RATE_PER_THOUSAND
            * (1.0 + input.engagement_pct / 100.0),
    );
    let mut pricing = RolePricing::new(
        base,
        format!(
            "{:.0} followers at {}% engagement",
            input.followers, input.engagement_pct
        ),
    );

    let bonuses = influencer_bonuses(&input.formats, input.exclusivity, input.license, input.cta);
    let rate: f64 = bonuses.iter().map(|(_, rate)| rate).sum();
    for (label, bonus) in &bonuses {
        pricing.line_items.push(QuoteLineItem {
            kind: LineItemKind::Surcharge,
            label: format!("{label} (+{:.0}%)", bonus * 100.0),
            amount: base * bonus,
        });
    }
    // Bonus rates are summed and applied to the base in one step.
    pricing.surcharge = base * rate;
    pricing
}

fn influencer_bonuses(
    formats: &ContentFormats,
    exclusivity: bool,
    license: bool,
    cta: bool,
) -> Vec<(&'static str, f64)> {
    [
        (formats.post, "Post", 0.10),
        (formats.carousel, "Carousel", 0.15),
        (formats.story, "Story", 0.05),
        (formats.reels, "Reels", 0.20),
        (formats.live, "Live", 0.25),
        (formats.article, "Article", 0.15),
        (exclusivity, "Exclusivity", 0.20),
        (license, "Usage license", 0.10),
        (cta, "Call to action", 0.05),
    ]
    .into_iter()
    .filter(|(enabled, _, _)| *enabled)
    .map(|(_, label, rate)| (label, rate))
    .collect()
}

pub(crate) fn price_developer(input: &DeveloperInput) -> RolePricing {
    let bonus = tech_stack_bonus(&input.tech_stack);
    let base = round_currency(
        input.hourly_rate * input.estimated_hours * input.complexity.multiplier() * (1.0 + bonus),
    );
    let mut pricing = RolePricing::new(
        base,
        format!(
            "{} h at {} per hour, {} complexity, stack bonus {:.0}%",
            input.estimated_hours,
            input.hourly_rate,
            input.complexity.label(),
            bonus * 100.0
        ),
    );
    pricing.add_flat("Travel", input.travel_cost);
    pricing.add_flat("Licenses", input.license_cost);
    pricing
}

pub(crate) fn price_social_media_manager(input: &SocialMediaManagerInput) -> RolePricing {
    let base = input.channels * input.posts_per_week * WEEKS_PER_MONTH * SOCIAL_POST_PRICE;
    let mut pricing = RolePricing::new(
        base,
        format!(
            "{} channels x {} posts per week",
            input.channels, input.posts_per_week
        ),
    );
    pricing.add_flat(
        format!("Community management ({} h)", input.community_hours),
        input.community_hours * COMMUNITY_HOUR_PRICE,
    );
    pricing.add_flat("Strategy", input.strategy_fee);
    pricing
}

pub(crate) fn price_graphic_designer(input: &GraphicDesignerInput) -> RolePricing {
    let base = round_currency(input.base_price * input.complexity.multiplier());
    let mut pricing = RolePricing::new(
        base,
        format!(
            "Design at {} with {} complexity",
            input.base_price,
            input.complexity.label()
        ),
    );
    pricing.add_flat(
        format!("Revisions ({})", input.revisions),
        input.revisions * REVISION_PRICE,
    );
    if input.license_usage {
        pricing.add_flat("Usage license", DESIGN_LICENSE_FEE);
    }
    pricing
}

pub(crate) fn price_other(input: &OtherInput) -> RolePricing {
    let mut pricing = RolePricing::new(input.base_rate, "Base rate".to_string());
    pricing.add_flat("Additional costs", input.additional_cost);
    pricing
}

use axum::response::Response;
use serde_json::Value;

use crate::workflows::offers::domain::{
    Complexity, ContentFormats, DeveloperInput, GraphicDesignerInput, InfluencerInput, OtherInput,
    QuoteInput, QuoteOptions, SocialMediaManagerInput,
};

pub(super) fn options(apply_vat: bool, is_expedited: bool) -> QuoteOptions {
    QuoteOptions {
        apply_vat,
        is_expedited,
    }
}

pub(super) fn influencer(options: QuoteOptions) -> QuoteInput {
    QuoteInput::Influencer {
        details: InfluencerInput {
            followers: 10_000.0,
            engagement_pct: 5.0,
            formats: ContentFormats {
                post: true,
                ..ContentFormats::default()
            },
            exclusivity: false,
            license: false,
            cta: false,
        },
        options,
    }
}

pub(super) fn developer(options: QuoteOptions) -> QuoteInput {
    QuoteInput::Developer {
        details: DeveloperInput {
            hourly_rate: 100.0,
            estimated_hours: 40.0,
            complexity: Complexity::Medium,
            tech_stack: "React/Next.js".to_string(),
            travel_cost: 0.0,
            license_cost: 0.0,
        },
        options,
    }
}

pub(super) fn social_media_manager(options: QuoteOptions) -> QuoteInput {
    QuoteInput::SocialMediaManager {
        details: SocialMediaManagerInput {
            channels: 3.0,
            posts_per_week: 4.0,
            community_hours: 5.0,
            strategy_fee: 350.0,
        },
        options,
    }
}

pub(super) fn graphic_designer(options: QuoteOptions) -> QuoteInput {
    QuoteInput::GraphicDesigner {
        details: GraphicDesignerInput {
            base_price: 1_250.0,
            complexity: Complexity::High,
            revisions: 2.0,
            license_usage: true,
        },
        options,
    }
}

pub(super) fn other(options: QuoteOptions) -> QuoteInput {
    QuoteInput::Other {
        details: OtherInput {
            base_rate: 999.0,
            additional_cost: 101.0,
        },
        options,
    }
}

pub(super) fn every_role(options: QuoteOptions) -> Vec<QuoteInput> {
    vec![
        influencer(options),
        developer(options),
        social_media_manager(options),
        graphic_designer(options),
        other(options),
    ]
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

use super::domain::{LineItemKind, QuoteBreakdown, QuoteInput, QuoteLineItem, QuoteResult};
use super::rules::{self, round_currency, RolePricing};

/// Gross multiplier for the 23% value added tax.
pub const VAT_MULTIPLIER: f64 = 1.23;
/// Premium on the base rate for expedited delivery (20%).
pub const EXPEDITED_RATE: f64 = 0.20;

/// Prices an offer. Inputs are not range checked here; negative or non-finite
/// values flow through the arithmetic unchanged.
pub fn compute_quote(input: &QuoteInput) -> QuoteResult {
    quote_breakdown(input).result
}

/// Prices an offer and keeps every contributing term.
pub fn quote_breakdown(input: &QuoteInput) -> QuoteBreakdown {
    let RolePricing {
        base,
        surcharge,
        mut line_items,
    } = match input {
        QuoteInput::Influencer { details, .. } => rules::price_influencer(details),
        QuoteInput::Developer { details, .. } => rules::price_developer(details),
        QuoteInput::SocialMediaManager { details, .. } => {
            rules::price_social_media_manager(details)
        }
        QuoteInput::GraphicDesigner { details, .. } => rules::price_graphic_designer(details),
        QuoteInput::Other { details, .. } => rules::price_other(details),
    };
    let options = input.options();

    let mut surcharges = round_currency(surcharge);
    if options.is_expedited {
        let premium = round_currency(base * EXPEDITED_RATE);
        surcharges += premium;
        line_items.push(QuoteLineItem {
            kind: LineItemKind::Expedited,
            label: format!("Expedited delivery (+{:.0}%)", EXPEDITED_RATE * 100.0),
            amount: premium,
        });
    }

    let net = round_currency(base + surcharges);
    let gross = if options.apply_vat {
        let gross = round_currency(net * VAT_MULTIPLIER);
        line_items.push(QuoteLineItem {
            kind: LineItemKind::Vat,
            label: format!("VAT {:.0}%", (VAT_MULTIPLIER - 1.0) * 100.0),
            amount: gross - net,
        });
        gross
    } else {
        net
    };

    let role = input.role();
    QuoteBreakdown {
        role,
        role_label: role.label().to_string(),
        result: QuoteResult {
            base,
            surcharges,
            net,
            gross,
        },
        line_items,
    }
}

use super::common::*;
use crate::workflows::offers::domain::{
    ContentFormats, InfluencerInput, LineItemKind, ProfessionalRole, QuoteInput,
};
use crate::workflows::offers::{compute_quote, quote_breakdown, round_currency};

#[test]
fn influencer_quote_matches_reference_offer() {
    let result = compute_quote(&influencer(options(true, false)));

    assert_eq!(result.base, 210.0);
    assert_eq!(result.surcharges, 21.0);
    assert_eq!(result.net, 231.0);
    assert_eq!(result.gross, 284.0);
}

#[test]
fn developer_quote_double_counts_react_and_next() {
    let result = compute_quote(&developer(options(false, false)));

    assert_eq!(result.base, 5760.0);
    assert_eq!(result.surcharges, 0.0);
    assert_eq!(result.net, 5760.0);
    assert_eq!(result.gross, 5760.0);
}

#[test]
fn developer_flat_costs_are_rounded_once() {
    let mut input = developer(options(false, false));
    if let QuoteInput::Developer { details, .. } = &mut input {
        details.travel_cost = 150.4;
        details.license_cost = 49.2;
    }

    let result = compute_quote(&input);

    assert_eq!(result.surcharges, 200.0);
    assert_eq!(result.net, 5960.0);
}

#[test]
fn social_media_manager_prices_monthly_posting_plan() {
    let result = compute_quote(&social_media_manager(options(false, false)));

    assert_eq!(result.base, 2400.0);
    assert_eq!(result.surcharges, 850.0);
    assert_eq!(result.net, 3250.0);
    assert_eq!(result.gross, 3250.0);
}

#[test]
fn graphic_designer_adds_revisions_and_license() {
    let result = compute_quote(&graphic_designer(options(true, false)));

    assert_eq!(result.base, 1875.0);
    assert_eq!(result.surcharges, 400.0);
    assert_eq!(result.net, 2275.0);
    assert_eq!(result.gross, 2798.0);
}

#[test]
fn other_role_passes_base_rate_through() {
    let result = compute_quote(&other(options(false, true)));

    assert_eq!(result.base, 999.0);
    assert_eq!(result.surcharges, 301.0);
    assert_eq!(result.net, 1300.0);
}

#[test]
fn influencer_bonuses_are_summed_before_rounding() {
    let input = QuoteInput::Influencer {
        details: InfluencerInput {
            followers: 25_000.0,
            engagement_pct: 3.0,
            formats: ContentFormats {
                post: true,
                carousel: true,
                story: true,
                reels: true,
                live: true,
                article: true,
            },
            exclusivity: true,
            license: true,
            cta: true,
        },
        options: options(false, false),
    };

    let result = compute_quote(&input);

    // 25 * 20 * 1.03 = 515; bonuses total 1.25
    assert_eq!(result.base, 515.0);
    assert_eq!(result.surcharges, round_currency(515.0 * 1.25));
    assert_eq!(result.net, 515.0 + 644.0);
}

#[test]
fn expedited_toggle_only_adds_the_premium() {
    for input in every_role(options(true, false)) {
        let mut expedited = input.clone();
        expedited.options_mut().is_expedited = true;

        let regular = compute_quote(&input);
        let rushed = compute_quote(&expedited);

        assert_eq!(rushed.base, regular.base, "{:?}", input.role());
        assert_eq!(
            rushed.surcharges - regular.surcharges,
            round_currency(regular.base * 0.20),
            "{:?}",
            input.role()
        );
    }
}

#[test]
fn vat_toggle_controls_gross() {
    for input in every_role(options(false, true)) {
        let mut taxed = input.clone();
        taxed.options_mut().apply_vat = true;

        let untaxed = compute_quote(&input);
        assert_eq!(untaxed.gross, untaxed.net);

        let taxed = compute_quote(&taxed);
        assert_eq!(taxed.net, untaxed.net);
        assert_eq!(taxed.gross, round_currency(taxed.net * 1.23));
    }
}

#[test]
fn totals_never_drop_below_base_for_valid_input() {
    for input in every_role(options(true, true)) {
        let result = compute_quote(&input);
        assert!(result.surcharges >= 0.0);
        assert!(result.net >= result.base);
        assert!(result.gross >= result.net);
    }
}

#[test]
fn quotes_are_deterministic() {
    for input in every_role(options(true, true)) {
        assert_eq!(compute_quote(&input), compute_quote(&input));
    }
}

#[test]
fn negative_inputs_propagate_without_panicking() {
    let input = QuoteInput::Influencer {
        details: InfluencerInput {
            followers: -10_000.0,
            engagement_pct: 5.0,
            formats: ContentFormats::default(),
            exclusivity: false,
            license: false,
            cta: false,
        },
        options: options(false, false),
    };

    let result = compute_quote(&input);

    assert_eq!(result.base, -210.0);
    assert_eq!(result.net, -210.0);
}

#[test]
fn non_finite_inputs_yield_nan_totals() {
    let mut input = other(options(true, false));
    if let QuoteInput::Other { details, .. } = &mut input {
        details.base_rate = f64::NAN;
    }

    let result = compute_quote(&input);

    assert!(result.base.is_nan());
    assert!(result.gross.is_nan());
}

#[test]
fn breakdown_lists_contributing_terms() {
    let breakdown = quote_breakdown(&influencer(options(true, true)));

    assert_eq!(breakdown.role, ProfessionalRole::Influencer);
    assert_eq!(breakdown.role_label, "Influencer");
    let kinds: Vec<LineItemKind> = breakdown.line_items.iter().map(|item| item.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineItemKind::Base,
            LineItemKind::Surcharge,
            LineItemKind::Expedited,
            LineItemKind::Vat,
        ]
    );
    let expedited = &breakdown.line_items[2];
    assert_eq!(expedited.amount, 42.0);
    let vat = &breakdown.line_items[3];
    assert_eq!(vat.amount, breakdown.result.gross - breakdown.result.net);
    assert!(breakdown.summary().starts_with("Influencer offer"));
}

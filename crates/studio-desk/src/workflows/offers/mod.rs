//! Offer pricing for the freelancer roles supported by the dashboard.
//!
//! `compute_quote` is a pure function over a role-specific form. Range checks
//! live in [`parse_quote_input`] so callers decide where the validation
//! boundary sits.

pub mod domain;
mod engine;
pub mod router;
mod rules;
mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Complexity, ContentFormats, DeveloperInput, GraphicDesignerInput, InfluencerInput,
    LineItemKind, OtherInput, ProfessionalRole, QuoteBreakdown, QuoteInput, QuoteLineItem,
    QuoteOptions, QuoteResult, SocialMediaManagerInput,
};
pub use engine::{compute_quote, quote_breakdown, EXPEDITED_RATE, VAT_MULTIPLIER};
pub use router::offer_router;
pub use rules::{round_currency, tech_stack_bonus};
pub use validation::{parse_quote_input, QuoteValidationError};

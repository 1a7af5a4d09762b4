use super::domain::QuoteInput;

/// Reasons a pricing form is refused before it reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuoteValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a percentage between 0 and 100 (got {value})")]
    PercentOutOfRange { field: &'static str, value: f64 },
}

/// Checks the numeric ranges the engine assumes and hands the input back untouched.
pub fn parse_quote_input(input: QuoteInput) -> Result<QuoteInput, QuoteValidationError> {
    match &input {
        QuoteInput::Influencer { details, .. } => {
            non_negative("followers", details.followers)?;
            percentage("engagement_pct", details.engagement_pct)?;
        }
        QuoteInput::Developer { details, .. } => {
            non_negative("hourly_rate", details.hourly_rate)?;
            non_negative("estimated_hours", details.estimated_hours)?;
            non_negative("travel_cost", details.travel_cost)?;
            non_negative("license_cost", details.license_cost)?;
        }
        QuoteInput::SocialMediaManager { details, .. } => {
            non_negative("channels", details.channels)?;
            non_negative("posts_per_week", details.posts_per_week)?;
            non_negative("community_hours", details.community_hours)?;
            non_negative("strategy_fee", details.strategy_fee)?;
        }
        QuoteInput::GraphicDesigner { details, .. } => {
            non_negative("base_price", details.base_price)?;
            non_negative("revisions", details.revisions)?;
        }
        QuoteInput::Other { details, .. } => {
            non_negative("base_rate", details.base_rate)?;
            non_negative("additional_cost", details.additional_cost)?;
        }
    }

    Ok(input)
}

fn non_negative(field: &'static str, value: f64) -> Result<(), QuoteValidationError> {
    if !value.is_finite() {
        return Err(QuoteValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(QuoteValidationError::Negative { field, value });
    }
    Ok(())
}

fn percentage(field: &'static str, value: f64) -> Result<(), QuoteValidationError> {
    non_negative(field, value)?;
    if value > 100.0 {
        return Err(QuoteValidationError::PercentOutOfRange { field, value });
    }
    Ok(())
}

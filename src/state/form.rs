// src/state/form.rs
use crate::api::{AnalyzeRequest, Platform};

/// Text-typed form fields, owned by the app state for the life of the
/// process. Numbers stay as typed until submit time.
#[derive(Debug)]
pub struct DealForm {
    pub platform: Platform,
    pub followers: String,
    pub engagement_rate: String,
    pub offer_amount: String,
}

impl Default for DealForm {
    fn default() -> Self {
        Self {
            platform: Platform::Instagram,
            followers: String::new(),
            engagement_rate: String::new(),
            offer_amount: String::new(),
        }
    }
}

impl DealForm {
    /// Followers and offer amount must be non-empty; engagement rate never
    /// is. Whitespace-only input counts as filled and coerces to 0 later.
    pub fn has_required_fields(&self) -> bool {
        !self.followers.is_empty() && !self.offer_amount.is_empty()
    }

    /// Coerce the text fields into a wire request. An unparsable engagement
    /// rate (and an explicit 0 or -0) collapses to 0; the other fields keep
    /// whatever the coercion yields, NaN included.
    pub fn to_request(&self) -> AnalyzeRequest {
        let engagement_rate = numeric_or_nan(&self.engagement_rate);
        AnalyzeRequest {
            platform: self.platform,
            followers: numeric_or_nan(&self.followers),
            engagement_rate: if engagement_rate == 0.0 || engagement_rate.is_nan() {
                0.0
            } else {
                engagement_rate
            },
            offer_amount: numeric_or_nan(&self.offer_amount),
        }
    }
}

// Number()-style coercion: empty or whitespace-only input is 0, non-numeric
// input is NaN.
fn numeric_or_nan(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

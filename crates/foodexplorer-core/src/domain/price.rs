//! Price parsing for the dish form
//!
//! The form accepts `1` to `3` integer digits, a comma, and exactly two
//! fraction digits (`12,99`). The backend receives a dot-decimal number.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DomainError;

static PRICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,3},[0-9]{2}$").expect("price pattern is a valid regex")
});

/// Validated form price, kept as integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price {
    cents: u32,
}

impl Price {
    pub fn is_valid(input: &str) -> bool {
        PRICE_PATTERN.is_match(input)
    }

    pub fn parse(input: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(input) {
            return Err(DomainError::InvalidPrice(input.to_string()));
        }

        let (units, fraction) = input
            .split_once(',')
            .ok_or_else(|| DomainError::InvalidPrice(input.to_string()))?;

        let units: u32 = units
            .parse()
            .map_err(|_| DomainError::InvalidPrice(input.to_string()))?;
        let fraction: u32 = fraction
            .parse()
            .map_err(|_| DomainError::InvalidPrice(input.to_string()))?;

        Ok(Self {
            cents: units * 100 + fraction,
        })
    }

    pub fn cents(&self) -> u32 {
        self.cents
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.cents) / 100.0
    }

    /// Dot-decimal form sent in the multipart `price` field.
    ///
    /// Matches a JavaScript number rendering: `12.99`, `5`, `10.5`.
    pub fn to_form_value(&self) -> String {
        self.as_f64().to_string()
    }
}

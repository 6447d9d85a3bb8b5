//! Locale-formatted price text with decimal parsing.
//!
//! Catalog prices are stored as the text shown to shoppers (e.g. `"1.250,50"`
//! or `"$ 2,99"`), not as numbers. [`Price`] keeps that text verbatim and
//! offers [`Price::amount`] for arithmetic such as cart subtotals.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog price as formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    /// Create a price from its display text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The price text exactly as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the text into a decimal amount.
    ///
    /// Currency symbols and whitespace are ignored, and a `-` anywhere before
    /// the first digit makes the amount negative. When both `.` and `,`
    /// appear, the one that occurs last is the decimal separator. When only
    /// one of them appears, a single occurrence is the decimal separator and
    /// repeated occurrences are thousands separators.
    ///
    /// Returns `None` if no number can be read.
    ///
    /// ```rust
    /// # use apa_core::Price;
    /// # use rust_decimal::Decimal;
    /// assert_eq!(Price::new("1.250,50").amount(), Some(Decimal::new(125_050, 2)));
    /// assert_eq!(Price::new("$ 2,99").amount(), Some(Decimal::new(299, 2)));
    /// assert_eq!(Price::new("gratis").amount(), None);
    /// ```
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        let negative = self
            .0
            .chars()
            .take_while(|c| !c.is_ascii_digit())
            .any(|c| c == '-');
        let cleaned: String = self
            .0
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
            .collect();

        if !cleaned.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        let normalized = normalize_separators(&cleaned);
        let amount = Decimal::from_str(&normalized).ok()?;
        Some(if negative { -amount } else { amount })
    }
}

/// Rewrite `cleaned` (digits, `.` and `,` only) with `.` as the sole
/// decimal separator and no grouping.
fn normalize_separators(cleaned: &str) -> String {
    let last_dot = cleaned.rfind('.');
    let last_comma = cleaned.rfind(',');

    let decimal_sep = match (last_dot, last_comma) {
        (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
        (Some(_), None) if cleaned.matches('.').count() == 1 => Some('.'),
        (None, Some(_)) if cleaned.matches(',').count() == 1 => Some(','),
        _ => None,
    };

    cleaned
        .chars()
        .filter_map(|c| match c {
            '.' | ',' if Some(c) == decimal_sep => Some('.'),
            '.' | ',' => None,
            digit => Some(digit),
        })
        .collect()
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Price {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Price {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

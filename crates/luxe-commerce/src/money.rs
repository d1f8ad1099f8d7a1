//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency of an amount. The storefront prices everything in US dollars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a USD amount from whole dollars.
    ///
    /// Overflows for amounts past `i64::MAX / 100`; use [`Money::try_usd`] for
    /// untrusted input.
    ///
    /// ```
    /// use luxe_commerce::money::Money;
    /// assert_eq!(Money::usd(450).amount_cents, 45000);
    /// ```
    pub const fn usd(dollars: i64) -> Self {
        Self::new(dollars * 100, Currency::USD)
    }

    /// Checked [`Money::usd`], `None` if the amount does not fit in cents.
    pub fn try_usd(dollars: i64) -> Option<Self> {
        dollars
            .checked_mul(100)
            .map(|cents| Self::new(cents, Currency::USD))
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    fn sign(&self) -> &'static str {
        if self.amount_cents < 0 {
            "-"
        } else {
            ""
        }
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let cents = self.amount_cents.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            self.sign(),
            self.currency.symbol(),
            cents / 100,
            cents % 100
        )
    }

    /// Format without cents when the amount is whole (e.g., "$450").
    pub fn display_short(&self) -> String {
        if self.amount_cents % 100 == 0 {
            format!(
                "{}{}{}",
                self.sign(),
                self.currency.symbol(),
                self.amount_cents.unsigned_abs() / 100
            )
        } else {
            self.display()
        }
    }

    /// Try to add another Money value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

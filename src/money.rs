// Fixed-point monetary amounts. All price arithmetic in the service goes
// through this type so budget comparisons are exact integer operations.

use std::fmt;

/// Currency tag for a monetary amount. Only USD is supported; the partner
/// feed quotes everything in USD per night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Currency {
    Usd,
}

impl Currency {
    /// ISO 4217 code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary amount in minor units (cents for USD).
///
/// Amounts order by value; with a single supported currency the derived
/// ordering never compares across currencies. Never convert through floating
/// point when working with these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Multiply by an integer count, e.g. price-per-night times nights.
    /// The count may be non-positive; the sign carries through.
    pub fn multiply(self, count: i64) -> Money {
        Money {
            amount: self.amount * count,
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

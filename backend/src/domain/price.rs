//! Prices held in minor currency units.
//!
//! Every monetary amount in the system is an integer number of minor units
//! (paisa); 100 minor units make one rupee. Only the display helpers divide.

use std::fmt;

/// Minor units per displayed currency unit.
pub const MINOR_UNITS_PER_RUPEE: i64 = 100;

/// Validation errors raised by [`Price::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PriceValidationError {
    /// Prices and totals cannot be negative.
    #[error("amount must not be negative (got {value})")]
    Negative {
        /// Rejected amount in minor units.
        value: i64,
    },
}

/// Non-negative amount in minor currency units.
///
/// # Examples
/// ```
/// use bullburger::domain::Price;
///
/// let price = Price::new(219_700).expect("non-negative");
/// assert_eq!(price.minor_units(), 219_700);
/// assert_eq!(price.display(), "Rs. 2197");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    /// Validate and wrap an amount in minor units.
    pub fn new(minor_units: i64) -> Result<Self, PriceValidationError> {
        if minor_units < 0 {
            return Err(PriceValidationError::Negative { value: minor_units });
        }
        Ok(Self(minor_units))
    }

    /// Raw amount in minor units.
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Human-readable rendering, e.g. `Rs. 899`.
    pub fn display(self) -> String {
        format_price(self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_price(self.0))
    }
}

impl TryFrom<i64> for Price {
    type Error = PriceValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for i64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Render an amount of minor units as whole rupees, rounding halves away
/// from zero.
///
/// # Examples
/// ```
/// use bullburger::domain::format_price;
///
/// assert_eq!(format_price(89_900), "Rs. 899");
/// assert_eq!(format_price(89_950), "Rs. 900");
/// ```
pub fn format_price(minor_units: i64) -> String {
    let half = MINOR_UNITS_PER_RUPEE / 2;
    let adjusted = if minor_units >= 0 {
        minor_units.saturating_add(half)
    } else {
        minor_units.saturating_sub(half)
    };
    format!("Rs. {}", adjusted / MINOR_UNITS_PER_RUPEE)
}

//! Customer-facing order numbers.
//!
//! Numbers are `BB` followed by nine characters from `0-9A-Z`. Generation is
//! random and does not consult the store, so two orders can in principle draw
//! the same number (36^9 possibilities); the durable store's unique index
//! rejects such an insert.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

/// Fixed prefix of every order number.
pub const ORDER_NUMBER_PREFIX: &str = "BB";
/// Count of random characters after the prefix.
pub const ORDER_NUMBER_SUFFIX_LEN: usize = 9;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Rejection reasons for [`OrderNumber::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderNumberError {
    #[error("order number must start with {ORDER_NUMBER_PREFIX}")]
    MissingPrefix,
    #[error("order number must have {ORDER_NUMBER_SUFFIX_LEN} characters after the prefix")]
    WrongLength,
    #[error("order number may only contain A-Z and 0-9")]
    InvalidCharacter,
}

/// Externally shown order identifier, immutable once assigned.
///
/// # Examples
/// ```
/// use bullburger::domain::OrderNumber;
///
/// let number = OrderNumber::parse("BB1A2B3C4D5").expect("well formed");
/// assert_eq!(number.as_str(), "BB1A2B3C4D5");
/// assert!(OrderNumber::parse("bb1a2b3c4d5").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Draw a fresh number from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut value = String::with_capacity(ORDER_NUMBER_PREFIX.len() + ORDER_NUMBER_SUFFIX_LEN);
        value.push_str(ORDER_NUMBER_PREFIX);
        for _ in 0..ORDER_NUMBER_SUFFIX_LEN {
            let byte = ALPHABET.choose(rng).copied().unwrap_or(b'0');
            value.push(char::from(byte));
        }
        Self(value)
    }

    /// Validate an order number supplied by a client or read from storage.
    pub fn parse(value: &str) -> Result<Self, OrderNumberError> {
        let suffix = value
            .strip_prefix(ORDER_NUMBER_PREFIX)
            .ok_or(OrderNumberError::MissingPrefix)?;
        if suffix.len() != ORDER_NUMBER_SUFFIX_LEN {
            return Err(OrderNumberError::WrongLength);
        }
        if !suffix
            .bytes()
            .all(|byte| byte.is_ascii_uppercase() || byte.is_ascii_digit())
        {
            return Err(OrderNumberError::InvalidCharacter);
        }
        Ok(Self(value.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrderNumber {
    type Err = OrderNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for OrderNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

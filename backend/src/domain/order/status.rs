//! The fixed delivery pipeline an order moves through.

use std::fmt;
use std::str::FromStr;

/// Position of an order in the delivery pipeline.
///
/// The set of values is closed. Progress is linear
/// (`confirmed → preparing → out_for_delivery → delivered`) but updates are
/// not forced to follow it: any status may overwrite any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum OrderStatus {
    #[default]
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Every status in pipeline order.
    pub const ALL: [Self; 4] = [
        Self::Confirmed,
        Self::Preparing,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    /// Wire spelling, e.g. `out_for_delivery`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
        }
    }

    /// Zero-based index in [`Self::ALL`].
    pub const fn position(self) -> usize {
        match self {
            Self::Confirmed => 0,
            Self::Preparing => 1,
            Self::OutForDelivery => 2,
            Self::Delivered => 3,
        }
    }

    /// The following pipeline stage; `None` once delivered.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Confirmed => Some(Self::Preparing),
            Self::Preparing => Some(Self::OutForDelivery),
            Self::OutForDelivery => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Customer-facing step title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Order Confirmed",
            Self::Preparing => "Preparing",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
        }
    }

    /// Customer-facing step explanation.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Confirmed => "Your order has been received and confirmed",
            Self::Preparing => "Our chefs are preparing your delicious meal",
            Self::OutForDelivery => "Your order is on its way to you",
            Self::Delivered => "Order delivered successfully",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string does not name one of the four statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("status must be one of: confirmed, preparing, out_for_delivery, delivered (got {value:?})")]
pub struct ParseOrderStatusError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseOrderStatusError {
                value: s.to_owned(),
            })
    }
}

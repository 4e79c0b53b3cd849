//! Orders, their items and the status lifecycle.
//!
//! An [`Order`] is created once from a validated [`NewOrder`] and afterwards
//! changes only through [`Order::apply_status`]. `updated_at` never moves
//! backwards and never precedes `created_at`.

mod number;
mod progress;
mod status;

pub use number::{ORDER_NUMBER_PREFIX, ORDER_NUMBER_SUFFIX_LEN, OrderNumber, OrderNumberError};
pub use progress::{OrderProgress, ProgressStep, StepState, step_state};
pub use status::{OrderStatus, ParseOrderStatusError};

use chrono::{DateTime, TimeDelta, Utc};

use super::Price;
use super::validation::{FieldViolation, ValidationErrors, ViolationCode, Violations};

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    name: String,
    quantity: u32,
    price: Price,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: Price) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price in minor units.
    pub fn price(&self) -> Price {
        self.price
    }
}

/// Untrusted order line as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderItemDraft {
    pub name: Option<String>,
    /// Defaults to 1 when omitted.
    pub quantity: Option<i64>,
    pub price: Option<i64>,
}

/// Validated order awaiting an identifier, number and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_name: String,
    pub total: Price,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

/// Untrusted order input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_name: Option<String>,
    pub total: Option<i64>,
    /// Initial status; `confirmed` when omitted.
    pub status: Option<String>,
    /// Empty when omitted.
    pub items: Option<Vec<OrderItemDraft>>,
}

/// Check a raw status string against the closed status set, recording a
/// violation for `field` when it is unknown.
pub(crate) fn parse_status(
    violations: &mut Violations,
    field: &str,
    raw: &str,
) -> Option<OrderStatus> {
    match raw.parse::<OrderStatus>() {
        Ok(status) => Some(status),
        Err(err) => {
            violations.push(FieldViolation::new(
                field,
                ViolationCode::InvalidStatus,
                err.to_string(),
            ));
            None
        }
    }
}

/// Validate a raw status supplied on its own, as in a status update.
pub fn validate_status(raw: Option<&str>) -> Result<OrderStatus, ValidationErrors> {
    let mut violations = Violations::default();
    let status = match raw {
        None => {
            violations.push(FieldViolation::missing("status"));
            None
        }
        Some(value) if value.trim().is_empty() => {
            violations.push(FieldViolation::blank("status"));
            None
        }
        Some(value) => parse_status(&mut violations, "status", value),
    };
    violations.finish(|| status)
}

fn validate_item(
    violations: &mut Violations,
    index: usize,
    draft: OrderItemDraft,
) -> Option<OrderItem> {
    let name = violations.require_text(&format!("items[{index}].name"), draft.name);
    let quantity_field = format!("items[{index}].quantity");
    let quantity = match draft.quantity {
        None => Some(1),
        Some(raw) => match u32::try_from(raw) {
            Ok(quantity) if quantity >= 1 => Some(quantity),
            _ => {
                let message = format!("{quantity_field} must be at least 1 (got {raw})");
                violations.push(FieldViolation::new(
                    quantity_field,
                    ViolationCode::InvalidQuantity,
                    message,
                ));
                None
            }
        },
    };
    let price = violations.require_price(&format!("items[{index}].price"), draft.price);
    Some(OrderItem::new(name?, quantity?, price?))
}

impl TryFrom<OrderDraft> for NewOrder {
    type Error = ValidationErrors;

    fn try_from(draft: OrderDraft) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();
        let customer_name = violations.require_text("customerName", draft.customer_name);
        let total = violations.require_price("total", draft.total);
        let status = match draft.status {
            None => Some(OrderStatus::default()),
            Some(raw) => parse_status(&mut violations, "status", &raw),
        };
        let items: Vec<Option<OrderItem>> = draft
            .items
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, item)| validate_item(&mut violations, index, item))
            .collect();

        violations.finish(|| {
            Some(Self {
                customer_name: customer_name?,
                total: total?,
                status: status?,
                items: items.into_iter().collect::<Option<Vec<_>>>()?,
            })
        })
    }
}

/// Raised when stored order parts break the timestamp invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderValidationError {
    #[error("updated_at must not precede created_at")]
    UpdatedBeforeCreated,
}

/// Every field of a stored order, used to rebuild an [`Order`] from storage.
#[derive(Debug, Clone)]
pub struct OrderParts {
    pub id: i64,
    pub order_number: OrderNumber,
    pub customer_name: String,
    pub total: Price,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: i64,
    order_number: OrderNumber,
    customer_name: String,
    total: Price,
    status: OrderStatus,
    items: Vec<OrderItem>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// A freshly placed order: both timestamps equal `now`.
    pub fn create(id: i64, order_number: OrderNumber, order: NewOrder, now: DateTime<Utc>) -> Self {
        Self {
            id,
            order_number,
            customer_name: order.customer_name,
            total: order.total,
            status: order.status,
            items: order.items,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a stored order, checking the timestamp invariant.
    pub fn from_parts(parts: OrderParts) -> Result<Self, OrderValidationError> {
        if parts.updated_at < parts.created_at {
            return Err(OrderValidationError::UpdatedBeforeCreated);
        }
        Ok(Self {
            id: parts.id,
            order_number: parts.order_number,
            customer_name: parts.customer_name,
            total: parts.total,
            status: parts.status,
            items: parts.items,
            created_at: parts.created_at,
            updated_at: parts.updated_at,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn total(&self) -> Price {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Tracker view of the current status.
    pub fn progress(&self) -> OrderProgress {
        OrderProgress::for_known(self.status)
    }

    /// Overwrite the status and advance `updated_at`.
    pub fn apply_status(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = next_updated_at(self.updated_at, now);
    }
}

/// Timestamp for an update happening at `now` to a record last touched at
/// `previous`; strictly later than `previous` even when the clock has not
/// advanced.
pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}

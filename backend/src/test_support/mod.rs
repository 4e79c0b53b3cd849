//! Shared fixtures for unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled for tests and behind the `test-support` feature.

mod clock;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ports::{MenuCommand, RandomOrderNumberGenerator};
use crate::domain::{ContactService, Error, MenuService, OrderService};
use crate::inbound::http::state::HttpStatePorts;
use crate::outbound::memory::{
    InMemoryContactRepository, InMemoryMenuRepository, InMemoryOrderRepository,
};

pub use clock::MutableClock;

/// 2025-06-01T18:30:00Z, the instant every fixed clock starts at.
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 18, 30, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// A clock frozen at [`fixed_instant`] until advanced.
pub fn fixed_clock() -> Arc<MutableClock> {
    Arc::new(MutableClock::new(fixed_instant()))
}

/// Handler ports backed by fresh in-memory stores, with the default menu
/// already seeded.
///
/// # Errors
/// Propagates a failure to seed the menu.
pub async fn in_memory_ports(clock: Arc<dyn Clock>) -> Result<HttpStatePorts, Error> {
    let menu = Arc::new(MenuService::new(Arc::new(InMemoryMenuRepository::new())));
    menu.seed_default_menu().await?;
    let orders = Arc::new(OrderService::new(
        Arc::new(InMemoryOrderRepository::new()),
        Arc::new(RandomOrderNumberGenerator),
        Arc::clone(&clock),
    ));
    let contact = Arc::new(ContactService::new(
        Arc::new(InMemoryContactRepository::new()),
        clock,
    ));
    Ok(HttpStatePorts {
        menu,
        orders: orders.clone(),
        orders_query: orders,
        contact,
    })
}

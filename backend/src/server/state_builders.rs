//! Builders wiring repository adapters into the HTTP state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::info;

use bullburger::domain::ports::{
    ContactRepository, MenuCommand, MenuRepository, OrderRepository, RandomOrderNumberGenerator,
};
use bullburger::domain::{ContactService, Error, MenuService, OrderService};
use bullburger::inbound::http::state::{HttpState, HttpStatePorts};
use bullburger::outbound::memory::{
    InMemoryContactRepository, InMemoryMenuRepository, InMemoryOrderRepository,
};
use bullburger::outbound::persistence::{
    DbPool, DieselContactRepository, DieselMenuRepository, DieselOrderRepository,
};

use super::ServerConfig;

/// Wrap one repository per port in its service and bundle the driving ports.
///
/// Seeding runs before the state is handed out so the first request sees the
/// full catalogue.
async fn build_ports<M, O, C>(
    menu_repo: M,
    order_repo: O,
    contact_repo: C,
    clock: Arc<dyn Clock>,
    seed_menu: bool,
) -> Result<HttpStatePorts, Error>
where
    M: MenuRepository + 'static,
    O: OrderRepository + 'static,
    C: ContactRepository + 'static,
{
    let menu = Arc::new(MenuService::new(Arc::new(menu_repo)));
    if seed_menu {
        let inserted = menu.seed_default_menu().await?;
        info!(inserted, "menu seeding finished");
    }
    let orders = Arc::new(OrderService::new(
        Arc::new(order_repo),
        Arc::new(RandomOrderNumberGenerator),
        Arc::clone(&clock),
    ));
    let contact = Arc::new(ContactService::new(Arc::new(contact_repo), clock));
    Ok(HttpStatePorts {
        menu,
        orders: orders.clone(),
        orders_query: orders,
        contact,
    })
}

async fn durable_ports(pool: &DbPool, seed_menu: bool) -> Result<HttpStatePorts, Error> {
    info!("using PostgreSQL store");
    build_ports(
        DieselMenuRepository::new(pool.clone()),
        DieselOrderRepository::new(pool.clone()),
        DieselContactRepository::new(pool.clone()),
        Arc::new(DefaultClock),
        seed_menu,
    )
    .await
}

async fn volatile_ports() -> Result<HttpStatePorts, Error> {
    info!("using in-memory store; data is lost on restart");
    build_ports(
        InMemoryMenuRepository::new(),
        InMemoryOrderRepository::new(),
        InMemoryContactRepository::new(),
        Arc::new(DefaultClock),
        true,
    )
    .await
}

/// Build the handler state for `config`.
///
/// # Errors
/// Returns the domain error raised while seeding the menu.
pub(crate) async fn build_http_state(config: &ServerConfig) -> Result<HttpState, Error> {
    let ports = match &config.db_pool {
        Some(pool) => durable_ports(pool, config.seed_menu).await?,
        None => volatile_ports().await?,
    };
    Ok(HttpState::new(ports))
}

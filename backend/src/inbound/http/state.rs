//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactCommand, MenuQuery, OrderCommand, OrderQuery};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub menu: Arc<dyn MenuQuery>,
    pub orders: Arc<dyn OrderCommand>,
    pub orders_query: Arc<dyn OrderQuery>,
    pub contact: Arc<dyn ContactCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub menu: Arc<dyn MenuQuery>,
    pub orders: Arc<dyn OrderCommand>,
    pub orders_query: Arc<dyn OrderQuery>,
    pub contact: Arc<dyn ContactCommand>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bullburger::domain::ports::RandomOrderNumberGenerator;
    /// use bullburger::domain::{ContactService, MenuService, OrderService};
    /// use bullburger::inbound::http::state::{HttpState, HttpStatePorts};
    /// use bullburger::outbound::memory::{
    ///     InMemoryContactRepository, InMemoryMenuRepository, InMemoryOrderRepository,
    /// };
    /// use mockable::DefaultClock;
    ///
    /// let orders = Arc::new(OrderService::new(
    ///     Arc::new(InMemoryOrderRepository::new()),
    ///     Arc::new(RandomOrderNumberGenerator),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(HttpStatePorts {
    ///     menu: Arc::new(MenuService::new(Arc::new(InMemoryMenuRepository::new()))),
    ///     orders: orders.clone(),
    ///     orders_query: orders,
    ///     contact: Arc::new(ContactService::new(
    ///         Arc::new(InMemoryContactRepository::new()),
    ///         Arc::new(DefaultClock),
    ///     )),
    /// });
    /// let _menu = state.menu.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            menu,
            orders,
            orders_query,
            contact,
        } = ports;
        Self {
            menu,
            orders,
            orders_query,
            contact,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

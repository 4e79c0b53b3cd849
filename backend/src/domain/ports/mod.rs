//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`OrderNumberGenerator`]) describe what the
//! domain needs from storage. Driving ports (`*Query`, `*Command`) are the
//! use-cases inbound adapters call. Repository errors are typed enums so
//! services can tell an unreachable store from a failed query.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_command;
mod contact_repository;
mod menu_command;
mod menu_query;
mod menu_repository;
mod order_command;
mod order_number_generator;
mod order_query;
mod order_repository;

pub use contact_command::ContactCommand;
#[cfg(test)]
pub use contact_command::MockContactCommand;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use menu_command::MenuCommand;
#[cfg(test)]
pub use menu_command::MockMenuCommand;
pub use menu_query::MenuQuery;
#[cfg(test)]
pub use menu_query::MockMenuQuery;
pub use menu_repository::{MenuRepository, MenuRepositoryError};
#[cfg(test)]
pub use menu_repository::MockMenuRepository;
pub use order_command::OrderCommand;
#[cfg(test)]
pub use order_command::MockOrderCommand;
#[cfg(test)]
pub use order_number_generator::MockOrderNumberGenerator;
pub use order_number_generator::{OrderNumberGenerator, RandomOrderNumberGenerator};
#[cfg(test)]
pub use order_query::MockOrderQuery;
pub use order_query::OrderQuery;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderRepository, OrderRepositoryError};

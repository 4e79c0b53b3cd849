//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between row structs (`models.rs`) and domain
//! types and nothing more. Connections come from a `bb8` pool through
//! `diesel-async`; every database failure is mapped to the owning port's
//! error enum.
//!
//! # Example
//!
//! ```no_run
//! use bullburger::outbound::persistence::{DbPool, DieselOrderRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/bullburger")).await?;
//! let orders = DieselOrderRepository::new(pool);
//! # let _ = orders;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_contact_repository;
mod diesel_menu_repository;
mod diesel_order_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use diesel_menu_repository::DieselMenuRepository;
pub use diesel_order_repository::DieselOrderRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_POOL_MAX_SIZE, DbPool, PoolConfig, PoolError};

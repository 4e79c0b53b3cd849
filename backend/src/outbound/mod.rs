//! Outbound adapters implementing the domain's repository ports.
//!
//! - **memory**: volatile in-process stores, the default.
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//!
//! Both satisfy the same port contracts; callers cannot tell them apart.
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;

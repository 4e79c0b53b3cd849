//! In-process adapters for every repository port.
//!
//! State lives for the lifetime of the process only. Identifiers come from
//! atomic counters starting at 1. Locks are never held across an `.await`.

mod contacts;
mod menu;
mod orders;

pub use contacts::InMemoryContactRepository;
pub use menu::InMemoryMenuRepository;
pub use orders::InMemoryOrderRepository;

use std::sync::atomic::{AtomicI64, Ordering};

/// Monotonic identifier source shared by the in-memory stores.
#[derive(Debug)]
struct IdSequence(AtomicI64);

impl Default for IdSequence {
    fn default() -> Self {
        Self(AtomicI64::new(1))
    }
}

impl IdSequence {
    fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

const POISONED: &str = "in-memory store lock poisoned";

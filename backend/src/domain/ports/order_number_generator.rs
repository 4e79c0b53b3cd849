//! Source of fresh order numbers.

use crate::domain::OrderNumber;

/// Produces order numbers for newly placed orders.
///
/// Implementations are not required to check the store for collisions.
#[cfg_attr(test, mockall::automock)]
pub trait OrderNumberGenerator: Send + Sync {
    fn next_number(&self) -> OrderNumber;
}

/// Draws numbers from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOrderNumberGenerator;

impl OrderNumberGenerator for RandomOrderNumberGenerator {
    fn next_number(&self) -> OrderNumber {
        OrderNumber::generate(&mut rand::thread_rng())
    }
}

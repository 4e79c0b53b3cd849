//! Per-step progress derived from an order's current status.
//!
//! Nothing here is stored; the tracker view recomputes it on every read.

use super::OrderStatus;

/// Display state of one pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

impl StepState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Active => "active",
            Self::Pending => "pending",
        }
    }
}

/// State of `step` when the order currently sits at `current`.
///
/// An unknown current status (`None`) leaves every step pending.
pub fn step_state(step: OrderStatus, current: Option<OrderStatus>) -> StepState {
    let Some(current) = current else {
        return StepState::Pending;
    };
    match step.position().cmp(&current.position()) {
        std::cmp::Ordering::Less => StepState::Completed,
        std::cmp::Ordering::Equal => StepState::Active,
        std::cmp::Ordering::Greater => StepState::Pending,
    }
}

/// One row of the order tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub status: OrderStatus,
    pub state: StepState,
}

/// All four pipeline steps with their derived states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderProgress {
    current: Option<OrderStatus>,
    steps: Vec<ProgressStep>,
}

impl OrderProgress {
    /// Progress for an order at a known status.
    pub fn for_known(current: OrderStatus) -> Self {
        Self::build(Some(current))
    }

    /// Progress for a raw status string; unrecognised values mark every
    /// step pending.
    ///
    /// # Examples
    /// ```
    /// use bullburger::domain::{OrderProgress, StepState};
    ///
    /// let progress = OrderProgress::for_status("cancelled");
    /// assert!(progress.steps().iter().all(|step| step.state == StepState::Pending));
    /// ```
    pub fn for_status(raw: &str) -> Self {
        Self::build(raw.parse().ok())
    }

    fn build(current: Option<OrderStatus>) -> Self {
        let steps = OrderStatus::ALL
            .into_iter()
            .map(|status| ProgressStep {
                status,
                state: step_state(status, current),
            })
            .collect();
        Self { current, steps }
    }

    /// The recognised current status, if any.
    pub fn current(&self) -> Option<OrderStatus> {
        self.current
    }

    pub fn steps(&self) -> &[ProgressStep] {
        &self.steps
    }

    /// State of a single step.
    pub fn state_of(&self, status: OrderStatus) -> StepState {
        step_state(status, self.current)
    }
}

use crate::utils::error::{DomainError, Result};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;

/// Placeholder latency for the async path; not a timing contract.
const SIMULATED_LATENCY: Duration = Duration::from_millis(300);

/// Callback invoked with the quotient of every completed division.
pub type DivisionObserver = Arc<dyn Fn(Decimal) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Exact decimal division with observer notification. Quotients are computed
/// in 96-bit decimal arithmetic (28 significant digits, round-half-even), so
/// `1/3` yields the full repeating expansion rather than a binary-float
/// approximation.
pub struct DivisionService {
    observers: Vec<(SubscriptionId, DivisionObserver)>,
    next_id: u64,
}

impl DivisionService {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers `observer` for all subsequent divisions. Observers subscribed
    /// during or after a `divide` call are not invoked for that call.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(Decimal) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Arc::new(observer)));
        id
    }

    /// Removes a previously registered observer. Returns false when the id is
    /// unknown or already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub_id, _)| *sub_id != id);
        self.observers.len() != before
    }

    /// Divides `dividend` by `divisor`, notifying every subscribed observer
    /// with the quotient before returning it. A zero divisor fails with
    /// `DomainError::DivisionByZero` and emits no notification.
    pub fn divide(&self, dividend: Decimal, divisor: Decimal) -> Result<Decimal> {
        if divisor.is_zero() {
            return Err(DomainError::DivisionByZero);
        }

        let quotient = dividend / divisor;
        tracing::debug!(%dividend, %divisor, %quotient, "division completed");
        self.notify(quotient);

        Ok(quotient)
    }

    /// Same contract as `divide`, behind a non-blocking suspension point that
    /// simulates latency.
    pub async fn divide_async(&self, dividend: Decimal, divisor: Decimal) -> Result<Decimal> {
        tokio::time::sleep(SIMULATED_LATENCY).await;
        self.divide(dividend, divisor)
    }

    fn notify(&self, quotient: Decimal) {
        // Snapshot so observer callbacks never race list mutation.
        let snapshot: Vec<DivisionObserver> = self
            .observers
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in snapshot {
            observer(quotient);
        }
    }
}

impl Default for DivisionService {
    fn default() -> Self {
        Self::new()
    }
}

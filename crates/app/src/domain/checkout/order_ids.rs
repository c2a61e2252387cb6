//! Order identifiers
//!
//! Orders are identified as `ORD-<unix epoch milliseconds>`. Two checkouts in the
//! same millisecond would collide, so the generator hands out strictly increasing
//! values: each id is the later of "now" and one past the previous id.

use std::{
    fmt,
    sync::atomic::{AtomicI64, Ordering},
};

use jiff::Timestamp;

const ORDER_ID_PREFIX: &str = "ORD-";

/// Shared by every checkout service in the process.
pub static ORDER_IDS: OrderIdGenerator = OrderIdGenerator::new();

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(i64);

impl OrderId {
    #[must_use]
    pub fn millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ORDER_ID_PREFIX}{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct OrderIdGenerator {
    last: AtomicI64,
}

impl OrderIdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Allocate the next order id for a checkout happening at `now`.
    pub fn next_at(&self, now: Timestamp) -> OrderId {
        let millis = now.as_millisecond();

        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(millis.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);

        OrderId(millis.max(previous.saturating_add(1)))
    }
}

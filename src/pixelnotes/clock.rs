use chrono::{DateTime, Utc};

/// Time source for note timestamps.
///
/// Abstracted behind a trait for the same reason storage is: tests set
/// the clock explicitly instead of sleeping between writes.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall clock used by the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::cell::Cell;

    /// Clock that starts at a fixed millisecond instant and only moves
    /// when told to.
    #[derive(Debug)]
    pub struct ManualClock {
        millis: Cell<i64>,
    }

    impl ManualClock {
        pub fn starting_at(millis: i64) -> Self {
            Self {
                millis: Cell::new(millis),
            }
        }

        pub fn advance_millis(&self, by: i64) {
            self.millis.set(self.millis.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp_millis(self.millis.get()).expect("valid test timestamp")
        }
    }
}

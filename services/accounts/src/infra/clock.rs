use chrono::{DateTime, Utc};

use crate::domain::repository::Clock;

/// Production clock backed by system time.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

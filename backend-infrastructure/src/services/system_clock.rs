use chrono::{DateTime, Utc};

use backend_domain::ports::Clock;

/// Wall-clock time source for production wiring.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

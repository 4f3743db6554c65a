use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{self, Display};

/// Time left until the drop, as shown on the countdown banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Whole units remaining from `now` to `launch`. Zero once the launch has passed.
    pub fn until(launch: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = (launch - now).num_seconds().max(0);
        Self {
            days: remaining / 86_400,
            hours: remaining / 3_600 % 24,
            minutes: remaining / 60 % 60,
            seconds: remaining % 60,
        }
    }

    pub fn is_elapsed(&self) -> bool {
        *self == Self::default()
    }
}

impl Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

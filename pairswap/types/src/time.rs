use {
    serde::{Deserialize, Serialize},
    std::ops::{Add, AddAssign},
};

/// The number of seconds in a minute.
const SECONDS_PER_MINUTE: u64 = 60;
/// The number of minutes in an hour.
const MINUTES_PER_HOUR: u64 = 60;
/// The number of hours in a day.
const HOURS_PER_DAY: u64 = 24;

/// UNIX epoch timestamp, in second precision.
///
/// A timestamp is simply a duration between a point of time and the UNIX epoch,
/// so here we define timestamp simply as an alias to [`Duration`](crate::Duration).
pub type Timestamp = Duration;

/// A span of time, in second precision.
///
/// Serialized to JSON as an integer number of seconds, instead of the
/// `{"secs":..,"nanos":..}` struct that `std::time::Duration` would produce.
#[derive(
    Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Duration(u64);

impl Duration {
    pub const SECONDS_PER_DAY: u64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR * HOURS_PER_DAY;
    pub const ZERO: Self = Self(0);

    pub const fn from_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    pub const fn from_minutes(minutes: u64) -> Self {
        Self::from_seconds(minutes * SECONDS_PER_MINUTE)
    }

    pub const fn from_hours(hours: u64) -> Self {
        Self::from_minutes(hours * MINUTES_PER_HOUR)
    }

    pub const fn from_days(days: u64) -> Self {
        Self::from_hours(days * HOURS_PER_DAY)
    }

    pub const fn into_seconds(self) -> u64 {
        self.0
    }

    /// The span from `earlier` until `self`, or zero if `earlier` is in fact
    /// later than `self`.
    pub const fn saturating_since(self, earlier: Self) -> Self {
        Self(self.0.saturating_sub(earlier.0))
    }
}

// Saturates at the end of time instead of overflowing.
impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units() {
        assert_eq!(Duration::from_days(1).into_seconds(), 86_400);
        assert_eq!(Duration::from_hours(2), Duration::from_minutes(120));
        assert_eq!(
            Duration::from_seconds(10).saturating_since(Duration::from_seconds(25)),
            Duration::ZERO
        );
    }

    #[test]
    fn addition_saturates() {
        let mut time = Duration::from_seconds(u64::MAX - 1);
        time += Duration::from_days(1);
        assert_eq!(time, Duration::from_seconds(u64::MAX));
        assert_eq!(
            Duration::from_seconds(u64::MAX) + Duration::from_seconds(1),
            Duration::from_seconds(u64::MAX)
        );
        assert_eq!(
            Duration::from_hours(1) + Duration::from_minutes(30),
            Duration::from_minutes(90)
        );
    }
}

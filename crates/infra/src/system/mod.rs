use chrono::{Datelike, Local, Timelike, Utc};
use sanjeevni_domain::TimeOfDay;

/// One local wall-clock minute. `day` disambiguates the same
/// minute-of-day across days so that fired-state can be keyed per
/// occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalMinute {
    /// Day ordinal of the local calendar date
    pub day: i64,
    pub time: TimeOfDay,
}

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
    /// The current local wall-clock sample at minute granularity
    fn local_minute(&self) -> LocalMinute;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn local_minute(&self) -> LocalMinute {
        let now = Local::now();
        let time = TimeOfDay::from_hm(now.hour() as u16, now.minute() as u16)
            .expect("a chrono clock sample to be a valid time of day");
        LocalMinute {
            day: now.date_naive().num_days_from_ce() as i64,
            time,
        }
    }
}

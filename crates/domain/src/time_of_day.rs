use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A clock time with minute granularity, stored canonically as
/// minute-of-day (0-1439). The 12-hour display format ("8:00 AM")
/// only exists at the API boundary, never in matching logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

#[derive(Error, Debug, PartialEq)]
pub enum InvalidTimeOfDayError {
    #[error("Minute of day: {0} is outside of the range 0-1439")]
    OutOfRange(u32),
    #[error("Time: `{0}` is not a valid 12-hour clock time")]
    Malformed(String),
}

impl TimeOfDay {
    pub fn new(minute_of_day: u16) -> Result<Self, InvalidTimeOfDayError> {
        if minute_of_day >= MINUTES_PER_DAY {
            return Err(InvalidTimeOfDayError::OutOfRange(minute_of_day as u32));
        }
        Ok(Self(minute_of_day))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, InvalidTimeOfDayError> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTimeOfDayError::OutOfRange(
                (hour as u32) * 60 + minute as u32,
            ));
        }
        Ok(Self(hour * 60 + minute))
    }

    pub fn minute_of_day(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hour = self.hour();
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:{:02} {}", display_hour, self.minute(), meridiem)
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDayError;

    /// Parses the 12-hour UI format, e.g. "8:00 AM" or "12:30 pm".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidTimeOfDayError::Malformed(s.to_string());

        let mut parts = s.split_whitespace();
        let clock = parts.next().ok_or_else(malformed)?;
        let meridiem = parts.next().ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        let pm = match meridiem.to_ascii_uppercase().as_str() {
            "AM" => false,
            "PM" => true,
            _ => return Err(malformed()),
        };

        let mut clock_parts = clock.split(':');
        let hour: u16 = clock_parts
            .next()
            .and_then(|h| h.parse().ok())
            .ok_or_else(malformed)?;
        let minute: u16 = clock_parts
            .next()
            .and_then(|m| m.parse().ok())
            .ok_or_else(malformed)?;
        if clock_parts.next().is_some() || !(1..=12).contains(&hour) || minute > 59 {
            return Err(malformed());
        }

        let hour24 = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        Self::from_hm(hour24, minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let minute_of_day = u16::deserialize(deserializer)?;
        TimeOfDay::new(minute_of_day).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_times() {
        let valid_times = vec![
            ("12:00 AM", 0),
            ("12:59 am", 59),
            ("1:00 AM", 60),
            ("8:00 AM", 8 * 60),
            ("08:05 AM", 8 * 60 + 5),
            ("11:59 AM", 11 * 60 + 59),
            ("12:00 PM", 12 * 60),
            ("8:00 PM", 20 * 60),
            ("11:59 PM", 23 * 60 + 59),
        ];

        for (time, minute_of_day) in &valid_times {
            let parsed = time.parse::<TimeOfDay>();
            assert!(parsed.is_ok());
            assert_eq!(parsed.unwrap().minute_of_day(), *minute_of_day);
        }
    }

    #[test]
    fn it_rejects_invalid_times() {
        let invalid_times = vec![
            "", "8:00", "8 AM", "0:30 AM", "13:00 PM", "8:60 AM", "8:00 XM", "8:00:00 AM",
            "8:00 AM PM",
        ];

        for time in &invalid_times {
            assert!(time.parse::<TimeOfDay>().is_err());
        }
    }

    #[test]
    fn it_formats_back_to_the_ui_convention() {
        let samples = vec![
            (0, "12:00 AM"),
            (8 * 60, "8:00 AM"),
            (12 * 60, "12:00 PM"),
            (12 * 60 + 30, "12:30 PM"),
            (20 * 60 + 5, "8:05 PM"),
            (23 * 60 + 59, "11:59 PM"),
        ];

        for (minute_of_day, expected) in samples {
            let time = TimeOfDay::new(minute_of_day).unwrap();
            assert_eq!(time.to_string(), expected);
            assert_eq!(expected.parse::<TimeOfDay>().unwrap(), time);
        }
    }

    #[test]
    fn it_rejects_out_of_range_minutes() {
        assert!(TimeOfDay::new(MINUTES_PER_DAY).is_err());
        assert!(TimeOfDay::from_hm(24, 0).is_err());
        assert!(TimeOfDay::new(MINUTES_PER_DAY - 1).is_ok());
    }
}

use std::fmt;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// First hour a specific-time leave may start or end in.
pub const OPENING_HOUR: u8 = 8;
/// Last hour a specific-time leave may start or end in.
pub const CLOSING_HOUR: u8 = 18;
/// Minutes a slot may fall on.
pub const SLOT_MINUTES: [u8; 2] = [0, 30];
/// Shortest specific-time leave, in minutes.
pub const MIN_SPAN_MINUTES: u16 = 30;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlotError {
    #[display(fmt = "time is missing")]
    Missing,
    #[display(fmt = "time is not in HH:MM form")]
    Malformed,
    #[display(fmt = "time is outside the bookable half-hour slots")]
    OutOfRange,
}

impl std::error::Error for TimeSlotError {}

/// A bookable half-hour slot between 08:00 and 18:30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeSlotError> {
        if !is_bookable_hour(hour) || !is_slot_minute(minute) {
            return Err(TimeSlotError::OutOfRange);
        }
        Ok(Self { hour, minute })
    }

    /// Builds a slot from the raw hour and minute pickers ("08", "30").
    pub fn from_parts(hour: &str, minute: &str) -> Result<Self, TimeSlotError> {
        let (hour, minute) = (hour.trim(), minute.trim());
        if [hour, minute].iter().any(|part| !part.is_empty() && !is_two_digits(part)) {
            return Err(TimeSlotError::Malformed);
        }
        if hour.is_empty() || minute.is_empty() {
            return Err(TimeSlotError::Missing);
        }
        let hour = hour.parse::<u8>().map_err(|_| TimeSlotError::Malformed)?;
        let minute = minute.parse::<u8>().map_err(|_| TimeSlotError::Malformed)?;
        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn offset(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Whether `end` closes a window of at least [`MIN_SPAN_MINUTES`] opened by `self`.
    pub fn admits_end(&self, end: &TimeSlot) -> bool {
        end.offset() >= self.offset() + MIN_SPAN_MINUTES
    }
}

pub fn is_bookable_hour(hour: u8) -> bool {
    (OPENING_HOUR..=CLOSING_HOUR).contains(&hour)
}

pub fn is_slot_minute(minute: u8) -> bool {
    SLOT_MINUTES.contains(&minute)
}

fn is_two_digits(part: &str) -> bool {
    part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = TimeSlotError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TimeSlotError::Missing);
        }
        let (hour, minute) = raw.split_once(':').ok_or(TimeSlotError::Malformed)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(TimeSlotError::Malformed);
        }
        Self::from_parts(hour, minute)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<TimeSlot>()
            .map_err(|err| serde::de::Error::custom(format!("invalid time '{raw}': {err}")))
    }
}

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::model::time_slot::{
    CLOSING_HOUR, MIN_SPAN_MINUTES, OPENING_HOUR, SLOT_MINUTES, TimeSlotError,
};
use crate::model::{LeaveType, TimeSlot, TimeType};

/// Form fields that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Name,
    LeaveType,
    TimeType,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
    Reason,
}

/// Per-field error messages. Empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Raw field values as a form holds them; empty string means "not chosen".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveForm {
    pub name: String,
    pub leave_type: String,
    pub time_type: TimeType,
    pub start_date: String,
    pub end_date: String,
    pub start_hour: String,
    pub start_minute: String,
    pub end_hour: String,
    pub end_minute: String,
    pub reason: String,
}

/// A form that passed validation, with every value typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveDraft {
    pub name: String,
    pub leave_type: LeaveType,
    pub time_type: TimeType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub window: Option<(TimeSlot, TimeSlot)>,
    pub reason: String,
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const SLOT_RANGE_HINT: &str = "must fall on the hour or half hour between 08:00 and 18:30";

/// Strict `YYYY-MM-DD`; chrono alone would also take unpadded fields.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let padded = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !padded {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

fn slot(hour: &str, minute: &str) -> Result<TimeSlot, String> {
    TimeSlot::from_parts(hour, minute).map_err(|err| match err {
        TimeSlotError::Missing => String::new(),
        TimeSlotError::Malformed | TimeSlotError::OutOfRange => SLOT_RANGE_HINT.to_string(),
    })
}

/// Runs every field rule against `form`. Pure: the same form always yields the same errors.
pub fn validate(form: &LeaveForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, "Please enter a name");
    }

    if LeaveType::from_str(form.leave_type.trim()).is_err() {
        errors.insert(Field::LeaveType, "Please select a leave type");
    }

    if form.reason.trim().is_empty() {
        errors.insert(Field::Reason, "Please enter a reason");
    }

    let start_date = if form.start_date.trim().is_empty() {
        errors.insert(Field::StartDate, "Please select a start date");
        None
    } else {
        let parsed = parse_date(&form.start_date);
        if parsed.is_none() {
            errors.insert(Field::StartDate, "Start date must be a valid date (YYYY-MM-DD)");
        }
        parsed
    };

    match form.time_type {
        TimeType::FullDay => {
            if form.end_date.trim().is_empty() {
                errors.insert(Field::EndDate, "Please select an end date");
            } else {
                match parse_date(&form.end_date) {
                    None => errors.insert(Field::EndDate, "End date must be a valid date (YYYY-MM-DD)"),
                    Some(end) if start_date.is_some_and(|start| end < start) => {
                        errors.insert(Field::EndDate, "End date cannot be earlier than start date")
                    }
                    Some(_) => {}
                }
            }
        }
        TimeType::SpecificTime => {
            let start = slot(&form.start_hour, &form.start_minute);
            if let Err(hint) = &start {
                if hint.is_empty() {
                    errors.insert(Field::StartTime, "Please select a start time");
                } else {
                    errors.insert(Field::StartTime, format!("Start time {hint}"));
                }
            }

            match slot(&form.end_hour, &form.end_minute) {
                Err(hint) if hint.is_empty() => errors.insert(Field::EndTime, "Please select an end time"),
                Err(hint) => errors.insert(Field::EndTime, format!("End time {hint}")),
                Ok(end) => {
                    if let Ok(start) = start {
                        if !start.admits_end(&end) {
                            errors.insert(
                                Field::EndTime,
                                format!("End time must be at least {MIN_SPAN_MINUTES} minutes after start time"),
                            );
                        }
                    }
                }
            }
        }
    }

    errors
}

impl LeaveForm {
    /// Validates and converts into typed values.
    pub fn parse(&self) -> Result<LeaveDraft, FieldErrors> {
        let errors = validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }
        self.draft().ok_or(errors)
    }

    fn draft(&self) -> Option<LeaveDraft> {
        let start_date = parse_date(&self.start_date)?;
        let (end_date, window) = match self.time_type {
            TimeType::FullDay => (parse_date(&self.end_date)?, None),
            TimeType::SpecificTime => {
                let start = TimeSlot::from_parts(&self.start_hour, &self.start_minute).ok()?;
                let end = TimeSlot::from_parts(&self.end_hour, &self.end_minute).ok()?;
                (start_date, Some((start, end)))
            }
        };

        Some(LeaveDraft {
            name: self.name.trim().to_string(),
            leave_type: LeaveType::from_str(self.leave_type.trim()).ok()?,
            time_type: self.time_type,
            start_date,
            end_date,
            window,
            reason: self.reason.trim().to_string(),
        })
    }
}

pub(crate) fn picked(raw: &str) -> Option<u8> {
    raw.trim().parse().ok()
}

/// Hours offered by the start-hour picker.
pub fn start_hour_options() -> Vec<u8> {
    (OPENING_HOUR..=CLOSING_HOUR).collect()
}

/// Minutes offered by the start-minute picker.
pub fn minute_options() -> Vec<u8> {
    SLOT_MINUTES.to_vec()
}

/// Hours the end-hour picker may offer given the current start selection.
///
/// Hours before the start hour are never offered; the start hour itself is
/// dropped when the start is on the half hour, since no 30-minute window fits.
pub fn end_hour_options(start_hour: &str, start_minute: &str) -> Vec<u8> {
    let Some(start) = picked(start_hour) else {
        return start_hour_options();
    };
    let half_past = picked(start_minute) == Some(30);

    start_hour_options()
        .into_iter()
        .filter(|hour| *hour > start || (*hour == start && !half_past))
        .collect()
}

/// Minutes the end-minute picker may offer for `end_hour`.
pub fn end_minute_options(start_hour: &str, start_minute: &str, end_hour: &str) -> Vec<u8> {
    let same_hour = matches!((picked(start_hour), picked(end_hour)), (Some(s), Some(e)) if s == e);
    if !same_hour {
        return minute_options();
    }
    let floor = u16::from(picked(start_minute).unwrap_or(0)) + MIN_SPAN_MINUTES;

    minute_options()
        .into_iter()
        .filter(|minute| u16::from(*minute) >= floor)
        .collect()
}

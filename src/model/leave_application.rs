use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use super::time_slot::TimeSlot;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveType {
    Annual,
    Personal,
    Sick,
}

/// Whether a leave covers whole days or a window inside one day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter, ToSchema,
)]
pub enum TimeType {
    #[default]
    #[serde(rename = "fullDay", alias = "FULL_DAY")]
    #[strum(to_string = "fullDay", serialize = "FULL_DAY")]
    FullDay,
    #[serde(rename = "specificTime", alias = "SPECIFIC_TIME")]
    #[strum(to_string = "specificTime", serialize = "SPECIFIC_TIME")]
    SpecificTime,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "mock-2",
    "name": "Anthea",
    "leaveType": "sick",
    "timeType": "specificTime",
    "startDate": "2025-06-17",
    "endDate": "2025-06-17",
    "startTime": "08:30",
    "endTime": "09:30",
    "reason": "Follow-up doctor visit",
    "status": "approved",
    "createdAt": "2025-06-16T09:00:00Z"
}))]
pub struct LeaveApplication {
    #[schema(example = "5f0c3a9e-8d1b-4a8e-9d6c-1f2b3c4d5e6f")]
    pub id: String,
    #[schema(example = "Leo")]
    pub name: String,
    pub leave_type: LeaveType,
    pub time_type: TimeType,
    #[schema(example = "2025-06-16", format = Date, value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2025-06-17", format = Date, value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "08:30", value_type = Option<String>)]
    pub start_time: Option<TimeSlot>,
    #[schema(example = "09:30", value_type = Option<String>)]
    pub end_time: Option<TimeSlot>,
    #[schema(example = "Trip to Japan")]
    pub reason: String,
    pub status: LeaveStatus,
    #[schema(example = "2025-06-15T14:30:00Z", format = DateTime, value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl LeaveType {
    /// Label shown in the review table.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual leave",
            LeaveType::Personal => "Personal leave",
            LeaveType::Sick => "Sick leave",
        }
    }
}

/// Badge colour for a status in the review table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StatusTone {
    Warning,
    Success,
    Error,
}

impl LeaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending review",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            LeaveStatus::Pending => StatusTone::Warning,
            LeaveStatus::Approved => StatusTone::Success,
            LeaveStatus::Rejected => StatusTone::Error,
        }
    }
}

/// Derived size of a leave, used for ordering the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveDuration {
    Days(i64),
    Minutes(i64),
}

impl LeaveDuration {
    /// Raw count, days or minutes depending on the variant.
    pub fn magnitude(&self) -> i64 {
        match self {
            LeaveDuration::Days(days) => *days,
            LeaveDuration::Minutes(minutes) => *minutes,
        }
    }
}

impl LeaveApplication {
    pub fn duration(&self) -> LeaveDuration {
        match (self.time_type, self.start_time, self.end_time) {
            (TimeType::SpecificTime, Some(start), Some(end)) => {
                LeaveDuration::Minutes(i64::from(end.offset()) - i64::from(start.offset()))
            }
            _ => LeaveDuration::Days((self.end_date - self.start_date).num_days() + 1),
        }
    }

    /// The time column: `"HH:MM - HH:MM"` for a specific-time leave, otherwise "Full day".
    pub fn time_label(&self) -> String {
        match (self.time_type, self.start_time, self.end_time) {
            (TimeType::SpecificTime, Some(start), Some(end)) => format!("{start} - {end}"),
            _ => "Full day".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn application(time_type: TimeType, start: &str, end: &str, times: Option<(&str, &str)>) -> LeaveApplication {
        LeaveApplication {
            id: "t-1".to_string(),
            name: "Leo".to_string(),
            leave_type: LeaveType::Annual,
            time_type,
            start_date: NaiveDate::from_str(start).expect("valid date"),
            end_date: NaiveDate::from_str(end).expect("valid date"),
            start_time: times.map(|(s, _)| s.parse().expect("valid slot")),
            end_time: times.map(|(_, e)| e.parse().expect("valid slot")),
            reason: "trip".to_string(),
            status: LeaveStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn full_day_duration_counts_both_ends() {
        let single = application(TimeType::FullDay, "2025-06-11", "2025-06-11", None);
        assert_eq!(single.duration(), LeaveDuration::Days(1));

        let span = application(TimeType::FullDay, "2025-06-16", "2025-06-17", None);
        assert_eq!(span.duration(), LeaveDuration::Days(2));
    }

    #[test]
    fn specific_time_duration_is_in_minutes() {
        let visit = application(
            TimeType::SpecificTime,
            "2025-06-17",
            "2025-06-17",
            Some(("08:30", "09:30")),
        );
        assert_eq!(visit.duration(), LeaveDuration::Minutes(60));
        assert_eq!(visit.duration().magnitude(), 60);
    }

    #[test]
    fn table_labels() {
        assert_eq!(LeaveType::Sick.label(), "Sick leave");
        assert_eq!(LeaveStatus::Pending.label(), "Pending review");
        assert_eq!(LeaveStatus::Approved.tone(), StatusTone::Success);
        assert_eq!(LeaveStatus::Rejected.tone().to_string(), "error");

        let visit = application(
            TimeType::SpecificTime,
            "2025-06-17",
            "2025-06-17",
            Some(("08:30", "09:30")),
        );
        assert_eq!(visit.time_label(), "08:30 - 09:30");

        let trip = application(TimeType::FullDay, "2025-06-16", "2025-06-17", None);
        assert_eq!(trip.time_label(), "Full day");
    }

    #[test]
    fn time_type_accepts_both_spellings() {
        assert_eq!(TimeType::from_str("fullDay"), Ok(TimeType::FullDay));
        assert_eq!(TimeType::from_str("SPECIFIC_TIME"), Ok(TimeType::SpecificTime));
        assert_eq!(TimeType::SpecificTime.to_string(), "specificTime");

        let parsed: TimeType = serde_json::from_str("\"FULL_DAY\"").expect("alias accepted");
        assert_eq!(parsed, TimeType::FullDay);
        assert_eq!(
            serde_json::to_string(&TimeType::SpecificTime).expect("serializes"),
            "\"specificTime\""
        );
    }

    #[test]
    fn record_serializes_in_camel_case() {
        let record = application(TimeType::FullDay, "2025-06-16", "2025-06-17", None);
        let value = serde_json::to_value(&record).expect("serializes");

        assert_eq!(value["leaveType"], "annual");
        assert_eq!(value["timeType"], "fullDay");
        assert_eq!(value["startDate"], "2025-06-16");
        assert!(value["startTime"].is_null());
        assert_eq!(value["status"], "pending");
        assert!(value.get("createdAt").is_some());
    }
}

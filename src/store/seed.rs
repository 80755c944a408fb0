use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{LeaveApplication, LeaveStatus, LeaveType, TimeSlot, TimeType};

struct SeedRow {
    id: &'static str,
    name: &'static str,
    start_date: &'static str,
    end_date: &'static str,
    leave_type: LeaveType,
    reason: &'static str,
    window: Option<(&'static str, &'static str)>,
    status: LeaveStatus,
    created_at: &'static str,
}

const DEMO_ROWS: [SeedRow; 6] = [
    SeedRow {
        id: "mock-1",
        name: "Anthea",
        start_date: "2025-06-10",
        end_date: "2025-06-10",
        leave_type: LeaveType::Sick,
        reason: "Feeling unwell, need rest",
        window: None,
        status: LeaveStatus::Pending,
        created_at: "2025-06-09T10:00:00.000Z",
    },
    SeedRow {
        id: "mock-2",
        name: "Anthea",
        start_date: "2025-06-17",
        end_date: "2025-06-17",
        leave_type: LeaveType::Sick,
        reason: "Follow-up doctor visit",
        window: Some(("08:30", "09:30")),
        status: LeaveStatus::Approved,
        created_at: "2025-06-16T09:00:00.000Z",
    },
    SeedRow {
        id: "mock-3",
        name: "Leo",
        start_date: "2025-06-16",
        end_date: "2025-06-17",
        leave_type: LeaveType::Annual,
        reason: "Trip to Japan",
        window: None,
        status: LeaveStatus::Pending,
        created_at: "2025-06-15T14:30:00.000Z",
    },
    SeedRow {
        id: "mock-4",
        name: "Anthea",
        start_date: "2025-06-16",
        end_date: "2025-06-17",
        leave_type: LeaveType::Annual,
        reason: "Trip to Japan",
        window: None,
        status: LeaveStatus::Rejected,
        created_at: "2025-06-14T16:45:00.000Z",
    },
    SeedRow {
        id: "mock-5",
        name: "Leo",
        start_date: "2025-06-11",
        end_date: "2025-06-11",
        leave_type: LeaveType::Sick,
        reason: "Caught a cold",
        window: None,
        status: LeaveStatus::Approved,
        created_at: "2025-06-10T11:30:00.000Z",
    },
    SeedRow {
        id: "mock-6",
        name: "Anthea",
        start_date: "2025-06-11",
        end_date: "2025-06-11",
        leave_type: LeaveType::Annual,
        reason: "Personal errands",
        window: None,
        status: LeaveStatus::Pending,
        created_at: "2025-06-10T15:20:00.000Z",
    },
];

fn date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("seed date '{raw}'"))
}

fn slot(raw: &str) -> anyhow::Result<TimeSlot> {
    raw.parse::<TimeSlot>()
        .with_context(|| format!("seed time '{raw}'"))
}

impl SeedRow {
    fn build(&self) -> anyhow::Result<LeaveApplication> {
        let (time_type, start_time, end_time) = match self.window {
            Some((start, end)) => (TimeType::SpecificTime, Some(slot(start)?), Some(slot(end)?)),
            None => (TimeType::FullDay, None, None),
        };
        let created_at = DateTime::parse_from_rfc3339(self.created_at)
            .with_context(|| format!("seed timestamp '{}'", self.created_at))?
            .with_timezone(&Utc);

        Ok(LeaveApplication {
            id: self.id.to_string(),
            name: self.name.to_string(),
            leave_type: self.leave_type,
            time_type,
            start_date: date(self.start_date)?,
            end_date: date(self.end_date)?,
            start_time,
            end_time,
            reason: self.reason.to_string(),
            status: self.status,
            created_at,
        })
    }
}

/// The six records the demo deployment starts with.
pub fn demo_applications() -> anyhow::Result<Vec<LeaveApplication>> {
    DEMO_ROWS.iter().map(SeedRow::build).collect()
}

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::model::{LeaveApplication, LeaveStatus, LeaveType};

/// A filter that is either open or pinned to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq + Copy> Selection<T> {
    /// Picks `value`, or clears the filter when `value` is already picked.
    pub fn toggle(self, value: T) -> Self {
        match self {
            Selection::Only(current) if current == value => Selection::All,
            _ => Selection::Only(value),
        }
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaveFilter {
    pub leave_type: Selection<LeaveType>,
    pub status: Selection<LeaveStatus>,
}

impl LeaveFilter {
    pub fn matches(&self, application: &LeaveApplication) -> bool {
        self.leave_type.matches(&application.leave_type) && self.status.matches(&application.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    CreatedAt,
    StartDate,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    /// Same field again flips direction; a new field starts ascending.
    pub fn select(self, field: SortField) -> Self {
        if self.field == Some(field) {
            Self {
                field: self.field,
                direction: self.direction.flip(),
            }
        } else {
            Self {
                field: Some(field),
                direction: SortDirection::Asc,
            }
        }
    }

    fn compare(&self, a: &LeaveApplication, b: &LeaveApplication) -> Ordering {
        let ordering = match self.field {
            None => Ordering::Equal,
            Some(SortField::CreatedAt) => a.created_at.cmp(&b.created_at),
            Some(SortField::StartDate) => a.start_date.cmp(&b.start_date),
            Some(SortField::Duration) => a.duration().magnitude().cmp(&b.duration().magnitude()),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Filter and sort selections of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub filter: LeaveFilter,
    pub sort: SortState,
}

impl ListQuery {
    /// Filters, then stable-sorts, a copy of `applications`.
    pub fn apply(&self, applications: &[LeaveApplication]) -> Vec<LeaveApplication> {
        let mut rows: Vec<LeaveApplication> = applications
            .iter()
            .filter(|application| self.filter.matches(application))
            .cloned()
            .collect();

        if self.sort.field.is_some() {
            rows.sort_by(|a, b| self.sort.compare(a, b));
        }
        rows
    }
}

use crate::api::leave_application::LeaveListResponse;
use crate::model::{LeaveApplication, LeaveStatus, LeaveType};
use crate::query::{LeaveFilter, ListQuery, SortField};

use super::error::{ClientError, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    FetchStarted,
    FetchSucceeded(LeaveListResponse),
    FetchFailed(ClientError),
    FilterLeaveType(LeaveType),
    FilterStatus(LeaveStatus),
    ClearFilters,
    SortBy(SortField),
}

/// The review table: the last fetched snapshot plus local filter/sort picks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub phase: ListPhase,
    pub applications: Vec<LeaveApplication>,
    pub total: usize,
    pub error: Option<String>,
    pub query: ListQuery,
}

impl ListView {
    pub fn reduce(mut self, action: ListAction) -> Self {
        match action {
            ListAction::FetchStarted => self.phase = ListPhase::Loading,
            ListAction::FetchSucceeded(response) => {
                self.applications = response.applications;
                self.total = response.total;
                self.error = None;
                self.phase = ListPhase::Ready;
            }
            ListAction::FetchFailed(err) => {
                tracing::warn!(error = %err, "Leave application fetch failed");
                self.error = Some(err.user_message(Operation::Load).to_string());
                self.phase = ListPhase::Ready;
            }
            ListAction::FilterLeaveType(leave_type) => {
                self.query.filter.leave_type = self.query.filter.leave_type.toggle(leave_type);
            }
            ListAction::FilterStatus(status) => {
                self.query.filter.status = self.query.filter.status.toggle(status);
            }
            ListAction::ClearFilters => self.query.filter = LeaveFilter::default(),
            ListAction::SortBy(field) => self.query.sort = self.query.sort.select(field),
        }
        self
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    /// Rows to draw, filtered then sorted.
    pub fn rows(&self) -> Vec<LeaveApplication> {
        self.query.apply(&self.applications)
    }
}

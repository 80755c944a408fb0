use strum::IntoEnumIterator;

use crate::api::leave_application::CreateLeaveApplication;
use crate::model::{LeaveApplication, LeaveType, TimeType};
use crate::validation::{
    FieldErrors, LeaveDraft, LeaveForm, end_hour_options, end_minute_options, picked, validate,
};

use super::error::{ClientError, Operation};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// A create call is in flight; the submit button is disabled.
    Submitting,
    /// Last submit stored the record with this id.
    Submitted(String),
    /// Last submit failed with this user-facing message.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetName(String),
    SetLeaveType(String),
    SetTimeType(TimeType),
    SetStartDate(String),
    SetEndDate(String),
    SetStartHour(String),
    SetStartMinute(String),
    SetEndHour(String),
    SetEndMinute(String),
    SetReason(String),
    SubmitSucceeded(LeaveApplication),
    SubmitFailed(ClientError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: LeaveForm,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
    attempted: bool,
}

impl From<&LeaveDraft> for CreateLeaveApplication {
    fn from(draft: &LeaveDraft) -> Self {
        Self {
            name: Some(draft.name.clone()),
            start_date: Some(draft.start_date.to_string()),
            end_date: Some(draft.end_date.to_string()),
            leave_type: Some(draft.leave_type.to_string()),
            reason: Some(draft.reason.clone()),
            time_type: Some(draft.time_type.to_string()),
            start_time: draft.window.map(|(start, _)| start.to_string()),
            end_time: draft.window.map(|(_, end)| end.to_string()),
        }
    }
}

impl FormState {
    pub fn reduce(mut self, action: FormAction) -> Self {
        let fields = &mut self.fields;
        match action {
            FormAction::SetName(value) => fields.name = value,
            FormAction::SetLeaveType(value) => fields.leave_type = value,
            FormAction::SetTimeType(value) => fields.time_type = value,
            FormAction::SetStartDate(value) => fields.start_date = value,
            FormAction::SetEndDate(value) => fields.end_date = value,
            FormAction::SetStartHour(value) => fields.start_hour = value,
            FormAction::SetStartMinute(value) => fields.start_minute = value,
            FormAction::SetEndHour(value) => fields.end_hour = value,
            FormAction::SetEndMinute(value) => fields.end_minute = value,
            FormAction::SetReason(value) => fields.reason = value,
            FormAction::SubmitSucceeded(application) => {
                return Self {
                    status: SubmitStatus::Submitted(application.id),
                    ..Self::default()
                };
            }
            FormAction::SubmitFailed(err) => {
                tracing::warn!(error = %err, "Leave application submit failed");
                self.status = SubmitStatus::Failed(err.user_message(Operation::Submit).to_string());
                return self;
            }
        }

        self.reconcile();
        if self.attempted {
            self.errors = validate(&self.fields);
        }
        self
    }

    /// Re-derives the fields that depend on others after an edit.
    fn reconcile(&mut self) {
        let fields = &mut self.fields;
        if fields.time_type != TimeType::SpecificTime {
            return;
        }

        fields.end_date = fields.start_date.clone();

        if let Some(end_hour) = picked(&fields.end_hour) {
            if !end_hour_options(&fields.start_hour, &fields.start_minute).contains(&end_hour) {
                fields.end_hour.clear();
                fields.end_minute.clear();
            }
        }

        if let Some(end_minute) = picked(&fields.end_minute) {
            let allowed = end_minute_options(&fields.start_hour, &fields.start_minute, &fields.end_hour);
            if !allowed.contains(&end_minute) {
                fields.end_minute.clear();
            }
        }
    }

    pub fn leave_type_options() -> Vec<LeaveType> {
        LeaveType::iter().collect()
    }

    pub fn end_hour_options(&self) -> Vec<u8> {
        end_hour_options(&self.fields.start_hour, &self.fields.start_minute)
    }

    pub fn end_minute_options(&self) -> Vec<u8> {
        end_minute_options(
            &self.fields.start_hour,
            &self.fields.start_minute,
            &self.fields.end_hour,
        )
    }

    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Submitting
    }

    /// Validates the whole form. On success returns the create payload and
    /// marks the form as submitting; otherwise the errors are kept on the form.
    pub fn submit(&mut self) -> Option<CreateLeaveApplication> {
        if !self.can_submit() {
            return None;
        }
        self.attempted = true;

        match self.fields.parse() {
            Ok(draft) => {
                self.errors = FieldErrors::default();
                self.status = SubmitStatus::Submitting;
                Some(CreateLeaveApplication::from(&draft))
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

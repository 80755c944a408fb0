pub mod leave_application;
pub mod time_slot;

pub use leave_application::{LeaveApplication, LeaveDuration, LeaveStatus, LeaveType, StatusTone, TimeType};
pub use time_slot::TimeSlot;

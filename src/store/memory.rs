use std::sync::RwLock;

use super::{LeaveStore, StoreError};
use crate::model::LeaveApplication;

#[derive(Default)]
pub struct InMemoryLeaveStore {
    records: RwLock<Vec<LeaveApplication>>,
}

impl InMemoryLeaveStore {
    pub fn with_records(records: Vec<LeaveApplication>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl LeaveStore for InMemoryLeaveStore {
    fn append(&self, application: LeaveApplication) -> Result<LeaveApplication, StoreError> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::Unavailable("leave store lock poisoned".to_string()))?;
        guard.push(application.clone());
        Ok(application)
    }

    fn list_all(&self) -> Result<Vec<LeaveApplication>, StoreError> {
        let guard = self
            .records
            .read()
            .map_err(|_| StoreError::Unavailable("leave store lock poisoned".to_string()))?;
        Ok(guard.clone())
    }
}

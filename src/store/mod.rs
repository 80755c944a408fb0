use std::sync::Arc;

use derive_more::Display;

use crate::config::Config;
use crate::model::LeaveApplication;

mod memory;
mod seed;

pub use memory::InMemoryLeaveStore;
pub use seed::demo_applications;

#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "leave store unavailable: {}", _0)]
    Unavailable(String),
}

impl std::error::Error for StoreError {}

/// Append-only home of every leave application.
///
/// Handlers only hold this trait, so a durable backend can replace the
/// in-memory one without touching validation or the routes.
pub trait LeaveStore: Send + Sync {
    /// Appends the whole record and echoes it back.
    fn append(&self, application: LeaveApplication) -> Result<LeaveApplication, StoreError>;

    /// Snapshot of every record in insertion order.
    fn list_all(&self) -> Result<Vec<LeaveApplication>, StoreError>;
}

pub fn init_store(config: &Config) -> anyhow::Result<Arc<dyn LeaveStore>> {
    let store = if config.seed_demo_data {
        InMemoryLeaveStore::with_records(demo_applications()?)
    } else {
        InMemoryLeaveStore::default()
    };
    Ok(Arc::new(store))
}

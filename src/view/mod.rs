//! Headless state for the leave form and the list view.
//!
//! Both are plain reducers: a renderer feeds user input and network results
//! in as actions and draws whatever state comes out.

pub mod error;
pub mod form;
pub mod list;

pub use error::{ClientError, Operation};
pub use form::{FormAction, FormState, SubmitStatus};
pub use list::{ListAction, ListPhase, ListView};

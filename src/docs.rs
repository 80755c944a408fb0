use crate::api::error::ErrorResponse;
use crate::api::leave_application::{CreateLeaveApplication, CreateLeaveResponse, LeaveListResponse};
use crate::model::{LeaveApplication, LeaveStatus, LeaveType, TimeType};
use utoipa::OpenApi;
use utoipa::openapi::server::Server;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Application API",
        version = "0.1.0",
        description = r#"
## Leave Applications

Submit leave requests and review everything submitted so far.

- **Create** validates the request (dates, half-hour time slots between 08:00 and 18:30)
  and stores it as `pending`.
- **List** returns every stored application with the total count.

Records live in process memory only; a restart resets them.
Paths are relative to the server URL, which carries the configured `API_PREFIX`.
"#,
    ),
    paths(
        crate::api::leave_application::create_application,
        crate::api::leave_application::list_applications
    ),
    components(
        schemas(
            CreateLeaveApplication,
            CreateLeaveResponse,
            LeaveListResponse,
            LeaveApplication,
            LeaveType,
            LeaveStatus,
            TimeType,
            ErrorResponse
        )
    ),
    tags(
        (name = "Leave", description = "Leave application APIs"),
    )
)]
pub struct ApiDoc;

/// The document as served, with `api_prefix` as the server base path.
pub fn openapi(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(api_prefix)]);
    doc
}

use std::str::FromStr;

use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

use super::error::ApiError;
use crate::model::{LeaveApplication, LeaveStatus, TimeType};
use crate::store::LeaveStore;
use crate::validation::{Field, FieldErrors, LeaveDraft, LeaveForm};

/// Create payload as the form sends it. Every field is optional on the wire so
/// missing values surface as a 400 with the field names rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "name": "Leo",
    "startDate": "2025-06-16",
    "endDate": "2025-06-17",
    "leaveType": "annual",
    "reason": "Trip to Japan",
    "timeType": "fullDay"
}))]
pub struct CreateLeaveApplication {
    pub name: Option<String>,
    #[schema(format = Date)]
    pub start_date: Option<String>,
    #[schema(format = Date)]
    pub end_date: Option<String>,
    /// annual, personal or sick
    pub leave_type: Option<String>,
    pub reason: Option<String>,
    /// fullDay (default) or specificTime
    pub time_type: Option<String>,
    /// HH:MM, only read for specificTime
    pub start_time: Option<String>,
    /// HH:MM, only read for specificTime
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateLeaveResponse {
    #[schema(example = "Leave application submitted successfully")]
    pub message: String,
    pub application: LeaveApplication,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaveListResponse {
    pub applications: Vec<LeaveApplication>,
    #[schema(example = 6)]
    pub total: usize,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn split_time(raw: &Option<String>) -> (String, String) {
    match raw.as_deref().map(str::trim) {
        None => (String::new(), String::new()),
        Some(value) => match value.split_once(':') {
            Some((hour, minute)) => (hour.to_string(), minute.to_string()),
            None => (value.to_string(), String::new()),
        },
    }
}

impl CreateLeaveApplication {
    /// Required fields that are absent, null or empty.
    pub fn missing_fields(&self) -> Vec<Field> {
        [
            (Field::Name, &self.name),
            (Field::StartDate, &self.start_date),
            (Field::EndDate, &self.end_date),
            (Field::LeaveType, &self.leave_type),
            (Field::Reason, &self.reason),
        ]
        .into_iter()
        .filter(|(_, value)| !present(value))
        .map(|(field, _)| field)
        .collect()
    }

    /// Maps the wire payload onto the raw form the validator works on.
    pub fn to_form(&self) -> Result<LeaveForm, FieldErrors> {
        let time_type = match self.time_type.as_deref().map(str::trim) {
            None | Some("") => TimeType::default(),
            Some(raw) => TimeType::from_str(raw).map_err(|_| {
                let mut errors = FieldErrors::default();
                errors.insert(Field::TimeType, "Please select a leave time type");
                errors
            })?,
        };
        let (start_hour, start_minute) = split_time(&self.start_time);
        let (end_hour, end_minute) = split_time(&self.end_time);

        Ok(LeaveForm {
            name: self.name.clone().unwrap_or_default(),
            leave_type: self.leave_type.clone().unwrap_or_default(),
            time_type,
            start_date: self.start_date.clone().unwrap_or_default(),
            end_date: self.end_date.clone().unwrap_or_default(),
            start_hour,
            start_minute,
            end_hour,
            end_minute,
            reason: self.reason.clone().unwrap_or_default(),
        })
    }
}

/// Gates a payload and turns it into a fresh pending record.
pub fn prepare(payload: &CreateLeaveApplication, now: DateTime<Utc>) -> Result<LeaveApplication, ApiError> {
    let missing = payload.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    let draft = payload
        .to_form()
        .and_then(|form| form.parse())
        .map_err(ApiError::Invalid)?;

    Ok(new_application(draft, now))
}

fn new_application(draft: LeaveDraft, now: DateTime<Utc>) -> LeaveApplication {
    let LeaveDraft {
        name,
        leave_type,
        time_type,
        start_date,
        end_date,
        window,
        reason,
    } = draft;

    LeaveApplication {
        id: Uuid::new_v4().to_string(),
        name,
        leave_type,
        time_type,
        start_date,
        end_date,
        start_time: window.map(|(start, _)| start),
        end_time: window.map(|(_, end)| end),
        reason,
        status: LeaveStatus::Pending,
        created_at: now,
    }
}

/* =========================
Create leave application
========================= */
#[utoipa::path(
    post,
    path = "/leave-applications",
    request_body(
        content = CreateLeaveApplication,
        description = "Leave application payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave application stored", body = CreateLeaveResponse),
        (status = 400, description = "Missing or invalid fields", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::api::error::ErrorResponse)
    ),
    tag = "Leave"
)]
#[instrument(skip_all)]
pub async fn create_application(
    store: web::Data<dyn LeaveStore>,
    payload: web::Json<CreateLeaveApplication>,
) -> Result<HttpResponse, ApiError> {
    let application = prepare(&payload, Utc::now())?;
    let application = store.append(application)?;

    info!(
        id = %application.id,
        leave_type = %application.leave_type,
        time_type = %application.time_type,
        "Leave application submitted"
    );

    Ok(HttpResponse::Created().json(CreateLeaveResponse {
        message: "Leave application submitted successfully".to_string(),
        application,
    }))
}

/* =========================
List leave applications
========================= */
#[utoipa::path(
    get,
    path = "/leave-applications",
    responses(
        (status = 200, description = "Every stored leave application", body = LeaveListResponse),
        (status = 500, description = "Internal server error", body = crate::api::error::ErrorResponse)
    ),
    tag = "Leave"
)]
#[instrument(skip_all)]
pub async fn list_applications(store: web::Data<dyn LeaveStore>) -> Result<HttpResponse, ApiError> {
    let applications = store.list_all()?;
    let total = applications.len();

    Ok(HttpResponse::Ok().json(LeaveListResponse { applications, total }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routes;
    use crate::store::{InMemoryLeaveStore, StoreError, demo_applications};
    use actix_web::http::{StatusCode, header::ContentType};
    use actix_web::{App, test as actix_test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    struct UnavailableStore;

    impl LeaveStore for UnavailableStore {
        fn append(&self, _: LeaveApplication) -> Result<LeaveApplication, StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }

        fn list_all(&self) -> Result<Vec<LeaveApplication>, StoreError> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }
    }

    fn test_config() -> Config {
        Config::from_vars(|_| None).expect("defaults are valid")
    }

    macro_rules! service {
        ($store:expr) => {{
            let store: Arc<dyn LeaveStore> = $store;
            actix_test::init_service(
                App::new()
                    .app_data(web::Data::from(store))
                    .configure(|cfg| routes::configure(cfg, test_config())),
            )
            .await
        }};
    }

    fn leo_full_day() -> Value {
        json!({
            "name": "Leo",
            "startDate": "2025-06-16",
            "endDate": "2025-06-17",
            "leaveType": "annual",
            "reason": "trip",
            "timeType": "FULL_DAY"
        })
    }

    fn post(body: &Value) -> actix_test::TestRequest {
        actix_test::TestRequest::post()
            .uri("/api/leave-applications")
            .set_json(body)
    }

    #[actix_web::test]
    async fn full_day_create_returns_pending_record() {
        let app = service!(Arc::new(InMemoryLeaveStore::default()));
        let before = Utc::now();

        let resp = actix_test::call_service(&app, post(&leo_full_day()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: CreateLeaveResponse = actix_test::read_body_json(resp).await;
        let application = body.application;
        assert_eq!(application.name, "Leo");
        assert_eq!(application.status, LeaveStatus::Pending);
        assert_eq!(application.time_type, TimeType::FullDay);
        assert_eq!(application.start_time, None);
        assert_eq!(application.end_time, None);
        assert!(application.created_at >= before);
        assert!(!application.id.is_empty());
    }

    #[actix_web::test]
    async fn each_required_field_is_enforced() {
        let app = service!(Arc::new(InMemoryLeaveStore::default()));

        for field in ["name", "startDate", "endDate", "leaveType", "reason"] {
            let mut body = leo_full_day();
            body.as_object_mut().expect("object body").remove(field);

            let resp = actix_test::call_service(&app, post(&body).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "missing {field}");

            let body: Value = actix_test::read_body_json(resp).await;
            assert_eq!(body["error"], "Missing required fields");
            assert_eq!(body["details"], json!([field]));
        }
    }

    #[actix_web::test]
    async fn empty_and_null_values_count_as_missing() {
        let app = service!(Arc::new(InMemoryLeaveStore::default()));
        let mut body = leo_full_day();
        body["name"] = json!("");
        body["reason"] = Value::Null;

        let resp = actix_test::call_service(&app, post(&body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["details"], json!(["name", "reason"]));
    }

    #[actix_web::test]
    async fn zero_minute_window_is_rejected() {
        let store = Arc::new(InMemoryLeaveStore::default());
        let app = service!(store.clone());
        let body = json!({
            "name": "Anthea",
            "startDate": "2025-06-17",
            "endDate": "2025-06-17",
            "leaveType": "sick",
            "reason": "doctor",
            "timeType": "specificTime",
            "startTime": "08:30",
            "endTime": "08:30"
        });

        let resp = actix_test::call_service(&app, post(&body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid leave application");
        assert!(body["details"]["endTime"].is_string());
        assert!(store.list_all().expect("list succeeds").is_empty());
    }

    #[actix_web::test]
    async fn specific_time_pins_end_date_to_start_date() {
        let app = service!(Arc::new(InMemoryLeaveStore::default()));
        let body = json!({
            "name": "Anthea",
            "startDate": "2025-06-17",
            "endDate": "2025-06-20",
            "leaveType": "personal",
            "reason": "bank",
            "timeType": "SPECIFIC_TIME",
            "startTime": "13:00",
            "endTime": "15:30"
        });

        let resp = actix_test::call_service(&app, post(&body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = actix_test::read_body_json(resp).await;
        let application = &body["application"];
        assert_eq!(application["timeType"], "specificTime");
        assert_eq!(application["endDate"], "2025-06-17");
        assert_eq!(application["startTime"], "13:00");
        assert_eq!(application["endTime"], "15:30");
    }

    #[actix_web::test]
    async fn loose_date_and_time_formats_are_rejected() {
        let store = Arc::new(InMemoryLeaveStore::default());
        let app = service!(store.clone());
        let body = json!({
            "name": "Anthea",
            "startDate": "2025-6-1",
            "endDate": "2025-6-1",
            "leaveType": "sick",
            "reason": "doctor",
            "timeType": "specificTime",
            "startTime": "8:30",
            "endTime": "+9:+0"
        });

        let resp = actix_test::call_service(&app, post(&body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid leave application");
        assert!(body["details"]["startDate"].is_string());
        assert!(body["details"]["startTime"].is_string());
        assert!(body["details"]["endTime"].is_string());
        assert!(store.list_all().expect("list succeeds").is_empty());
    }

    #[actix_web::test]
    async fn full_day_drops_stray_times() {
        let app = service!(Arc::new(InMemoryLeaveStore::default()));
        let mut body = leo_full_day();
        body["startTime"] = json!("08:30");
        body["endTime"] = json!("08:30");

        let resp = actix_test::call_service(&app, post(&body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = actix_test::read_body_json(resp).await;
        assert!(body["application"]["startTime"].is_null());
        assert!(body["application"]["endTime"].is_null());
    }

    #[actix_web::test]
    async fn unknown_time_type_is_rejected() {
        let app = service!(Arc::new(InMemoryLeaveStore::default()));
        let mut body = leo_full_day();
        body["timeType"] = json!("halfDay");

        let resp = actix_test::call_service(&app, post(&body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(resp).await;
        assert!(body["details"]["timeType"].is_string());
    }

    #[actix_web::test]
    async fn created_record_round_trips_through_list() {
        let app = service!(Arc::new(InMemoryLeaveStore::with_records(
            demo_applications().expect("seed parses")
        )));

        let resp = actix_test::call_service(&app, post(&leo_full_day()).to_request()).await;
        let created: Value = actix_test::read_body_json(resp).await;

        let req = actix_test::TestRequest::get().uri("/api/leave-applications").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let list: Value = actix_test::read_body_json(resp).await;
        assert_eq!(list["total"], 7);
        assert_eq!(list["applications"][6], created["application"]);
        assert_eq!(list["applications"][0]["id"], "mock-1");
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let app = service!(Arc::new(InMemoryLeaveStore::default()));
        let req = actix_test::TestRequest::post()
            .uri("/api/leave-applications")
            .insert_header(ContentType::json())
            .set_payload("{\"name\": ")
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn store_failures_surface_as_internal_errors() {
        let app = service!(Arc::new(UnavailableStore));

        let resp = actix_test::call_service(&app, post(&leo_full_day()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Internal Server Error" }));

        let req = actix_test::TestRequest::get().uri("/api/leave-applications").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn prepare_keeps_validated_values_trimmed() {
        let payload = CreateLeaveApplication {
            name: Some("  Leo ".to_string()),
            start_date: Some("2025-06-16".to_string()),
            end_date: Some("2025-06-16".to_string()),
            leave_type: Some("sick".to_string()),
            reason: Some(" flu ".to_string()),
            ..CreateLeaveApplication::default()
        };
        let now = Utc::now();

        let application = prepare(&payload, now).expect("payload is valid");
        assert_eq!(application.name, "Leo");
        assert_eq!(application.reason, "flu");
        assert_eq!(application.created_at, now);
        assert_eq!(application.time_type, TimeType::FullDay);
    }

    #[test]
    fn prepare_assigns_unique_ids() {
        let payload: CreateLeaveApplication =
            serde_json::from_value(leo_full_day()).expect("payload deserializes");
        let first = prepare(&payload, Utc::now()).expect("payload is valid");
        let second = prepare(&payload, Utc::now()).expect("payload is valid");

        assert_ne!(first.id, second.id);
    }
}

use crate::{
    api::{error::ApiError, leave_application},
    config::Config,
};
use actix_web::{HttpRequest, ResponseError, error::InternalError, web};

/// Turns body parse failures into the same `{error}` JSON the handlers return.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let response = ApiError::BadPayload(err.to_string()).error_response();
        InternalError::from_response(err, response).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.app_data(json_config());

    cfg.service(
        web::scope(&config.api_prefix).service(
            // /leave-applications
            web::resource("/leave-applications")
                .route(web::get().to(leave_application::list_applications))
                .route(web::post().to(leave_application::create_application)),
        ),
    );
}

//! HTTP request handlers

pub mod health;
pub mod quote;

use actix_web::{error::InternalError, web, HttpResponse};

pub use health::health_check;
pub use quote::configure as configure_quotes;

/// JSON extractor config answering malformed bodies with a 400
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, _req| {
            let error_message = err.to_string();
            InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "invalid_json",
                    "message": error_message,
                    "status": 400,
                })),
            )
            .into()
        })
}

/// Configure all API routes under `/api/v1`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(configure_quotes),
    );
}

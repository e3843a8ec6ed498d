//! Quote handlers
//!
//! HTTP handlers that price a product for one or several durations.

use crate::dto::quote::{QuoteOptionsRequest, QuoteRequest, QuoteResponse};
use crate::dto::ApiResponse;
use crate::state::PricingState;
use actix_web::{web, HttpResponse};
use smm_core::AppError;
use tracing::{debug, instrument, warn};
use validator::Validate;

/// Quote a product for one duration
///
/// POST /api/v1/quotes
#[instrument(
    skip(state, req),
    fields(product = %req.product.display_id(), duration = req.duration)
)]
pub async fn create_quote(
    state: web::Data<PricingState>,
    req: web::Json<QuoteRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()
        .inspect_err(|e| warn!("Quote validation failed: {}", e))?;

    let table = req.product.price_table();
    let coupon = req.coupon();
    let result = state.engine.quote(&table, req.duration, coupon.as_ref());

    debug!(
        charged_price = result.charged_price,
        discount_rate = result.discount_rate,
        coupon_discount = result.coupon_discount,
        final_price = result.final_price,
        "Quote computed"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(QuoteResponse::new(
        req.duration,
        result,
    ))))
}

/// Quote a product for every duration of the selector
///
/// POST /api/v1/quotes/options
#[instrument(skip(state, req), fields(product = %req.product.display_id()))]
pub async fn quote_options(
    state: web::Data<PricingState>,
    req: web::Json<QuoteOptionsRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()
        .inspect_err(|e| warn!("Quote options validation failed: {}", e))?;

    let durations = req
        .durations
        .as_deref()
        .unwrap_or(state.offered_durations.as_slice());

    let table = req.product.price_table();
    let coupon = req.coupon();
    let quotes = state
        .engine
        .quote_options(&table, durations, coupon.as_ref());

    if quotes.is_empty() {
        return Err(AppError::Validation(
            "No positive duration to quote".to_string(),
        ));
    }

    debug!(count = quotes.len(), "Duration options quoted");

    let response_data: Vec<QuoteResponse> = quotes.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(response_data)))
}

/// Configure quote routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/quotes")
            .route("", web::post().to(create_quote))
            .route("/options", web::post().to(quote_options)),
    );
}

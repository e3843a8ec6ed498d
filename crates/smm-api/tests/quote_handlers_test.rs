//! Integration tests for the quote API handlers
//!
//! Requests go through the full actix service stack with the default
//! pricing state; no external services are involved.

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use smm_api::{configure, PricingState};
    use smm_core::config::PricingConfig;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = app!(PricingState::default());

        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_quote_with_tier_and_coupon() {
        let app = app!(PricingState::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/quotes")
            .set_json(json!({
                "product": {
                    "id": 42,
                    "price1Day": 5000,
                    "price7Days": "30000",
                    "price30Days": 120000
                },
                "duration": 7,
                "coupon": {
                    "discountType": "percentage",
                    "discountValue": 10,
                    "maxDiscount": 2000
                }
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        let data = &body["data"];
        assert_eq!(data["duration"], 7);
        assert_eq!(data["chargedPrice"], 30000);
        assert_eq!(data["originalPrice"], 35000);
        assert_eq!(data["discountRate"], 14);
        assert_eq!(data["couponDiscount"], 2000);
        assert_eq!(data["finalPrice"], 28000);
        assert_eq!(data["couponApplied"], true);
    }

    #[actix_web::test]
    async fn test_quote_fixed_coupon_cannot_go_negative() {
        let app = app!(PricingState::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/quotes")
            .set_json(json!({
                "product": { "price": "1000" },
                "duration": "1",
                "coupon": { "discountType": "fixed", "discountValue": 999999 }
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["couponDiscount"], 1000);
        assert_eq!(body["data"]["finalPrice"], 0);
    }

    #[actix_web::test]
    async fn test_quote_with_garbage_prices_still_answers() {
        let app = app!(PricingState::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/quotes")
            .set_json(json!({
                "product": { "price": "contact us", "price7Days": null },
                "duration": 7
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["chargedPrice"], 0);
        assert_eq!(body["data"]["discountRate"], 0);
        assert_eq!(body["data"]["couponApplied"], false);
    }

    #[actix_web::test]
    async fn test_zero_duration_is_rejected() {
        let app = app!(PricingState::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/quotes")
            .set_json(json!({ "product": { "price": 5000 }, "duration": 0 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_rejected() {
        let app = app!(PricingState::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/quotes")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"product\": ")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_json");
    }

    #[actix_web::test]
    async fn test_options_use_configured_durations() {
        let app = app!(PricingState::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/quotes/options")
            .set_json(json!({
                "product": { "price1Day": 5000, "price7Days": 30000, "price30Days": 120000 }
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0]["duration"], 1);
        assert_eq!(data[0]["discountRate"], 0);
        assert_eq!(data[1]["discountRate"], 14);
        assert_eq!(data[2]["discountRate"], 20);
    }

    #[actix_web::test]
    async fn test_options_with_custom_policy_and_durations() {
        let state = PricingState::from_config(&PricingConfig {
            default_max_discount: dec!(1500),
            offered_durations: vec![1, 7, 30],
        });
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/v1/quotes/options")
            .set_json(json!({
                "product": { "price": 5000 },
                "durations": [14, 0, 14, 3],
                "coupon": { "discountType": "fixed", "discountValue": 5000 }
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["duration"], 14);
        assert_eq!(data[0]["chargedPrice"], 70000);
        assert_eq!(data[0]["couponDiscount"], 1500);
        assert_eq!(data[1]["duration"], 3);
        assert_eq!(data[1]["finalPrice"], 13500);
    }

    #[actix_web::test]
    async fn test_options_with_only_zero_durations_is_rejected() {
        let app = app!(PricingState::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/quotes/options")
            .set_json(json!({ "product": { "price": 5000 }, "durations": [0] }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_unknown_coupon_type_quotes_without_coupon() {
        let app = app!(PricingState::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/quotes")
            .set_json(json!({
                "product": { "price": 5000 },
                "duration": 1,
                "coupon": { "discountType": "gift", "discountValue": 1000 }
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["couponDiscount"], 0);
        assert_eq!(body["data"]["finalPrice"], 5000);
        assert_eq!(body["data"]["couponApplied"], false);
    }

    #[actix_web::test]
    async fn test_options_accept_string_durations() {
        let app = app!(PricingState::default());

        let req = test::TestRequest::post()
            .uri("/api/v1/quotes/options")
            .set_json(json!({
                "product": { "price1Day": 5000, "price7Days": 30000 },
                "durations": ["7", 1]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["duration"], 7);
        assert_eq!(data[0]["chargedPrice"], 30000);
        assert_eq!(data[1]["duration"], 1);
    }

    #[actix_web::test]
    async fn test_options_with_too_many_durations_is_rejected() {
        let app = app!(PricingState::default());
        let durations: Vec<u32> = (1..=33).collect();

        let req = test::TestRequest::post()
            .uri("/api/v1/quotes/options")
            .set_json(json!({ "product": { "price": 5000 }, "durations": durations }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }
}

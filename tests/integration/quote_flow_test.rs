// Form session flow: every input change re-posts the whole form and gets an
// independent quote back through the full middleware stack

use actix_web::{test, App};
use autoloan::middleware::{ErrorHandler, RequestId, REQUEST_ID_HEADER};
use autoloan::modules;
use autoloan::modules::financing::controllers::QuoteResponse;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

/// Test a user moving the sliders one at a time
#[actix_web::test]
async fn test_form_session_recomputes_each_change() {
    let app = test::init_service(
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .configure(modules::configure),
    )
    .await;

    // (form state after each change, expected monthly payment)
    let steps = [
        (json!({}), "19131.94"),
        (json!({ "term_years": 7 }), "11592.26"),
        (json!({ "term_years": 7, "annual_interest_rate_percent": "0" }), "5654.76"),
        (
            json!({ "category": "tier2", "term_years": 7, "annual_interest_rate_percent": "0" }),
            "6190.48",
        ),
        (
            json!({
                "category": "tier2",
                "down_payment": "770000",
                "term_years": 7,
                "annual_interest_rate_percent": "0"
            }),
            "0.00",
        ),
    ];

    for (form_state, expected_monthly) in steps {
        let req = test::TestRequest::post()
            .uri("/api/v1/financing/quote")
            .set_json(&form_state)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200, "Quote failed for {}", form_state);
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

        let body: QuoteResponse = test::read_body_json(resp).await;
        assert_eq!(body.monthly_payment, expected_monthly, "Form state {}", form_state);
    }
}

/// Test that repeated identical requests return identical quotes
#[actix_web::test]
async fn test_repeated_quote_is_stable() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let payload = json!({
        "category": "tier3",
        "down_payment": "300000",
        "term_years": 4,
        "annual_interest_rate_percent": "17.5"
    });

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/v1/financing/quote")
            .set_json(&payload)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        bodies.push(body);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);

    // 555000 principal, 388500 interest over 48 months
    let monthly = Decimal::from_str(bodies[0]["monthly_payment"].as_str().unwrap()).unwrap();
    assert_eq!(monthly, Decimal::from_str("19656.25").unwrap());
}

/// Test that liveness and readiness are served alongside the API
#[actix_web::test]
async fn test_health_endpoints_available() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    for uri in ["/health", "/ready"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200, "{} should be up", uri);
    }
}

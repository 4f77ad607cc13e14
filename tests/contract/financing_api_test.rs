// Contract tests for the financing endpoints
//
// GET  /api/v1/financing/tiers
// GET  /api/v1/financing/form
// POST /api/v1/financing/quote

use actix_web::{test, App};
use autoloan::modules;
use autoloan::modules::financing::controllers::{QuoteResponse, TiersResponse};
use serde_json::{json, Value};

/// Test GET /tiers returns the fixed price table
#[actix_web::test]
async fn test_list_tiers_contract() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/financing/tiers")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: TiersResponse = test::read_body_json(resp).await;
    assert_eq!(body.currency, "EGP");

    let prices: Vec<&str> = body.tiers.iter().map(|t| t.price.as_str()).collect();
    assert_eq!(prices, vec!["725000", "770000", "855000"]);
    assert_eq!(body.tiers[0].label, "فئة اولى");
}

/// Test GET /form exposes defaults and ranges
#[actix_web::test]
async fn test_get_form_contract() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/financing/form")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["default_category"], "tier1");
    assert_eq!(body["term_years"]["min"], 1);
    assert_eq!(body["term_years"]["max"], 7);
    assert_eq!(body["term_years"]["default"], 3);
    assert_eq!(body["down_payment"]["default"], "250000");
    assert_eq!(body["annual_interest_rate_percent"]["max"], "30");
    assert!(body["down_payment"]["max"].is_null());
}

/// Test POST /quote with an empty body quotes the form defaults
#[actix_web::test]
async fn test_quote_defaults_contract() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/financing/quote")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: QuoteResponse = test::read_body_json(resp).await;
    assert_eq!(body.vehicle_price, "725000.00");
    assert_eq!(body.financed_principal, "475000.00");
    assert_eq!(body.monthly_payment, "19131.94");
    assert_eq!(body.total_interest, "213750.00");
    assert_eq!(body.installment_count, 36);
    assert_eq!(body.formatted.monthly_payment, "19,131.94 ج.م");
    assert_eq!(body.formatted.vehicle_price, "725,000 ج.م");
}

/// Test POST /quote response fields for an explicit request
#[actix_web::test]
async fn test_quote_explicit_contract() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/financing/quote")
        .set_json(json!({
            "category": "tier2",
            "down_payment": "0",
            "term_years": 7,
            "annual_interest_rate_percent": "0"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    for field in [
        "category",
        "currency",
        "vehicle_price",
        "financed_principal",
        "monthly_payment",
        "total_interest",
        "total_repayment",
        "installment_count",
        "formatted",
    ] {
        assert!(body.get(field).is_some(), "Response must have {}", field);
    }

    assert_eq!(body["category"], "tier2");
    assert_eq!(body["financed_principal"], "770000.00");
    assert_eq!(body["monthly_payment"], "9166.67");
    assert_eq!(body["installment_count"], 84);
}

/// Test POST /quote with a down payment covering the price
#[actix_web::test]
async fn test_quote_paid_in_full_contract() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/financing/quote")
        .set_json(json!({
            "category": "tier1",
            "down_payment": "800000",
            "term_years": 2,
            "annual_interest_rate_percent": "20"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: QuoteResponse = test::read_body_json(resp).await;
    assert_eq!(body.financed_principal, "0.00");
    assert_eq!(body.monthly_payment, "0.00");
    assert_eq!(body.formatted.monthly_payment, "0.00 ج.م");
}

/// Test that amounts share the currency scale whatever the input precision
#[actix_web::test]
async fn test_quote_amount_scale_contract() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let cases = [
        ("250000.0", "725000.00", "475000.00"),
        ("0.0000000000000000000000000001", "725000.00", "725000.00"),
    ];

    for (down_payment, expected_price, expected_principal) in cases {
        let req = test::TestRequest::post()
            .uri("/api/v1/financing/quote")
            .set_json(json!({ "category": "tier1", "down_payment": down_payment }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200, "Quote failed for {}", down_payment);

        let body: QuoteResponse = test::read_body_json(resp).await;
        assert_eq!(body.vehicle_price, expected_price);
        assert_eq!(body.financed_principal, expected_principal);
        for amount in [
            &body.vehicle_price,
            &body.financed_principal,
            &body.monthly_payment,
            &body.total_interest,
            &body.total_repayment,
        ] {
            let (_, fraction) = amount.split_once('.').unwrap();
            assert_eq!(fraction.len(), 2, "{} is not fixed to 2 places", amount);
        }
    }
}

/// Test POST /quote rejects values outside the widget ranges
#[actix_web::test]
async fn test_quote_out_of_range_contract() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let invalid_bodies = [
        json!({ "term_years": 8 }),
        json!({ "term_years": 0 }),
        json!({ "annual_interest_rate_percent": "30.5" }),
        json!({ "down_payment": "-5000" }),
        json!({ "category": "tier4" }),
    ];

    for payload in invalid_bodies {
        let req = test::TestRequest::post()
            .uri("/api/v1/financing/quote")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400, "Expected 400 for {}", payload);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], 400);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Validation error"));
    }
}

/// Test POST /quote with a malformed body
#[actix_web::test]
async fn test_quote_malformed_json_contract() {
    let app = test::init_service(App::new().configure(modules::configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/financing/quote")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(r#"{"term_years": "three"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

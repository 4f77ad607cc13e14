// HTTP handlers for the financing calculator
//
// Endpoints:
// - GET  /api/v1/financing/tiers - Price table
// - GET  /api/v1/financing/form  - Form defaults and input ranges
// - POST /api/v1/financing/quote - Compute an installment quote

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::financing::{
    models::{Category, FinancingRequest, FormConstraints},
    services::{FormattedAmounts, Quote, QuoteService},
};

/// One row of the price table
#[derive(Debug, Serialize, Deserialize)]
pub struct TierResponse {
    pub category: Category,
    pub label: String,
    pub price: String,
}

/// Response for GET /tiers
#[derive(Debug, Serialize, Deserialize)]
pub struct TiersResponse {
    pub currency: String,
    pub tiers: Vec<TierResponse>,
}

/// Request for POST /quote; omitted fields take the form defaults
#[derive(Debug, Default, Deserialize)]
pub struct QuoteRequest {
    pub category: Option<String>,
    pub down_payment: Option<Decimal>,
    pub term_years: Option<i32>,
    pub annual_interest_rate_percent: Option<Decimal>,
}

impl QuoteRequest {
    /// Fill missing fields from the form and resolve the category label
    pub fn into_financing_request(self, form: &FormConstraints) -> Result<FinancingRequest> {
        let category = match self.category {
            Some(selection) => Category::resolve(&selection)
                .ok_or_else(|| AppError::validation(format!("Unknown category: {}", selection)))?,
            None => form.default_category,
        };

        Ok(FinancingRequest::new(
            category,
            self.down_payment.unwrap_or(form.down_payment.default),
            self.term_years.unwrap_or(form.term_years.default),
            self.annual_interest_rate_percent
                .unwrap_or(form.annual_interest_rate_percent.default),
        ))
    }
}

/// Response for POST /quote
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub category: Option<Category>,
    pub currency: String,
    /// Every amount below is fixed to the currency scale
    pub vehicle_price: String,
    pub financed_principal: String,
    pub monthly_payment: String,
    pub total_interest: String,
    pub total_repayment: String,
    pub installment_count: i32,
    pub formatted: FormattedAmounts,
}

impl QuoteResponse {
    fn from_quote(quote: Quote, service: &QuoteService) -> Self {
        let currency = service.currency();
        let result = quote.result;

        Self {
            category: quote.request.category,
            currency: currency.to_string(),
            vehicle_price: currency.to_fixed(result.vehicle_price),
            financed_principal: currency.to_fixed(result.financed_principal),
            monthly_payment: currency.to_fixed(result.monthly_payment),
            total_interest: currency.to_fixed(result.total_interest),
            total_repayment: currency.to_fixed(result.total_repayment),
            installment_count: result.installment_count,
            formatted: quote.formatted,
        }
    }
}

/// GET /api/v1/financing/tiers
pub async fn list_tiers(service: web::Data<QuoteService>) -> HttpResponse {
    let tiers = Category::ALL
        .into_iter()
        .map(|category| TierResponse {
            category,
            label: category.label().to_string(),
            price: category.price().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(TiersResponse {
        currency: service.currency().to_string(),
        tiers,
    })
}

/// GET /api/v1/financing/form
///
/// Defaults and ranges for the input widgets.
pub async fn get_form(service: web::Data<QuoteService>) -> HttpResponse {
    HttpResponse::Ok().json(service.form())
}

/// POST /api/v1/financing/quote
///
/// # Request Body
/// ```json
/// {
///   "category": "tier1",
///   "down_payment": "250000",
///   "term_years": 3,
///   "annual_interest_rate_percent": "15"
/// }
/// ```
///
/// # Returns
/// - 200: Quote with raw and formatted figures
/// - 400: Unknown category or input outside the form ranges
pub async fn quote(
    request: web::Json<QuoteRequest>,
    service: web::Data<QuoteService>,
) -> Result<HttpResponse> {
    let financing_request = request
        .into_inner()
        .into_financing_request(service.form())?;

    let quote = service.quote(financing_request)?;

    Ok(HttpResponse::Ok().json(QuoteResponse::from_quote(quote, service.get_ref())))
}

/// Configure financing routes
pub fn configure_financing_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::new(QuoteService::default()))
        .service(
            web::scope("/api/v1/financing")
                .route("/tiers", web::get().to(list_tiers))
                .route("/form", web::get().to(get_form))
                .route("/quote", web::post().to(quote)),
        );
}

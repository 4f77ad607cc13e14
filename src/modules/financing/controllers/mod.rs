pub mod financing_controller;

pub use financing_controller::{
    configure_financing_routes, get_form, list_tiers, quote, QuoteRequest, QuoteResponse,
    TierResponse, TiersResponse,
};

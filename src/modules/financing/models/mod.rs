pub mod category;
pub mod financing_request;
pub mod financing_result;
pub mod form_constraints;

pub use category::Category;
pub use financing_request::FinancingRequest;
pub use financing_result::FinancingResult;
pub use form_constraints::{DecimalField, FormConstraints, IntegerField};

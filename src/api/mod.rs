//! HTTP API module for the Parafiscal Savings Engine.
//!
//! This module provides the REST API endpoints for generating savings
//! quotations and validating roster imports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeEntry, ImportRequest, ImportRowEntry, QuotationRequest};
pub use response::{ApiError, ImportResponse, QuotationResponse};
pub use state::AppState;

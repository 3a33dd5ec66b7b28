//! HTTP API module for the SAD Pay Engine.
//!
//! This module provides the REST endpoints for calculating State Active Duty
//! pay and comparing an original payment against a corrected one.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ComparisonRequest, PayInputRequest, ServiceMember};
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, CategoryOption, ComparisonResponse,
    GradesResponse,
};
pub use state::AppState;

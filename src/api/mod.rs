//! HTTP API module for the levy reduction engine.
//!
//! This module provides the REST API endpoint for calculating the
//! disability-employment levy reduction under the linked-employment scheme.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;

//! HTTP API module for the Roster Generation Engine.
//!
//! This module provides the REST endpoints the presentation layer calls:
//! roster generation, saving and fetching rosters, single-cell edits,
//! cell locking, and lifecycle transitions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    EditCellRequest, EmployeeRequest, GenerateRequest, HolidayRequest, LeaveRequest,
    PriorEntryRequest, SetLockRequest, StatusRequest,
};
pub use response::ApiError;
pub use state::{AppState, GenerationGuard};

//! HTTP-agnostic lookup API
//!
//! Typed request/response structures and pure handlers over a completed
//! draw. The `server` module translates HTTP requests into these calls; tests
//! and other front ends can call them directly.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take `&Pairings` plus typed input, return `Result<T, ApiError>`
//! - **Read-only**: No handler can change the draw
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{get_status, lookup};
pub use types::{ApiResponse, LookupData, LookupRequest, StatusData};

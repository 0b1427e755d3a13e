//! `tiny_http` adapter
//!
//! Handles routing, query parsing and response conversion. [`route`] is pure
//! so it can be exercised without a socket.

use std::io::Cursor;

use serde::Serialize;
use tiny_http::{Header, Method, Response, StatusCode};

use crate::api::{self, ApiError, ApiResponse, LookupRequest};
use crate::pairing::Pairings;

use super::assets::{INDEX_HTML, STYLE_CSS};

/// Response type produced by every route
pub type HttpResponse = Response<Cursor<Vec<u8>>>;

// =============================================================================
// ROUTING
// =============================================================================

/// Map a request line to a response.
///
/// `/api/v1/...` and `/api/...` are aliases for the API routes only, so
/// `/api/v1/query`, `/api/query` and `/query` are the same route while
/// `/api/` and `/api/health` are not found.
#[must_use]
pub fn route(method: &Method, url: &str, pairings: &Pairings) -> HttpResponse {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let route_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .filter(|rest| matches!(*rest, "/query" | "/status"))
        .unwrap_or(path);

    match (method, route_path) {
        // Static pages
        (&Method::Get, "/" | "/index.html") => text_response(INDEX_HTML, "text/html; charset=utf-8"),
        (&Method::Get, "/style.css") => text_response(STYLE_CSS, "text/css; charset=utf-8"),
        (&Method::Get, "/health") => text_response("ok", "text/plain; charset=utf-8"),

        // Lookup API
        (&Method::Get, "/query") => handle_result(api::lookup(pairings, &parse_lookup(query))),
        (&Method::Get, "/status") => success_response(api::get_status(pairings)),

        (_, "/" | "/index.html" | "/style.css" | "/health" | "/query" | "/status") => {
            error_response(&ApiError::method_not_allowed(format!(
                "{method} not allowed on {route_path}"
            )))
        },

        _ => error_response(&ApiError::not_found(format!(
            "Endpoint not found: {method} {path}"
        ))),
    }
}

/// Read the `name` parameter from a query string
fn parse_lookup(query: &str) -> LookupRequest {
    let name = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.into_owned());
    LookupRequest { name }
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> HttpResponse {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_response(&e),
    }
}

/// Create a successful JSON response
fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(&ApiResponse::success(data), 200)
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> HttpResponse {
    json_response(&ApiResponse::error(error), error.status_code())
}

/// Serialize data to JSON response with status code.
///
/// A body that fails to serialize becomes a 500 error envelope.
fn json_response<T: Serialize>(data: &T, status: u16) -> HttpResponse {
    match serde_json::to_string(data) {
        Ok(json) => json_body(json, status),
        Err(e) => {
            log::error!("failed to serialize response: {e}");
            let error = ApiError::internal("Failed to serialize response");
            let json = serde_json::to_string(&ApiResponse::error(&error))
                .unwrap_or_else(|_| r#"{"success":false}"#.to_string());
            json_body(json, error.status_code())
        },
    }
}

fn json_body(json: String, status: u16) -> HttpResponse {
    Response::from_data(json.into_bytes())
        .with_header(content_type("application/json"))
        .with_status_code(StatusCode(status))
}

fn text_response(body: &str, mime: &str) -> HttpResponse {
    Response::from_data(body.as_bytes().to_vec()).with_header(content_type(mime))
}

fn content_type(value: &str) -> Header {
    Header::from_bytes("Content-Type", value).expect("content type is plain ASCII")
}

//! Same-origin `/api` bridge to the external marketplace backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks to `/api/...` on this server; each request is
//! forwarded to the backend with its credentials (`Cookie`,
//! `Authorization`) intact, and `Set-Cookie` headers flow back so the
//! backend can manage its own session cookie.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body the proxy will forward upstream.
const MAX_PROXY_BODY_BYTES: usize = 1024 * 1024;

/// Strip the `/api` mount prefix, keeping the query string.
pub(crate) fn strip_api_prefix(path_and_query: &str) -> &str {
    path_and_query.strip_prefix("/api").unwrap_or(path_and_query)
}

/// Forward one request to the backend and relay the response.
pub async fn forward(State(state): State<AppState>, req: Request) -> Response {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_owned(), |pq| pq.as_str().to_owned());
    let url = format!("{}{}", state.api_base_url, strip_api_prefix(&path_and_query));

    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .unwrap_or(reqwest::Method::GET);
    let mut upstream = state.http.request(method, &url);
    for name in [header::COOKIE, header::AUTHORIZATION, header::CONTENT_TYPE] {
        if let Some(value) = req.headers().get(&name).and_then(|v| v.to_str().ok()) {
            upstream = upstream.header(name.as_str(), value);
        }
    }

    let body = match axum::body::to_bytes(req.into_body(), MAX_PROXY_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
    };
    if !body.is_empty() {
        upstream = upstream.body(body.to_vec());
    }

    match upstream.send().await {
        Ok(response) => relay(response).await,
        Err(e) => {
            tracing::error!(error = %e, %url, "backend proxy request failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

async fn relay(response: reqwest::Response) -> Response {
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);

    let mut headers = HeaderMap::new();
    if let Some(content_type) = response.headers().get(reqwest::header::CONTENT_TYPE) {
        if let Ok(value) = axum::http::HeaderValue::from_bytes(content_type.as_bytes()) {
            headers.insert(header::CONTENT_TYPE, value);
        }
    }
    for cookie in response.headers().get_all(reqwest::header::SET_COOKIE) {
        if let Ok(value) = axum::http::HeaderValue::from_bytes(cookie.as_bytes()) {
            headers.append(header::SET_COOKIE, value);
        }
    }

    let body = response.bytes().await.unwrap_or_default();
    (status, headers, body).into_response()
}

use crate::domain::payment::PaymentRequest;
use crate::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;

pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<PaymentRequest>,
) -> impl IntoResponse {
    if state.trust_forwarded_headers {
        if let Some(ip) = forwarded_client_ip(&headers) {
            tracing::debug!("payment request from {}", ip);
        }
    }

    match state.payment_service.process(req) {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}

// First hop of x-forwarded-for, trusted only when the process sits behind
// a reverse proxy.
fn forwarded_client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::forwarded_client_ip;
    use axum::http::HeaderMap;

    #[test]
    fn takes_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.9, 10.0.0.1".parse().unwrap());
        assert_eq!(forwarded_client_ip(&headers).as_deref(), Some("203.0.113.9"));
    }

    #[test]
    fn absent_header_yields_none() {
        assert_eq!(forwarded_client_ip(&HeaderMap::new()), None);
    }
}

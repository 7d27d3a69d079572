use crate::audit::{AuditEntry, AuditSink};
use crate::domain::payment::{masked_card, ErrorEnvelope, PaymentRequest, PaymentResponse};
use crate::token::tokenize;
use crate::validation::{is_valid_card, is_valid_cvv};
use axum::http::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct PaymentService {
    pub audit: Arc<dyn AuditSink>,
}

impl PaymentService {
    pub fn new(audit: Arc<dyn AuditSink>) -> Self {
        Self { audit }
    }

    /// Validate, tokenize, and audit one payment request. The raw card
    /// number and CVV never reach the response or any log line; rejections
    /// carry a generic message and no field detail.
    pub fn process(
        &self,
        req: PaymentRequest,
    ) -> Result<PaymentResponse, (StatusCode, ErrorEnvelope)> {
        let card_number = present(&req.card_number)?;
        let cvv = present(&req.cvv)?;
        present(&req.expiry)?;

        if !is_valid_card(card_number) || !is_valid_cvv(cvv) {
            return Err((
                StatusCode::BAD_REQUEST,
                ErrorEnvelope { error: "Invalid card details" },
            ));
        }

        let token = tokenize(card_number);
        self.audit
            .append(AuditEntry::processed(masked_card(card_number), token.clone()));

        Ok(PaymentResponse {
            status: "Payment processed securely",
            token,
        })
    }
}

fn present(field: &Option<String>) -> Result<&str, (StatusCode, ErrorEnvelope)> {
    match field.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err((
            StatusCode::BAD_REQUEST,
            ErrorEnvelope { error: "Invalid payload" },
        )),
    }
}

use serde::{Deserialize, Serialize};

/// Inbound payload. Fields are optional so a body with missing keys still
/// deserializes and can be rejected with the generic payload error instead
/// of a framework-level failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub card_number: Option<String>,
    pub cvv: Option<String>,
    pub expiry: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub status: &'static str,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub error: &'static str,
}

/// Display form for the audit trail: the last four characters of the raw
/// input after the fixed mask. Shorter inputs keep whatever trails.
pub fn masked_card(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("**** **** **** {tail}")
}

#[cfg(test)]
mod tests {
    use super::masked_card;

    #[test]
    fn masks_all_but_last_four() {
        assert_eq!(masked_card("4532015112830366"), "**** **** **** 0366");
        assert_eq!(masked_card("4532-0151-1283-0366"), "**** **** **** 0366");
    }

    #[test]
    fn short_inputs_keep_the_mask_prefix() {
        assert_eq!(masked_card("42"), "**** **** **** 42");
        assert_eq!(masked_card(""), "**** **** **** ");
    }
}

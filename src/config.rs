#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub audit_log_path: String,
    pub trust_forwarded_headers: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            audit_log_path: std::env::var("AUDIT_LOG_PATH")
                .unwrap_or_else(|_| "audit.log".to_string()),
            trust_forwarded_headers: std::env::var("TRUST_FORWARDED_HEADERS")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        }
    }
}

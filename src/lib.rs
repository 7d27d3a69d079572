pub mod audit;
pub mod config;
pub mod domain {
    pub mod payment;
}
pub mod http {
    pub mod handlers {
        pub mod payments;
    }
}
pub mod service {
    pub mod payment_service;
}
pub mod token;
pub mod validation;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
    pub trust_forwarded_headers: bool,
}

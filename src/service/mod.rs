pub mod auth;
pub mod coinpayments;
pub mod ipn;

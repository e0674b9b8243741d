pub mod error;
pub mod health_check;
pub mod ipn;
pub mod response;

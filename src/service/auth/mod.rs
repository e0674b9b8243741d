pub mod error;
pub mod hmac;

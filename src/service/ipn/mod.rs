pub mod error;
pub mod fields;
pub mod notification;
pub mod service;

pub mod api;
pub mod command;
pub mod error;
pub mod ipn;

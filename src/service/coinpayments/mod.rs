pub mod account;
pub mod command;
pub mod conversion;
pub mod error;
pub mod pbn;
pub mod service;
pub mod transaction;
pub mod transfer;

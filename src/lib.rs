pub mod account;
pub mod bank;
pub mod demo;
pub mod entry;
pub mod error;
pub mod processor;

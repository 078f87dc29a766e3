#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod identity;
pub mod question_source;
pub mod quiz_flow;
pub mod result_store;

pub use quiz_core::time::Clock;

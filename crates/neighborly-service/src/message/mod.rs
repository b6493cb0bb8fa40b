//! Per-request message threads.

pub mod service;

pub use service::MessageService;

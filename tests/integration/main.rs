//! HTTP integration tests against an in-process router backed by the
//! memory store.

mod helpers;

mod auth_test;
mod lifecycle_test;
mod message_test;
mod notification_test;
mod stats_test;

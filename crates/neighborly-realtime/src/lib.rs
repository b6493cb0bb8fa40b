//! # neighborly-realtime
//!
//! Subscribe/notify engine. Services publish [`neighborly_core::events::DomainEvent`]s
//! to topics on the [`hub::EventHub`]; WebSocket connections subscribe to the
//! topics they observe and receive enveloped events until they drop their
//! subscription.

pub mod envelope;
pub mod hub;
pub mod subscription;
pub mod topic;

pub use envelope::EventEnvelope;
pub use hub::EventHub;
pub use subscription::Subscription;
pub use topic::Topic;

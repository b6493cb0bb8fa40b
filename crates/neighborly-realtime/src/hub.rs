//! In-memory event hub for single-node deployments.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tokio::sync::broadcast;
use tracing::debug;

use neighborly_core::events::DomainEvent;

use crate::envelope::EventEnvelope;
use crate::subscription::Subscription;
use crate::topic::Topic;

/// In-memory pub/sub hub over tokio broadcast channels.
///
/// Publishing to a topic with no subscribers is a no-op; slow subscribers
/// that fall behind the channel buffer observe a lag error and miss
/// events, never blocking publishers.
#[derive(Debug)]
pub struct EventHub {
    /// Channel name to broadcast sender.
    channels: RwLock<HashMap<String, broadcast::Sender<EventEnvelope>>>,
    /// Buffer size for each broadcast channel.
    buffer_size: usize,
}

impl EventHub {
    /// Create a new hub with the given per-channel buffer size.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            buffer_size,
        }
    }

    /// Publish an event to a topic.
    ///
    /// A channel whose last subscriber has gone away is dropped here, so
    /// the channel map does not accumulate entries for dead topics.
    pub async fn publish(&self, topic: Topic, event: DomainEvent) {
        let channel = topic.channel_name();
        let mut channels = self.channels.write().await;
        if let Some(tx) = channels.get(&channel) {
            match tx.send(EventEnvelope::new(&channel, event)) {
                Ok(delivered) => {
                    debug!(%channel, subscribers = delivered, "Published event");
                }
                Err(_) => {
                    channels.remove(&channel);
                    debug!(%channel, "Pruned channel with no subscribers");
                }
            }
        }
    }

    /// Subscribe to a topic. The subscription ends when it is dropped.
    pub async fn subscribe(&self, topic: Topic) -> Subscription {
        let channel = topic.channel_name();
        let mut channels = self.channels.write().await;
        let tx = channels
            .entry(channel.clone())
            .or_insert_with(|| broadcast::channel(self.buffer_size).0);
        Subscription::new(channel, tx.subscribe())
    }

    /// Number of live channels in the hub.
    pub async fn channel_count(&self) -> usize {
        self.channels.read().await.len()
    }
}

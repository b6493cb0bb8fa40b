//! A live subscription to one hub topic.

use tokio::sync::broadcast;
use tracing::warn;

use crate::envelope::EventEnvelope;

/// Receiving side of a topic subscription.
///
/// Dropping the subscription cancels it; there is no automatic timeout.
#[derive(Debug)]
pub struct Subscription {
    channel: String,
    receiver: broadcast::Receiver<EventEnvelope>,
}

impl Subscription {
    /// Wrap a broadcast receiver for the named channel.
    pub(crate) fn new(channel: String, receiver: broadcast::Receiver<EventEnvelope>) -> Self {
        Self { channel, receiver }
    }

    /// The channel name this subscription observes.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Wait for the next event.
    ///
    /// Returns `None` when the topic is closed. A subscriber that lags
    /// behind the buffer skips the missed events and continues from the
    /// oldest retained one.
    pub async fn recv(&mut self) -> Option<EventEnvelope> {
        loop {
            match self.receiver.recv().await {
                Ok(envelope) => return Some(envelope),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(channel = %self.channel, missed, "Subscription lagged; events skipped");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking receive; `None` when no event is ready.
    pub fn try_recv(&mut self) -> Option<EventEnvelope> {
        loop {
            match self.receiver.try_recv() {
                Ok(envelope) => return Some(envelope),
                Err(broadcast::error::TryRecvError::Lagged(missed)) => {
                    warn!(channel = %self.channel, missed, "Subscription lagged; events skipped");
                }
                Err(_) => return None,
            }
        }
    }
}

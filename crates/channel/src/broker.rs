use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One registered subscriber on a topic.
struct Slot {
    id: u64,
    /// Endpoint that opened the subscription; publishes from the same
    /// endpoint are skipped.
    origin: u64,
    tx: Sender<String>,
}

#[derive(Default)]
struct BrokerInner {
    topics: Mutex<HashMap<String, Vec<Slot>>>,
    next_id: AtomicU64,
}

impl BrokerInner {
    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn topics(&self) -> MutexGuard<'_, HashMap<String, Vec<Slot>>> {
        // A publisher panicking mid-send must not take the registry down
        // with it; the map itself is always left consistent.
        self.topics.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Process-wide topic registry. Cheap to clone; clones share the registry.
#[derive(Clone, Default)]
pub struct Broker {
    inner: Arc<BrokerInner>,
}

impl Broker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an endpoint on a named topic.
    pub fn bridge(&self, topic: &str) -> ChannelBridge {
        ChannelBridge {
            topic: topic.to_owned(),
            endpoint: self.inner.next_id(),
            inner: Arc::clone(&self.inner),
        }
    }
}

/// An endpoint on a topic: publishes text payloads and opens subscriptions.
///
/// Clones share the endpoint identity, so a clone still does not receive
/// what the original sent.
#[derive(Clone)]
pub struct ChannelBridge {
    topic: String,
    endpoint: u64,
    inner: Arc<BrokerInner>,
}

impl ChannelBridge {
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Serialize the payload to text and publish it on the topic.
    ///
    /// At-most-once, no acknowledgment, no backpressure. A payload that
    /// fails to serialize is dropped, like any other send failure.
    pub fn send<T: Serialize>(&self, payload: &T) {
        match serde_json::to_string(payload) {
            Ok(text) => self.publish(text),
            Err(err) => {
                tracing::debug!(topic = %self.topic, %err, "dropping unserializable payload");
            }
        }
    }

    fn publish(&self, text: String) {
        let mut topics = self.inner.topics();
        let Some(slots) = topics.get_mut(&self.topic) else {
            tracing::trace!(topic = %self.topic, "publish with no subscribers");
            return;
        };
        slots.retain(|slot| {
            if slot.origin == self.endpoint {
                return true;
            }
            match slot.tx.send(text.clone()) {
                Ok(()) => true,
                Err(_) => {
                    tracing::debug!(topic = %self.topic, "pruning closed subscriber");
                    false
                }
            }
        });
    }

    /// Register a subscriber on this endpoint's topic.
    ///
    /// Messages arrive in each sender's publish order; no ordering holds
    /// across distinct senders.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        let id = self.inner.next_id();
        self.inner
            .topics()
            .entry(self.topic.clone())
            .or_default()
            .push(Slot {
                id,
                origin: self.endpoint,
                tx,
            });
        tracing::debug!(topic = %self.topic, id, "subscribed");
        Subscription {
            id,
            topic: self.topic.clone(),
            inner: Arc::clone(&self.inner),
            rx,
        }
    }
}

/// A live subscription. Dropping it unsubscribes and closes the inbox.
pub struct Subscription {
    id: u64,
    topic: String,
    inner: Arc<BrokerInner>,
    rx: Receiver<String>,
}

impl Subscription {
    /// Take the next queued message, if any.
    pub fn try_recv(&self) -> Option<String> {
        self.rx.try_recv().ok()
    }

    /// Invoke the handler once per queued inbound message, in arrival
    /// order. Returns how many messages were handled.
    pub fn pump(&self, mut handler: impl FnMut(&str)) -> usize {
        let mut handled = 0;
        while let Ok(text) = self.rx.try_recv() {
            handler(&text);
            handled += 1;
        }
        handled
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut topics = self.inner.topics();
        if let Some(slots) = topics.get_mut(&self.topic) {
            slots.retain(|slot| slot.id != self.id);
            if slots.is_empty() {
                topics.remove(&self.topic);
            }
        }
        tracing::debug!(topic = %self.topic, id = self.id, "unsubscribed");
    }
}

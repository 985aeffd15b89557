//! Glue between the channel and the view: decode inbound snapshots into the
//! store, dispatch outbound clicks as commands.

use woodview_channel::{ChannelBridge, Subscription};
use woodview_common::Entity;
use woodview_input::{CommandDispatcher, PointerEvent};
use woodview_protocol::decode_snapshot;
use woodview_store::ViewStore;

/// Owns the client side of the state-synchronization loop.
///
/// Decode failures are isolated per message: the snapshot is dropped, the
/// previous store state stays visible, and the subscription keeps running.
pub struct ViewBinding {
    store: ViewStore,
    subscription: Subscription,
    dispatcher: CommandDispatcher,
    dropped: u64,
}

impl ViewBinding {
    /// Subscribe on the bridge and wire the decode-and-apply path.
    pub fn attach(bridge: &ChannelBridge) -> Self {
        Self {
            subscription: bridge.subscribe(),
            dispatcher: CommandDispatcher::new(bridge.clone()),
            store: ViewStore::new(),
            dropped: 0,
        }
    }

    /// Register the redraw hook on the underlying store.
    pub fn on_redraw(&mut self, hook: impl FnMut(&[Entity]) + 'static) {
        self.store.on_redraw(hook);
    }

    /// Handle all queued inbound messages. Returns how many were handled
    /// (applied or dropped).
    pub fn pump(&mut self) -> usize {
        let store = &mut self.store;
        let dropped = &mut self.dropped;
        self.subscription.pump(|raw| match decode_snapshot(raw) {
            Ok(entities) => store.apply(entities),
            Err(err) => {
                *dropped += 1;
                tracing::warn!(%err, "dropping malformed snapshot");
            }
        })
    }

    /// Forward a click to the simulation as a creation command.
    pub fn click(&self, event: &PointerEvent) {
        self.dispatcher.click(event);
    }

    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    /// Snapshots rejected since attach.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

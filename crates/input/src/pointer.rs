use woodview_channel::ChannelBridge;
use woodview_common::PagePoint;
use woodview_protocol::command;

/// A raw pointer click, carrying page-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub page_x: f64,
    pub page_y: f64,
}

/// Map a pointer event to a page-space point. No transform is applied;
/// page space is the domain space of creation commands.
pub fn pointer_to_page(event: &PointerEvent) -> PagePoint {
    PagePoint::new(event.page_x, event.page_y)
}

/// Turns clicks into creation commands and sends them over the channel.
pub struct CommandDispatcher {
    bridge: ChannelBridge,
}

impl CommandDispatcher {
    pub fn new(bridge: ChannelBridge) -> Self {
        Self { bridge }
    }

    /// One click, one command. Fire-and-forget, like everything on the wire.
    pub fn click(&self, event: &PointerEvent) {
        self.create_entity(pointer_to_page(event));
    }

    /// Request creation of an entity at the given point.
    pub fn create_entity(&self, point: PagePoint) {
        let command = command::create_entity(point);
        tracing::debug!(x = point.x, y = point.y, "dispatching CreateEntity");
        self.bridge.send(&command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use woodview_channel::Broker;
    use woodview_protocol::{CHANNEL_TOPIC, Command, decode_command};

    #[test]
    fn pointer_maps_to_page_point_unchanged() {
        let event = PointerEvent {
            page_x: 12.5,
            page_y: -3.0,
        };
        assert_eq!(pointer_to_page(&event), PagePoint::new(12.5, -3.0));
    }

    #[test]
    fn click_sends_one_create_command() {
        let broker = Broker::new();
        let worker_side = broker.bridge(CHANNEL_TOPIC).subscribe();
        let dispatcher = CommandDispatcher::new(broker.bridge(CHANNEL_TOPIC));

        dispatcher.click(&PointerEvent {
            page_x: 5.0,
            page_y: 6.0,
        });

        let raw = worker_side.try_recv().unwrap();
        let Command::CreateEntity(body) = decode_command(&raw).unwrap();
        assert_eq!((body.x, body.y, body.z), (5.0, 6.0, 0.0));
        assert_eq!(body.sx, 10.0);
        assert_eq!(worker_side.try_recv(), None);
    }
}

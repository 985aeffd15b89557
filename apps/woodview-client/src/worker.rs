//! Stand-in for the external simulation worker.
//!
//! Publishes full snapshots on the channel and consumes creation commands,
//! which is all the client needs to exercise both directions of the wire.
//! Deliberately not authoritative simulation logic.

use std::thread::JoinHandle;
use std::time::Duration;
use woodview_channel::ChannelBridge;
use woodview_common::{Body, Entity, EntityId};
use woodview_protocol::snapshot::snapshot_payload;
use woodview_protocol::{Command, decode_command};

const FALL_RATE: f64 = 30.0;
const FLOOR_Y: f64 = 600.0;

/// Spawn the demo worker on its own bridge endpoint. It publishes one
/// snapshot per tick and exits after `ticks`.
pub fn spawn_demo_worker(bridge: ChannelBridge, ticks: u32, interval: Duration) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let commands = bridge.subscribe();
        let dt = interval.as_secs_f64();

        let mut entities = vec![Entity {
            id: EntityId(1),
            body: Some(Body {
                x: 40.0,
                y: 40.0,
                z: 0.0,
                sx: 10.0,
                sy: 10.0,
                sz: 10.0,
            }),
        }];
        let mut next_id = 2;

        for _ in 0..ticks {
            commands.pump(|raw| match decode_command(raw) {
                Ok(Command::CreateEntity(body)) => {
                    tracing::debug!(id = next_id, x = body.x, y = body.y, "creating entity");
                    entities.push(Entity {
                        id: EntityId(next_id),
                        body: Some(body),
                    });
                    next_id += 1;
                }
                Err(err) => tracing::debug!(%err, "worker ignoring non-command payload"),
            });

            for entity in &mut entities {
                if let Some(body) = entity.body.as_mut() {
                    if body.y < FLOOR_Y {
                        body.y += FALL_RATE * dt;
                    }
                }
            }

            bridge.send(&snapshot_payload(&entities));
            std::thread::sleep(interval);
        }
        tracing::info!(entities = entities.len(), "demo worker done");
    })
}

//! Snapshot decoding and encoding.
//!
//! Wire form: a JSON sequence of `[entityId, [taggedComponent, ...]]` pairs,
//! where each tagged component is an object with exactly one key naming its
//! variant, e.g. `{"Body": {"x": 5.0, ...}}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use woodview_common::{Body, Entity, EntityId};

/// A tagged component as it appears on the wire.
///
/// Externally tagged, so `Component::Body(..)` serializes to
/// `{"Body": {...}}`. Decoding goes through [`decode_snapshot`] instead of
/// serde's enum machinery so that unknown tags stay ignorable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Component {
    Body(Body),
}

/// Why a snapshot payload was rejected.
///
/// Any of these fails the whole decode; the caller keeps its previous state.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("snapshot payload is not a sequence")]
    NotASequence,
    #[error("snapshot entry {0} is not an [id, components] pair")]
    MalformedEntry(usize),
    #[error("snapshot entry {0} has a non-integer entity id")]
    BadEntityId(usize),
    #[error("duplicate entity id {0} in snapshot")]
    DuplicateEntityId(EntityId),
    #[error("component list for entity {0} is not a sequence")]
    BadComponentList(EntityId),
    #[error("component on entity {0} is not a single-key tagged object")]
    MalformedComponent(EntityId),
    #[error("bad {tag} payload on entity {id}: {source}")]
    BadComponentPayload {
        id: EntityId,
        tag: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a raw snapshot payload into a fresh entity list.
///
/// Fail-fast: any structural deviation rejects the whole payload so a
/// corrupted world is never shown. Unknown component tags are the one
/// tolerated irregularity (forward compatibility with future variants).
pub fn decode_snapshot(raw: &str) -> Result<Vec<Entity>, DecodeError> {
    let payload: Value = serde_json::from_str(raw).map_err(DecodeError::Json)?;
    let items = payload.as_array().ok_or(DecodeError::NotASequence)?;

    let mut entities = Vec::with_capacity(items.len());
    let mut seen = HashSet::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let pair = item
            .as_array()
            .filter(|pair| pair.len() == 2)
            .ok_or(DecodeError::MalformedEntry(index))?;
        let id = pair[0]
            .as_u64()
            .map(EntityId)
            .ok_or(DecodeError::BadEntityId(index))?;
        if !seen.insert(id) {
            return Err(DecodeError::DuplicateEntityId(id));
        }

        let mut entity = Entity::new(id);
        let components = pair[1].as_array().ok_or(DecodeError::BadComponentList(id))?;
        for component in components {
            let object = component
                .as_object()
                .filter(|object| object.len() == 1)
                .ok_or(DecodeError::MalformedComponent(id))?;
            // len() == 1 above, so the iterator yields exactly one pair.
            if let Some((tag, data)) = object.iter().next() {
                apply_component(&mut entity, tag, data)?;
            }
        }

        entities.push(entity);
    }

    Ok(entities)
}

/// The single tag dispatch point. New component variants slot in here.
fn apply_component(entity: &mut Entity, tag: &str, data: &Value) -> Result<(), DecodeError> {
    match tag {
        "Body" => {
            // Last Body wins; fields are taken verbatim.
            let body =
                serde_json::from_value(data.clone()).map_err(|source| {
                    DecodeError::BadComponentPayload {
                        id: entity.id,
                        tag: tag.to_owned(),
                        source,
                    }
                })?;
            entity.body = Some(body);
        }
        other => {
            tracing::trace!(tag = other, entity = %entity.id, "ignoring unknown component tag");
        }
    }
    Ok(())
}

/// The wire value for an entity list, as `(id, components)` pairs.
pub fn snapshot_payload(entities: &[Entity]) -> Vec<(EntityId, Vec<Component>)> {
    entities
        .iter()
        .map(|entity| {
            let components = entity.body.map(Component::Body).into_iter().collect();
            (entity.id, components)
        })
        .collect()
}

/// Encode an entity list into the snapshot wire form.
pub fn encode_snapshot(entities: &[Entity]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&snapshot_payload(entities))
}

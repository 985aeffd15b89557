use glam::DVec2;
use woodview_common::{Body, Entity, EntityId};

/// Maps a 3D body to a point on the drawing plane.
///
/// Kept behind a trait so a camera or scale transform can replace the
/// placeholder policy without touching decode or store logic.
pub trait Projection {
    fn project(&self, body: &Body) -> DVec2;
}

/// Placeholder policy: take the `(x, y)` plane directly and drop `z`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanarProjection;

impl Projection for PlanarProjection {
    fn project(&self, body: &Body) -> DVec2 {
        DVec2::new(body.x, body.y)
    }
}

/// A drawable shape produced from one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Project the entity list into a scene. Entities without a body are
/// skipped; width and height come from the body scale.
pub fn project_scene(entities: &[Entity], projection: &dyn Projection) -> Vec<Rect> {
    entities
        .iter()
        .filter_map(|entity| {
            let body = entity.body.as_ref()?;
            let point = projection.project(body);
            Some(Rect {
                id: entity.id,
                x: point.x,
                y: point.y,
                width: body.sx,
                height: body.sy,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: u64, x: f64, y: f64, z: f64) -> Entity {
        Entity {
            id: EntityId(id),
            body: Some(Body {
                x,
                y,
                z,
                sx: 10.0,
                sy: 10.0,
                sz: 10.0,
            }),
        }
    }

    #[test]
    fn planar_projection_drops_z() {
        let scene = project_scene(&[entity(1, 5.0, 6.0, 99.0)], &PlanarProjection);
        assert_eq!(
            scene,
            [Rect {
                id: EntityId(1),
                x: 5.0,
                y: 6.0,
                width: 10.0,
                height: 10.0,
            }]
        );
    }

    #[test]
    fn bodyless_entities_are_not_drawable() {
        let entities = [Entity::new(EntityId(1)), entity(2, 0.0, 0.0, 0.0)];
        let scene = project_scene(&entities, &PlanarProjection);
        assert_eq!(scene.len(), 1);
        assert_eq!(scene[0].id, EntityId(2));
    }

    #[test]
    fn projection_is_swappable() {
        struct OffsetProjection(DVec2);
        impl Projection for OffsetProjection {
            fn project(&self, body: &Body) -> DVec2 {
                DVec2::new(body.x, body.y) + self.0
            }
        }

        let scene = project_scene(
            &[entity(1, 5.0, 6.0, 0.0)],
            &OffsetProjection(DVec2::new(100.0, -1.0)),
        );
        assert_eq!((scene[0].x, scene[0].y), (105.0, 5.0));
    }
}

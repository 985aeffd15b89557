use crate::projection::Rect;

/// Surface-agnostic render interface. A surface turns a projected scene
/// into its output representation and never mutates anything upstream.
pub trait Surface {
    type Output;

    fn render(&self, scene: &[Rect]) -> Self::Output;
}

/// Renders the scene as a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgSurface;

impl SvgSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for SvgSurface {
    type Output = String;

    fn render(&self, scene: &[Rect]) -> String {
        let mut out = String::from("<svg xmlns=\"http://www.w3.org/2000/svg\">\n");
        for rect in scene {
            out.push_str(&format!(
                "  <rect data-entity=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>\n",
                rect.id, rect.x, rect.y, rect.width, rect.height
            ));
        }
        out.push_str("</svg>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use woodview_common::EntityId;

    #[test]
    fn empty_scene_is_an_empty_document() {
        let markup = SvgSurface::new().render(&[]);
        assert_eq!(markup, "<svg xmlns=\"http://www.w3.org/2000/svg\">\n</svg>\n");
    }

    #[test]
    fn rects_carry_position_and_size() {
        let markup = SvgSurface::new().render(&[Rect {
            id: EntityId(1),
            x: 5.0,
            y: 6.0,
            width: 10.0,
            height: 10.0,
        }]);
        assert!(markup.contains("data-entity=\"1\""));
        assert!(markup.contains("x=\"5\" y=\"6\""));
        assert!(markup.contains("width=\"10\" height=\"10\""));
    }

    #[test]
    fn one_rect_per_shape() {
        let scene: Vec<Rect> = (0..3)
            .map(|n| Rect {
                id: EntityId(n),
                x: n as f64,
                y: 0.0,
                width: 1.0,
                height: 1.0,
            })
            .collect();
        let markup = SvgSurface::new().render(&scene);
        assert_eq!(markup.matches("<rect").count(), 3);
    }
}

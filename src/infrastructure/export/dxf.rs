//! Layout drawing (ASCII DXF, R12)
//!
//! Emits only what a CAD viewer needs to show the plan: a header naming the
//! file version and an ENTITIES section. The room outline is a POLYLINE with
//! the closing vertex repeated; each detector is a CIRCLE.

use std::fmt::Write;

use crate::domain::entities::LayoutDrawing;

/// Layer carrying the room outline
pub const ROOM_LAYER: &str = "ROOM";
/// Layer carrying detector markers
pub const DETECTOR_LAYER: &str = "DETECTORS";

const ACAD_R12: &str = "AC1009";

/// A drawable DXF entity
#[derive(Debug, Clone, PartialEq)]
pub enum DxfEntity {
    Polyline {
        layer: &'static str,
        vertices: Vec<(f64, f64)>,
    },
    Circle {
        layer: &'static str,
        center: (f64, f64),
        radius: f64,
    },
}

impl DxfEntity {
    fn write_to(&self, out: &mut String) {
        match self {
            DxfEntity::Polyline { layer, vertices } => {
                group(out, 0, "POLYLINE");
                group(out, 8, layer);
                // vertices follow
                group(out, 66, "1");
                group(out, 70, "0");
                point(out, (0.0, 0.0));
                for vertex in vertices {
                    group(out, 0, "VERTEX");
                    group(out, 8, layer);
                    point(out, *vertex);
                }
                group(out, 0, "SEQEND");
                group(out, 8, layer);
            }
            DxfEntity::Circle {
                layer,
                center,
                radius,
            } => {
                group(out, 0, "CIRCLE");
                group(out, 8, layer);
                point(out, *center);
                group(out, 40, &coord(*radius));
            }
        }
    }
}

/// Render the drawing as a complete DXF document.
pub fn render_dxf(drawing: &LayoutDrawing) -> String {
    let mut entities = Vec::with_capacity(drawing.markers().len() + 1);
    entities.push(DxfEntity::Polyline {
        layer: ROOM_LAYER,
        vertices: drawing.outline().to_vec(),
    });
    entities.extend(drawing.markers().iter().map(|m| DxfEntity::Circle {
        layer: DETECTOR_LAYER,
        center: (m.x, m.y),
        radius: drawing.marker_radius(),
    }));

    let mut out = String::new();
    group(&mut out, 0, "SECTION");
    group(&mut out, 2, "HEADER");
    group(&mut out, 9, "$ACADVER");
    group(&mut out, 1, ACAD_R12);
    group(&mut out, 0, "ENDSEC");

    group(&mut out, 0, "SECTION");
    group(&mut out, 2, "ENTITIES");
    for entity in &entities {
        entity.write_to(&mut out);
    }
    group(&mut out, 0, "ENDSEC");
    group(&mut out, 0, "EOF");
    out
}

fn group(out: &mut String, code: u16, value: &str) {
    // writing to a String cannot fail
    let _ = write!(out, "{}\n{}\n", code, value);
}

fn point(out: &mut String, (x, y): (f64, f64)) {
    group(out, 10, &coord(x));
    group(out, 20, &coord(y));
    group(out, 30, &coord(0.0));
}

fn coord(value: f64) -> String {
    format!("{:.6}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DetectorPosition, RoomGeometry};

    fn drawing(markers: Vec<DetectorPosition>) -> LayoutDrawing {
        LayoutDrawing::new(&RoomGeometry::new(20.0, 10.0).unwrap(), markers)
    }

    #[test]
    fn document_is_framed_by_sections_and_eof() {
        let dxf = render_dxf(&drawing(vec![]));
        assert!(dxf.starts_with("0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1009\n"));
        assert!(dxf.ends_with("0\nENDSEC\n0\nEOF\n"));
    }

    #[test]
    fn outline_has_five_vertices_in_order() {
        let dxf = render_dxf(&drawing(vec![]));
        assert_eq!(dxf.matches("\nVERTEX\n").count(), 5);
        let corner = "VERTEX\n8\nROOM\n10\n20.000000\n20\n10.000000\n";
        assert!(dxf.contains(corner), "missing far corner in:\n{dxf}");
    }

    #[test]
    fn one_circle_per_marker_with_fixed_radius() {
        let dxf = render_dxf(&drawing(vec![
            DetectorPosition::new(2.5, 2.5),
            DetectorPosition::new(2.5, 7.5),
        ]));
        assert_eq!(dxf.matches("\nCIRCLE\n").count(), 2);
        assert!(dxf.contains("CIRCLE\n8\nDETECTORS\n10\n2.500000\n20\n7.500000\n30\n0.000000\n40\n0.200000\n"));
    }

    #[test]
    fn entity_write_polyline_ends_with_seqend() {
        let mut out = String::new();
        DxfEntity::Polyline {
            layer: ROOM_LAYER,
            vertices: vec![(0.0, 0.0), (1.0, 0.0)],
        }
        .write_to(&mut out);
        assert!(out.ends_with("0\nSEQEND\n8\nROOM\n"));
    }
}

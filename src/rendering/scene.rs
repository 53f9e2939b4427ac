//! Frame builder: maps simulation state to an ordered primitive list
//!
//! Pure mapping from (state, parameters, static scene geometry) to a
//! [`Frame`]. Draw order is fixed: background grid first, then the static
//! structure geometry, then the dynamic overlays (displaced mass, rest
//! indicator, readout labels), so later primitives sit on top.

use crate::geometry::grid::GridSpec;
use crate::geometry::isometric::{Box3, IsoProjection, NVec2, NVec3, FACE_DRAW_ORDER};
use crate::rendering::primitives::{Frame, Rgba, Stroke};
use crate::simulation::engine::SimulationLoop;

// Palette
const GRID_COLOR: Rgba = Rgba::new(0.35, 0.38, 0.42, 0.35);
const GRID_MINOR_COLOR: Rgba = Rgba::new(0.35, 0.38, 0.42, 0.14);
const TRACE_COLOR: Rgba = Rgba::opaque(0.35, 0.75, 0.80);
const AXIS_COLOR: Rgba = Rgba::opaque(0.55, 0.58, 0.62);
const CONCRETE: Rgba = Rgba::opaque(0.62, 0.62, 0.60);
const STEEL: Rgba = Rgba::opaque(0.45, 0.55, 0.70);
const MASS_COLOR: Rgba = Rgba::opaque(0.80, 0.45, 0.25);
const REST_COLOR: Rgba = Rgba::opaque(0.85, 0.80, 0.30);
const TEXT_COLOR: Rgba = Rgba::opaque(0.92, 0.92, 0.92);

// Per-face shading factors, indexed to match FACE_DRAW_ORDER
// (right darkest, front mid, top lightest)
const FACE_SHADE: [f32; 3] = [0.55, 0.75, 1.0];

// Structure proportions in projection units
const FOUNDATION: (f64, f64, f64) = (220.0, 160.0, 26.0); // width, depth, height
const COLUMN: (f64, f64, f64) = (26.0, 26.0, 150.0);
const MASS: (f64, f64, f64) = (130.0, 100.0, 52.0);

// Response trace: visible time window and upward scroll rate
const TRACE_WINDOW_S: f64 = 4.0;
const TRACE_RISE_PX_PER_S: f64 = 20.0;

/// Runtime drawing-area layout, mapped from `DisplayConfig`
#[derive(Debug, Clone)]
pub struct SceneLayout {
    pub width: f64, // drawing area width, px
    pub height: f64, // drawing area height, px
    pub max_display_mm: f64, // rendered displacement magnitude clamp
    pub px_per_mm: f64, // horizontal scale of the displacement overlay
    pub grid_divisions: usize, // target background grid divisions
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            max_display_mm: 250.0,
            px_per_mm: 1.0,
            grid_divisions: 10,
        }
    }
}

impl SceneLayout {
    /// Displacement as drawn: finite values clamped to the display maximum,
    /// non-finite (resonance) saturated at the maximum with the same sign
    ///
    /// This is the sole place infinity meets geometry; NaN cannot reach it
    /// (the simulation loop holds the last finite value instead).
    pub fn display_displacement(&self, displacement_mm: f64) -> f64 {
        if displacement_mm.is_finite() {
            displacement_mm.clamp(-self.max_display_mm, self.max_display_mm)
        } else {
            self.max_display_mm.copysign(displacement_mm)
        }
    }

    fn projection(&self) -> IsoProjection {
        // structure sits in the lower half of the drawing area
        IsoProjection::new(
            NVec2::new(0.0, -self.height * 0.18),
            NVec3::new(1.0, 1.0, 1.0),
        )
    }
}

/// Build the complete primitive list for one tick
///
/// The frame is self-contained: the surface clears and redraws it whole.
pub fn build_frame(sim: &SimulationLoop, layout: &SceneLayout) -> Frame {
    let mut frame = Frame::new();

    draw_grid(&mut frame, layout);
    draw_displacement_axis(&mut frame, layout);

    let proj = layout.projection();
    draw_structure(&mut frame, layout, sim, &proj);
    draw_response_trace(&mut frame, layout, sim);
    draw_readout(&mut frame, layout, sim);

    frame
}

/// Background grid over the drawing area: minor lines first (lighter),
/// major lines on top
fn draw_grid(frame: &mut Frame, layout: &SceneLayout) {
    let major = Stroke::solid(GRID_COLOR, 1.0);
    let minor = Stroke::solid(GRID_MINOR_COLOR, 1.0);
    let (hw, hh) = (layout.width / 2.0, layout.height / 2.0);

    let xs = GridSpec::fit(-hw, hw, layout.grid_divisions);
    for x in xs.minor_ticks() {
        if x.abs() <= hw && !on_major(x, xs.spacing) {
            frame.line(NVec2::new(x, -hh), NVec2::new(x, hh), minor);
        }
    }
    for x in xs.ticks() {
        if x.abs() <= hw {
            frame.line(NVec2::new(x, -hh), NVec2::new(x, hh), major);
        }
    }
    let ys = GridSpec::fit(-hh, hh, layout.grid_divisions);
    for y in ys.minor_ticks() {
        if y.abs() <= hh && !on_major(y, ys.spacing) {
            frame.line(NVec2::new(-hw, y), NVec2::new(hw, y), minor);
        }
    }
    for y in ys.ticks() {
        if y.abs() <= hh {
            frame.line(NVec2::new(-hw, y), NVec2::new(hw, y), major);
        }
    }
}

/// True when a minor tick coincides with a major gridline
fn on_major(value: f64, major_spacing: f64) -> bool {
    let k = value / major_spacing;
    (k - k.round()).abs() < 1e-6
}

/// Labeled displacement scale along the bottom edge, in mm
fn draw_displacement_axis(frame: &mut Frame, layout: &SceneLayout) {
    let y = -layout.height / 2.0 + 30.0;
    let half_span_px = layout.max_display_mm * layout.px_per_mm;
    let stroke = Stroke::solid(AXIS_COLOR, 1.5);

    frame.line(
        NVec2::new(-half_span_px, y),
        NVec2::new(half_span_px, y),
        stroke,
    );

    let spec = GridSpec::fit(-layout.max_display_mm, layout.max_display_mm, 8);
    for mm in spec.ticks() {
        if mm.abs() > layout.max_display_mm {
            continue;
        }
        let x = mm * layout.px_per_mm;
        frame.line(NVec2::new(x, y - 4.0), NVec2::new(x, y + 4.0), stroke);
        frame.text(
            NVec2::new(x, y - 16.0),
            format!("{mm:.0}"),
            11.0,
            AXIS_COLOR,
        );
    }
    frame.text(
        NVec2::new(half_span_px + 36.0, y),
        "mm",
        11.0,
        AXIS_COLOR,
    );
}

/// Foundation, column and displaced mass as isometric boxes
fn draw_structure(frame: &mut Frame, layout: &SceneLayout, sim: &SimulationLoop, proj: &IsoProjection) {
    let (fw, fd, fh) = FOUNDATION;
    let (cw, cd, ch) = COLUMN;
    let (mw, md, mh) = MASS;

    // static geometry, ground up
    let foundation = Box3::new(NVec3::new(0.0, fh / 2.0, 0.0), fw, fd, fh, proj);
    draw_box(frame, &foundation, CONCRETE);

    let column_base = fh;
    let column = Box3::new(
        NVec3::new(0.0, column_base + ch / 2.0, 0.0),
        cw,
        cd,
        ch,
        proj,
    );
    draw_box(frame, &column, STEEL);

    // dynamic overlay: mass box offset by the clamped displacement
    let dx = layout.display_displacement(sim.state().displacement_mm) * layout.px_per_mm;
    let mass_center_y = column_base + ch + mh / 2.0;
    let mass = Box3::new(NVec3::new(dx, mass_center_y, 0.0), mw, md, mh, proj);
    draw_box(frame, &mass, MASS_COLOR);

    // dashed rest-position indicator, column base to mass top
    let rest_top = proj.project(NVec3::new(0.0, mass_center_y + mh / 2.0, 0.0));
    let rest_bottom = proj.project(NVec3::new(0.0, column_base, 0.0));
    frame.line(
        rest_top,
        rest_bottom,
        Stroke::dashed(REST_COLOR, 1.0, 6.0, 4.0),
    );
}

/// Recent displacement history as a rising polyline above the axis
///
/// Horizontal position reuses the displacement-axis mm scale; vertical
/// position encodes sample age, newest at the top. Samples older than
/// the window are dropped. Needs at least two samples to draw.
fn draw_response_trace(frame: &mut Frame, layout: &SceneLayout, sim: &SimulationLoop) {
    if sim.log().len() < 2 {
        return;
    }
    let t_latest = sim.state().t;
    let base_y = -layout.height / 2.0 + 40.0;

    let points: Vec<NVec2> = sim
        .log()
        .iter()
        .filter(|(t, _)| t_latest - t <= TRACE_WINDOW_S)
        .map(|&(t, x)| {
            let age = t_latest - t;
            NVec2::new(
                layout.display_displacement(x) * layout.px_per_mm,
                base_y + (TRACE_WINDOW_S - age) * TRACE_RISE_PX_PER_S,
            )
        })
        .collect();

    if points.len() >= 2 {
        frame.polyline(points, Stroke::solid(TRACE_COLOR, 1.0));
    }
}

/// Emit one box as filled faces plus outlines, fixed back-to-front order
///
/// There is no depth buffer: the right/front/top order of
/// [`FACE_DRAW_ORDER`] is the sole occlusion mechanism.
pub fn draw_box(frame: &mut Frame, b: &Box3, base: Rgba) {
    for (face, shade) in FACE_DRAW_ORDER.iter().zip(FACE_SHADE) {
        let outline = b.face_outline(*face);
        frame.polygon(
            outline.to_vec(),
            base.shaded(shade),
            Some(Stroke::solid(base.shaded(0.3), 1.0)),
        );
    }
}

/// Derived-value readout in the top-left corner
fn draw_readout(frame: &mut Frame, layout: &SceneLayout, sim: &SimulationLoop) {
    let d = sim.derived();
    let s = sim.state();
    let x = -layout.width / 2.0 + 14.0;
    let mut y = layout.height / 2.0 - 20.0;

    let amplification = if d.amplification.is_finite() {
        format!("{:.2}", d.amplification)
    } else {
        "resonance".to_string()
    };

    let lines = [
        format!("fn = {:.3} Hz   T = {:.3} s", d.natural_hz, d.period),
        format!("r = {:.3}   D = {}", d.frequency_ratio, amplification),
        format!("t = {:.2} s   x = {:+.1} mm", s.t, layout.display_displacement(s.displacement_mm)),
    ];
    for line in lines {
        frame.text(NVec2::new(x, y), line, 13.0, TEXT_COLOR);
        y -= 18.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::primitives::Primitive;
    use crate::simulation::params::OscillatorParameters;

    fn test_sim() -> SimulationLoop {
        SimulationLoop::new(OscillatorParameters::default()).unwrap()
    }

    #[test]
    fn frame_is_ordered_grid_then_structure_then_text() {
        let frame = build_frame(&test_sim(), &SceneLayout::default());
        assert!(!frame.is_empty());

        let first_polygon = frame
            .iter()
            .position(|p| matches!(p, Primitive::Polygon { .. }))
            .unwrap();
        let last_text = frame
            .iter()
            .rposition(|p| matches!(p, Primitive::Text { .. }))
            .unwrap();

        // some grid line precedes the first structure polygon, and the
        // readout text comes after everything else
        let first_line = frame
            .iter()
            .position(|p| matches!(p, Primitive::Line { .. }))
            .unwrap();
        assert!(first_line < first_polygon);
        assert!(last_text > first_polygon);
        assert_eq!(last_text, frame.len() - 1);
    }

    #[test]
    fn resonance_is_saturated_not_garbled() {
        let layout = SceneLayout::default();
        assert_eq!(
            layout.display_displacement(f64::INFINITY),
            layout.max_display_mm
        );
        assert_eq!(
            layout.display_displacement(f64::NEG_INFINITY),
            -layout.max_display_mm
        );
        assert_eq!(layout.display_displacement(1.0e9), layout.max_display_mm);
        assert_eq!(layout.display_displacement(12.5), 12.5);
    }

    #[test]
    fn every_frame_is_self_contained() {
        // identical state must produce an identical list (no diffing)
        let sim = test_sim();
        let layout = SceneLayout::default();
        let a = build_frame(&sim, &layout);
        let b = build_frame(&sim, &layout);
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn grid_draws_minor_lines_under_major_lines() {
        let layout = SceneLayout::default();
        let frame = build_frame(&test_sim(), &layout);

        let count_lines = |color: Rgba| {
            frame
                .iter()
                .filter(|p| matches!(p, Primitive::Line { stroke, .. } if stroke.color == color))
                .count()
        };
        let minors = count_lines(GRID_MINOR_COLOR);
        let majors = count_lines(GRID_COLOR);
        assert!(majors > 0);
        // subdividing by 4 or 5 leaves more minor lines than major ones
        assert!(minors > majors, "minors {minors} <= majors {majors}");

        // no minor line is emitted on a major gridline position
        let xs = GridSpec::fit(-layout.width / 2.0, layout.width / 2.0, layout.grid_divisions);
        for p in frame.iter() {
            if let Primitive::Line { from, to, stroke } = p {
                if stroke.color == GRID_MINOR_COLOR && from.x == to.x {
                    assert!(!on_major(from.x, xs.spacing), "minor at major x {}", from.x);
                }
            }
        }
    }

    #[test]
    fn rest_indicator_spans_column_base_to_mass_top() {
        let layout = SceneLayout::default();
        let frame = build_frame(&test_sim(), &layout);
        let proj = layout.projection();

        let dashed = frame
            .iter()
            .find_map(|p| match p {
                Primitive::Line { from, to, stroke } if stroke.dash.is_some() => {
                    Some((*from, *to))
                }
                _ => None,
            })
            .expect("rest indicator present");

        let (_, _, fh) = FOUNDATION;
        let (_, _, ch) = COLUMN;
        let (_, _, mh) = MASS;
        assert_eq!(dashed.0, proj.project(NVec3::new(0.0, fh + ch + mh, 0.0)));
        assert_eq!(dashed.1, proj.project(NVec3::new(0.0, fh, 0.0)));
    }

    #[test]
    fn response_history_is_drawn_as_a_polyline() {
        let layout = SceneLayout::default();
        let mut sim = test_sim();

        // no samples yet, no trace
        let frame = build_frame(&sim, &layout);
        assert!(!frame
            .iter()
            .any(|p| matches!(p, Primitive::Polyline { .. })));

        sim.start();
        for _ in 0..30 {
            sim.tick(0.02);
        }
        let frame = build_frame(&sim, &layout);
        let points = frame
            .iter()
            .find_map(|p| match p {
                Primitive::Polyline { points, .. } => Some(points.clone()),
                _ => None,
            })
            .expect("trace present once samples exist");
        assert!(points.len() >= 2);

        // newest sample sits last, on the displacement-axis mm scale
        let expected_x =
            layout.display_displacement(sim.state().displacement_mm) * layout.px_per_mm;
        let last = points.last().unwrap();
        assert_eq!(last.x, expected_x);
        // older samples sit below newer ones
        for pair in points.windows(2) {
            assert!(pair[0].y < pair[1].y);
        }
    }

    #[test]
    fn boxes_emit_three_faces_in_fixed_order() {
        let mut frame = Frame::new();
        let proj = IsoProjection::default();
        let b = Box3::new(NVec3::zeros(), 10.0, 10.0, 10.0, &proj);
        draw_box(&mut frame, &b, MASS_COLOR);

        let fills: Vec<Rgba> = frame
            .iter()
            .filter_map(|p| match p {
                Primitive::Polygon { fill, .. } => Some(*fill),
                _ => None,
            })
            .collect();
        assert_eq!(fills.len(), 3);
        // shading brightens back-to-front: right < front < top
        assert!(fills[0].r < fills[1].r && fills[1].r < fills[2].r);
    }
}

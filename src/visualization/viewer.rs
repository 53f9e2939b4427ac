//! Bevy viewer: drives the simulation loop once per frame and renders
//! the primitive list with gizmos
//!
//! This is the surface-specific adapter on the far side of the rendering
//! pipeline's boundary: the core emits a [`Frame`](crate::rendering::primitives::Frame),
//! this module walks it in order. Keyboard controls: Space toggles
//! start/stop, R resets.

use bevy::prelude::*;

use crate::geometry::isometric::NVec2;
use crate::rendering::primitives::{Primitive, Rgba, Stroke};
use crate::rendering::scene::build_frame;
use crate::simulation::scenario::Scenario;

/// Line count used to fan-fill a quad (gizmos have no filled polygons)
const FILL_LINES: usize = 28;

/// Component tagging per-frame text entities for respawning
#[derive(Component)]
struct FrameText;

/// Convenience entrypoint: open the viewer on a built scenario
pub fn run_viewer(scenario: Scenario) {
    println!(
        "run_viewer: starting Bevy viewer, step = {} s, autostart = {}",
        scenario.step, scenario.autostart
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_viewer)
        .add_systems(Update, (control_system, tick_system, draw_system).chain())
        .run();
}

fn setup_viewer(mut commands: Commands, mut scenario: ResMut<Scenario>) {
    commands.spawn(Camera2dBundle::default());
    if scenario.autostart {
        scenario.sim.start();
    }
}

/// Space toggles start/stop, R resets (any state)
fn control_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::Space) {
        if scenario.sim.state().running {
            scenario.sim.stop();
        } else {
            scenario.sim.start();
        }
    }
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.sim.reset();
    }
}

/// One scheduled tick per rendered frame
fn tick_system(mut scenario: ResMut<Scenario>) {
    let Scenario { step, sim, .. } = &mut *scenario;
    sim.tick(*step);
}

/// Rebuild and draw the complete frame (clear-then-draw: gizmos are
/// immediate-mode, text entities are respawned)
fn draw_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut gizmos: Gizmos,
    texts: Query<Entity, With<FrameText>>,
) {
    for e in &texts {
        commands.entity(e).despawn();
    }

    let frame = build_frame(&scenario.sim, &scenario.layout);
    for primitive in frame.iter() {
        match primitive {
            Primitive::Line { from, to, stroke } => {
                draw_stroke(&mut gizmos, *from, *to, stroke);
            }
            Primitive::Polyline { points, stroke } => {
                for pair in points.windows(2) {
                    draw_stroke(&mut gizmos, pair[0], pair[1], stroke);
                }
            }
            Primitive::Polygon {
                points,
                fill,
                outline,
            } => {
                fill_quad(&mut gizmos, points, *fill);
                if let Some(stroke) = outline {
                    for i in 0..points.len() {
                        let next = (i + 1) % points.len();
                        draw_stroke(&mut gizmos, points[i], points[next], stroke);
                    }
                }
            }
            Primitive::Text {
                at,
                content,
                size,
                color,
            } => {
                commands.spawn((
                    Text2dBundle {
                        text: Text::from_section(
                            content.clone(),
                            TextStyle {
                                font_size: *size,
                                color: to_color(*color),
                                ..Default::default()
                            },
                        ),
                        transform: Transform::from_xyz(at.x as f32, at.y as f32, 1.0),
                        ..Default::default()
                    },
                    FrameText,
                ));
            }
        }
    }
}

/// Draw a styled segment; dashed strokes are segmented here since gizmo
/// lines are always solid. Stroke width is a gizmo-config-level setting in
/// Bevy and is not applied per line by this adapter.
fn draw_stroke(gizmos: &mut Gizmos, from: NVec2, to: NVec2, stroke: &Stroke) {
    let color = to_color(stroke.color);
    match stroke.dash {
        None => gizmos.line_2d(v(from), v(to), color),
        Some([on, off]) => {
            let a = v(from);
            let b = v(to);
            let length = a.distance(b);
            if length <= f32::EPSILON {
                return;
            }
            let dir = (b - a) / length;
            let mut s = 0.0;
            while s < length {
                let e = (s + on).min(length);
                gizmos.line_2d(a + dir * s, a + dir * e, color);
                s = e + off;
            }
        }
    }
}

/// Fan-fill a convex quad with lines interpolated between opposite edges
fn fill_quad(gizmos: &mut Gizmos, points: &[NVec2], fill: Rgba) {
    if points.len() != 4 {
        return;
    }
    let color = to_color(fill);
    let (p0, p1, p2, p3) = (v(points[0]), v(points[1]), v(points[2]), v(points[3]));
    for i in 0..=FILL_LINES {
        let t = i as f32 / FILL_LINES as f32;
        gizmos.line_2d(p0.lerp(p3, t), p1.lerp(p2, t), color);
    }
}

fn v(p: NVec2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

fn to_color(c: Rgba) -> Color {
    Color::srgba(c.r, c.g, c.b, c.a)
}

//! Per-frame geometry
//!
//! Turns a session snapshot into vertex lists in normalized device
//! coordinates. Drawing order: background, fish, particles, health bar.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::BAR_MAX_WIDTH;
use crate::sim::Snapshot;

/// Health bar placement
pub const BAR_LEFT: f32 = -0.8;
pub const BAR_TOP: f32 = -0.6;
pub const BAR_BOTTOM: f32 = -0.7;

/// Particle marker radius
pub const PARTICLE_RADIUS: f32 = 0.02;
const PARTICLE_SEGMENTS: u32 = 12;
const EYE_RADIUS: f32 = 0.012;
const EYE_POS: Vec2 = Vec2::new(0.5, 0.1);

const FISH_BODY: [Vec2; 8] = [
    Vec2::new(-0.5, 0.25),
    Vec2::new(-0.25, 0.45),
    Vec2::new(0.25, 0.45),
    Vec2::new(0.5, 0.25),
    Vec2::new(0.5, -0.25),
    Vec2::new(0.25, -0.45),
    Vec2::new(-0.25, -0.45),
    Vec2::new(-0.5, -0.25),
];
const FISH_TAIL: [Vec2; 3] = [
    Vec2::new(-0.3, 0.0),
    Vec2::new(-0.70, 0.45),
    Vec2::new(-0.70, -0.45),
];
const FISH_HEAD: [Vec2; 3] = [
    Vec2::new(0.5, 0.25),
    Vec2::new(0.5, -0.25),
    Vec2::new(0.65, 0.0),
];
const FISH_FIN: [Vec2; 3] = [
    Vec2::new(-0.2, 0.4),
    Vec2::new(0.0, 0.65),
    Vec2::new(0.2, 0.4),
];

/// Filled width of the health bar.
///
/// A full gauge returns exactly `max_width` so the fill never falls a hair
/// short of the border.
pub fn health_bar_width(gauge: u32, capacity: u32, max_width: f32) -> f32 {
    if capacity == 0 {
        return 0.0;
    }
    if gauge >= capacity {
        return max_width;
    }
    max_width * gauge as f32 / capacity as f32
}

/// Geometry for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub clear_color: [f32; 4],
    /// Triangle list
    pub triangles: Vec<Vertex>,
    /// Line list
    pub lines: Vec<Vertex>,
}

impl Frame {
    pub fn build(snapshot: &Snapshot<'_>) -> Self {
        let mut frame = Frame {
            clear_color: colors::CLEAR,
            ..Default::default()
        };

        frame.triangles.extend(shapes::rect(
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, 1.0),
            colors::BACKGROUND,
        ));

        let fish = snapshot.tint.to_rgba();
        for part in [&FISH_BODY[..], &FISH_TAIL[..], &FISH_HEAD[..], &FISH_FIN[..]] {
            frame.triangles.extend(shapes::convex_polygon(part, fish));
        }
        frame
            .triangles
            .extend(shapes::circle(EYE_POS, EYE_RADIUS, colors::FISH_EYE, 8));

        if snapshot.active {
            for &p in snapshot.particles {
                frame.lines.extend(shapes::circle_outline(
                    p,
                    PARTICLE_RADIUS,
                    colors::PARTICLE,
                    PARTICLE_SEGMENTS,
                ));
            }
        }

        let bar_min = Vec2::new(BAR_LEFT, BAR_BOTTOM);
        let bar_max = Vec2::new(BAR_LEFT + BAR_MAX_WIDTH, BAR_TOP);
        frame
            .triangles
            .extend(shapes::rect(bar_min, bar_max, colors::BAR_BACKGROUND));

        let width = health_bar_width(snapshot.gauge, snapshot.gauge_capacity, BAR_MAX_WIDTH);
        if width > 0.0 {
            frame.triangles.extend(shapes::rect(
                bar_min,
                Vec2::new(BAR_LEFT + width, BAR_TOP),
                colors::BAR_FILL,
            ));
        }
        frame
            .lines
            .extend(shapes::rect_outline(bar_min, bar_max, colors::BAR_BORDER));

        frame
    }

    /// Right edge of the green fill, if drawn
    pub fn bar_fill_right(&self) -> Option<f32> {
        self.triangles
            .iter()
            .filter(|v| v.color == colors::BAR_FILL)
            .map(|v| v.position[0])
            .reduce(f32::max)
    }
}

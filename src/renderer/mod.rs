//! Snapshot to draw list
//!
//! The engine never draws. This turns a snapshot into flat coloured rectangles
//! in painter's order, which the canvas front-end fills one by one.

use glam::Vec2;

use crate::sim::{GamePhase, ObstacleKind, Rect, Snapshot};

/// Packed 0xRRGGBB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const BACKGROUND: Color = Color(0x1a1a1a);
    pub const ROAD: Color = Color(0x4a4a4a);
    pub const LANE_MARK: Color = Color(0xffffff);
    pub const BORDER: Color = Color(0x2e59c9);
    pub const PLAYER: Color = Color(0x2e59c9);
    pub const PLAYER_CAP: Color = Color(0x1a4a8a);
    pub const HAZARD: Color = Color(0xff4444);
    pub const HAZARD_WINDOW: Color = Color(0x333333);
    pub const BONUS: Color = Color(0xffd23f);
    pub const SCRIM: Color = Color(0x000000);

    /// CSS hex string for `fillStyle`
    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.0 & 0xffffff)
    }
}

/// One filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub rect: Rect,
    pub color: Color,
    pub alpha: f32,
}

impl Quad {
    fn solid(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            alpha: 1.0,
        }
    }
}

/// Lane marking dash length and period along the road
const DASH_LEN: f32 = 20.0;
const DASH_PERIOD: f32 = 40.0;
const DASH_WIDTH: f32 = 4.0;
const BORDER_WIDTH: f32 = 5.0;

/// Build everything the canvas needs for one frame
pub fn draw_list(snapshot: &Snapshot) -> Vec<Quad> {
    let axis = snapshot.orientation;
    let track = snapshot.track;
    let field_along = axis.along(snapshot.field);
    let mut quads = Vec::with_capacity(snapshot.obstacles.len() * 2 + 32);

    // Rect from cross/along extents
    let band = |cross: f32, width: f32, along: f32, length: f32| Rect {
        pos: axis.compose(cross, along),
        size: axis.compose(width, length),
    };

    quads.push(Quad::solid(
        Rect {
            pos: Vec2::ZERO,
            size: snapshot.field,
        },
        Color::BACKGROUND,
    ));
    quads.push(Quad::solid(
        band(track.min, track.width(), 0.0, field_along),
        Color::ROAD,
    ));

    // Centre dashes scroll with the road
    let centre = (track.min + track.max) / 2.0 - DASH_WIDTH / 2.0;
    let offset = snapshot.distance.rem_euclid(DASH_PERIOD);
    let mut along = offset - DASH_PERIOD;
    while along < field_along {
        quads.push(Quad::solid(
            band(centre, DASH_WIDTH, along, DASH_LEN),
            Color::LANE_MARK,
        ));
        along += DASH_PERIOD;
    }

    quads.push(Quad::solid(
        band(track.min - BORDER_WIDTH, BORDER_WIDTH, 0.0, field_along),
        Color::BORDER,
    ));
    quads.push(Quad::solid(
        band(track.max, BORDER_WIDTH, 0.0, field_along),
        Color::BORDER,
    ));

    for obstacle in &snapshot.obstacles {
        let r = obstacle.rect;
        match obstacle.kind {
            ObstacleKind::Hazard => {
                quads.push(Quad::solid(r, Color::HAZARD));
                let width = axis.cross(r.size);
                quads.push(Quad::solid(
                    band(
                        axis.cross(r.pos) + 5.0,
                        (width - 10.0).max(0.0),
                        axis.along(r.pos) + 10.0,
                        15.0,
                    ),
                    Color::HAZARD_WINDOW,
                ));
            }
            ObstacleKind::Bonus => quads.push(Quad::solid(r, Color::BONUS)),
        }
    }

    // Bottle with its cap at the leading edge
    let p = snapshot.player;
    quads.push(Quad::solid(p, Color::PLAYER));
    let p_width = axis.cross(p.size);
    quads.push(Quad::solid(
        band(
            axis.cross(p.pos) + 5.0,
            (p_width - 10.0).max(0.0),
            axis.along(p.pos),
            15.0,
        ),
        Color::PLAYER_CAP,
    ));

    if matches!(snapshot.phase, GamePhase::Paused | GamePhase::GameOver) {
        quads.push(Quad {
            rect: Rect {
                pos: Vec2::ZERO,
                size: snapshot.field,
            },
            color: Color::SCRIM,
            alpha: 0.75,
        });
    }

    quads
}

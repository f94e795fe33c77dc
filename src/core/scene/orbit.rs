//=========================================================================
// Orbital Kinematics
//=========================================================================
//
// Position of an orbiting body at scene time `t`:
//
// ```text
//   angle(t)      = phase + speed * t
//   precession(t) = precession_phase + precession_speed * t
//   base_offset   = (rx cos angle, ry sin angle)
//   position(t)   = rotate(base_offset, precession(t))
// ```
//
// Draw order is ascending y of the position, a cheap pseudo-depth: bodies
// higher on screen sit "behind" the ones below them.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f64::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::render::Rgba;

//=== rotate ==============================================================

/// Standard 2-D rotation: `(x cosθ − y sinθ, x sinθ + y cosθ)`.
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Evaluates `phase + speed * t` in f64 and wraps into `[0, 2π)` so long
/// runs keep f32 precision.
fn wrapped_angle(phase: f32, speed: f32, t: f64) -> f32 {
    (phase as f64 + speed as f64 * t).rem_euclid(TAU) as f32
}

//=== Body ================================================================

/// One orbiting (or stationary) body.
///
/// Angles are in radians, speeds in radians per scene second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    pub name: String,
    pub radius: f32,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub stroke_width: f32,

    /// Orbit semi-axes `[rx, ry]`. `[0, 0]` keeps the body at the center.
    pub orbit: [f32; 2],

    pub speed: f32,
    pub phase: f32,
    pub precession_speed: f32,
    pub precession_phase: f32,

    /// Rotation of the body about its own center.
    pub spin_speed: f32,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            name: String::from("body"),
            radius: 10.0,
            fill: Rgba::rgb(200, 200, 200),
            stroke: Rgba::WHITE,
            stroke_width: 2.0,
            orbit: [0.0, 0.0],
            speed: 0.0,
            phase: 0.0,
            precession_speed: 0.0,
            precession_phase: 0.0,
            spin_speed: 0.0,
        }
    }
}

impl Body {
    pub fn angle(&self, t: f64) -> f32 {
        wrapped_angle(self.phase, self.speed, t)
    }

    pub fn precession(&self, t: f64) -> f32 {
        wrapped_angle(self.precession_phase, self.precession_speed, t)
    }

    pub fn spin(&self, t: f64) -> f32 {
        wrapped_angle(0.0, self.spin_speed, t)
    }

    /// Offset on the unprecessed orbit ellipse.
    pub fn base_offset(&self, angle: f32) -> Vec2 {
        let [rx, ry] = self.orbit;
        Vec2::new(rx * angle.cos(), ry * angle.sin())
    }

    /// Offset from the system center at scene time `t`.
    pub fn position(&self, t: f64) -> Vec2 {
        rotate(self.base_offset(self.angle(t)), self.precession(t))
    }

    pub fn has_orbit(&self) -> bool {
        self.orbit[0] > 0.0 || self.orbit[1] > 0.0
    }
}

//=== BodyState ===========================================================

/// A body evaluated at one instant.
#[derive(Debug, Clone, Copy)]
pub struct BodyState<'a> {
    pub body: &'a Body,
    pub position: Vec2,
    pub precession: f32,
    pub spin: f32,
}

//=== OrbitalSystem =======================================================

/// The set of bodies of one scene.
#[derive(Debug, Clone, Default)]
pub struct OrbitalSystem {
    bodies: Vec<Body>,
}

impl OrbitalSystem {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Evaluates every body at `t`, sorted back to front.
    ///
    /// Ascending y; bodies with equal y keep declaration order.
    pub fn snapshot(&self, t: f64) -> Vec<BodyState<'_>> {
        let mut states: Vec<_> = self
            .bodies
            .iter()
            .map(|body| BodyState {
                body,
                position: body.position(t),
                precession: body.precession(t),
                spin: body.spin(t),
            })
            .collect();

        states.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));
        states
    }
}

//=== Default System ======================================================

/// A central star and four planets on tilted, slowly precessing orbits.
pub fn default_bodies() -> Vec<Body> {
    vec![
        Body {
            name: "sun".into(),
            radius: 36.0,
            fill: Rgba::rgb(255, 196, 0),
            stroke: Rgba::rgb(255, 236, 160),
            stroke_width: 4.0,
            spin_speed: 0.3,
            ..Body::default()
        },
        Body {
            name: "ember".into(),
            radius: 8.0,
            fill: Rgba::rgb(200, 120, 90),
            orbit: [90.0, 32.0],
            speed: 1.6,
            precession_speed: 0.05,
            spin_speed: 2.0,
            ..Body::default()
        },
        Body {
            name: "azure".into(),
            radius: 16.0,
            fill: Rgba::rgb(70, 130, 220),
            orbit: [170.0, 60.0],
            speed: 0.9,
            phase: 2.0,
            precession_speed: 0.03,
            spin_speed: 1.2,
            ..Body::default()
        },
        Body {
            name: "jade".into(),
            radius: 13.0,
            fill: Rgba::rgb(80, 190, 120),
            orbit: [260.0, 92.0],
            speed: 0.55,
            phase: 4.0,
            precession_speed: -0.02,
            spin_speed: 0.8,
            ..Body::default()
        },
        Body {
            name: "amber".into(),
            radius: 24.0,
            fill: Rgba::rgb(210, 160, 90),
            orbit: [360.0, 128.0],
            speed: 0.3,
            phase: 1.0,
            precession_speed: 0.015,
            spin_speed: 0.5,
            ..Body::default()
        },
    ]
}

//=========================================================================
// Unit Tests
//=========================================================================

//! Core state types for the four-body simulation.
//!
//! - `Body` / `System` using `NVec2` (2D, `nalgebra` vectors)
//! - `Trail`: a capped history of recent positions, kept outside `Body`
//!   so numerical state and display bookkeeping stay separate
//!
//! The system holds the list of bodies and the current simulation time `t`.
//! Body identity is positional: the index into `System::bodies` is stable
//! for the whole run and is what the force model uses for self-exclusion.

use std::collections::VecDeque;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2,  // position
    pub v: NVec2,  // velocity
    pub m: f64,    // mass, must be positive (a tracer uses a tiny positive mass)
    pub color: u8, // display attribute, opaque to the core
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, index order stable
    pub t: f64,            // time, advanced by the fixed-step integrator
}

/// Capped-length history of recent positions for one body.
///
/// The playback layer draws these as orbit trails; the core only guarantees
/// that at most `cap` points are retained, oldest dropped first.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<NVec2>,
    cap: usize,
}

impl Trail {
    pub fn new(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// Append a position, evicting the oldest point when at capacity.
    pub fn push(&mut self, p: NVec2) {
        if self.points.len() == self.cap {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> {
        self.points.iter()
    }
}

//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and direct Newtonian gravity with a
//! small-distance regularization term. Unlike a whole-system pairwise sweep,
//! the trait is evaluated per target body at an arbitrary trial position:
//! the adaptive integrator needs accelerations at intermediate stage
//! positions that are never committed to the system.

use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per call
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration on body `target` evaluated at trial position `pos`,
    /// with every other body at its current state in `sys`
    pub fn acceleration_at(&self, target: usize, pos: NVec2, sys: &System) -> NVec2 {
        let mut acc = NVec2::zeros();
        for term in &self.terms {
            acc += term.acceleration_at(target, pos, sys);
        }
        acc
    }

    /// Fill `out[i]` with the total acceleration on body `i` at its own
    /// current position. Used by the fixed-step integrator, which must see
    /// all accelerations before any body is mutated.
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) {
        for (i, a) in out.iter_mut().enumerate() {
            *a = self.acceleration_at(i, sys.bodies[i].x, sys);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations return their contribution for one body at a trial position
pub trait Acceleration {
    fn acceleration_at(&self, target: usize, pos: NVec2, sys: &System) -> NVec2;
}

/// Direct Newtonian gravity with distance regularization
///
/// `eps` is added to the separation distance itself, so accelerations at a
/// coincidence are large but finite. This is a deliberate softening, not a
/// physical law; the force magnitude uses the regularized distance squared.
pub struct NewtonianGravity {
    pub g: f64,   // gravitational constant
    pub eps: f64, // regularization added to the separation distance
}

impl Acceleration for NewtonianGravity {
    fn acceleration_at(&self, target: usize, pos: NVec2, sys: &System) -> NVec2 {
        let m_t = sys.bodies[target].m;
        let mut acc = NVec2::zeros();

        for (j, other) in sys.bodies.iter().enumerate() {
            // Self-exclusion is by index, not by value, so two bodies with
            // identical state are still distinct sources.
            if j == target {
                continue;
            }

            // Displacement from the trial position toward body j
            let r = other.x - pos;
            let dist = r.dot(&r).sqrt() + self.eps;

            // F = G m_t m_j / d^2, then a = F * r_hat / m_t. The target mass
            // cancels; the factored form is kept so the arithmetic matches
            // the force-magnitude formulation bit for bit.
            let force = self.g * m_t * other.m / (dist * dist);
            acc.x += force * r.x / dist / m_t;
            acc.y += force * r.y / dist / m_t;
        }

        acc
    }
}

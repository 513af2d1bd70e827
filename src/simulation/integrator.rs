//! Time integrators for the four-body system
//!
//! Provides the two integration strategies driven by `AccelSet` and
//! `Parameters`:
//! - `rk4_step` / `rk4_update`: fixed-step 4-stage Runge-Kutta with the
//!   acceleration held constant across the sub-stages,
//! - `rkf45_step` / `rkf45_update_body`: adaptive embedded
//!   Runge-Kutta-Fehlberg 4(5) with local error estimation and a shared
//!   [`StepController`].

use anyhow::{bail, Result};

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance one scalar (position, velocity) pair by one fixed step.
///
/// The acceleration `a` is evaluated once per step and held constant across
/// all four stages; only the velocity estimates feed the position
/// combination. This is weaker than coupled RK4 for a second-order ODE
/// (roughly second-order accurate in position) but is the reference
/// behavior and is kept as-is rather than corrected.
pub fn rk4_step(x: f64, v: f64, a: f64, dt: f64) -> (f64, f64) {
    let k1x = v;
    let k1v = a;
    let k2x = v + 0.5 * dt * k1v;
    let k2v = a;
    let k3x = v + 0.5 * dt * k2v;
    let k3v = a;
    let k4x = v + dt * k3v;
    let k4v = a;

    let x_next = x + (dt / 6.0) * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
    let v_next = v + (dt / 6.0) * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    (x_next, v_next)
}

/// Advance the whole system by one fixed step of `params.h0`.
///
/// All accelerations are accumulated into a buffer before any body is
/// mutated, so body i's update always sees the pre-step state of every
/// other body regardless of index order. That ordering is an invariant of
/// the fixed-step mode, not an optimization.
pub fn rk4_update(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.h0;

    let mut acc = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, &mut acc);

    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        let (x, vx) = rk4_step(b.x.x, b.v.x, a.x, dt);
        let (y, vy) = rk4_step(b.x.y, b.v.y, a.y, dt);
        b.x = NVec2::new(x, y);
        b.v = NVec2::new(vx, vy);
    }

    sys.t += dt;
}

/// One embedded Runge-Kutta-Fehlberg 4(5) step for a scalar
/// (position, velocity) pair.
///
/// `accel` maps a trial (position, velocity) to an acceleration; it is
/// evaluated at the six Fehlberg stages (fractions 1/4, 3/8, 12/13, 1, 1/2
/// of the step). Returns the 5th-order estimates and the local truncation
/// error indicator `max(|x5 - x4|, |v5 - v4|)`.
pub fn rkf45_step<A>(x: f64, v: f64, accel: A, dt: f64) -> (f64, f64, f64)
where
    A: Fn(f64, f64) -> f64,
{
    let k1x = v;
    let k1v = accel(x, v);
    let k2x = v + 0.25 * dt * k1v;
    let k2v = accel(x + 0.25 * dt * k1x, v + 0.25 * dt * k1v);
    let k3x = v + (3.0 / 8.0) * dt * k2v;
    let k3v = accel(x + (3.0 / 8.0) * dt * k2x, v + (3.0 / 8.0) * dt * k2v);
    let k4x = v + (12.0 / 13.0) * dt * k3v;
    let k4v = accel(x + (12.0 / 13.0) * dt * k3x, v + (12.0 / 13.0) * dt * k3v);
    let k5x = v + dt * k4v;
    let k5v = accel(x + dt * k4x, v + dt * k4v);
    let k6x = v + 0.5 * dt * k5v;
    let k6v = accel(x + 0.5 * dt * k5x, v + 0.5 * dt * k5v);

    // 4th-order solution
    let x4 = x + dt * (25.0 / 216.0 * k1x + 1408.0 / 2565.0 * k3x + 2197.0 / 4104.0 * k4x
        - 1.0 / 5.0 * k5x);
    let v4 = v + dt * (25.0 / 216.0 * k1v + 1408.0 / 2565.0 * k3v + 2197.0 / 4104.0 * k4v
        - 1.0 / 5.0 * k5v);

    // 5th-order solution
    let x5 = x + dt * (16.0 / 135.0 * k1x + 6656.0 / 12825.0 * k3x
        + 28561.0 / 56430.0 * k4x - 9.0 / 50.0 * k5x + 2.0 / 55.0 * k6x);
    let v5 = v + dt * (16.0 / 135.0 * k1v + 6656.0 / 12825.0 * k3v
        + 28561.0 / 56430.0 * k4v - 9.0 / 50.0 * k5v + 2.0 / 55.0 * k6v);

    let error = (x5 - x4).abs().max((v5 - v4).abs());
    (x5, v5, error)
}

/// Shared adaptive step-size state for the rkf45 mode.
///
/// One controller is threaded through every per-body update of a run. It is
/// read and mutated in a fixed order (bodies in index order, x-axis then
/// y-axis per body), so the value seen by body 1 already reflects body 0's
/// accept/reject history within the same simulation step. That ordering is
/// part of the observable trajectory and must not be reshuffled.
#[derive(Debug, Clone)]
pub struct StepController {
    h: f64,
    tol: f64,
    h_min: f64,
}

impl StepController {
    pub fn new(h0: f64, tol: f64, h_min: f64) -> Self {
        Self { h: h0, tol, h_min }
    }

    /// Current trial step size
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Local error tolerance
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Grow the step after an accepted attempt.
    /// Zero error doubles the step; otherwise the classic controller
    /// `h *= (tol/err)^(1/5)` clamped to [0.5, 2] to avoid wild jumps.
    pub fn accept(&mut self, error: f64) {
        if error == 0.0 {
            self.h *= 2.0;
        } else {
            self.h *= (self.tol / error).powf(0.2).clamp(0.5, 2.0);
        }
    }

    /// Halve the step after a rejected attempt.
    ///
    /// Halving shrinks the local error by roughly 2^4..2^5 for a 4(5)
    /// scheme, so the retry loop converges for any sane tolerance. The
    /// floor turns a pathological configuration (tolerance tighter than
    /// floating-point precision allows) into a hard error instead of an
    /// endless loop.
    pub fn reject(&mut self) -> Result<()> {
        self.h *= 0.5;
        if self.h < self.h_min {
            bail!(
                "adaptive step size {:e} fell below the minimum {:e}; \
                 the error tolerance is too tight for this scenario",
                self.h,
                self.h_min
            );
        }
        Ok(())
    }
}

/// Attempt-and-retry adaptive update for body `i`.
///
/// Each axis is integrated independently with the other coordinate frozen
/// at its committed value: the x-axis step evaluates gravity at
/// `(x_trial, y_committed)` and the y-axis step at `(x_committed, y_trial)`.
/// The step is accepted only when `max(err_x, err_y)` is within tolerance;
/// a rejection leaves the body untouched, halves the shared step and
/// retries from the same state.
pub fn rkf45_update_body(
    sys: &mut System,
    i: usize,
    forces: &AccelSet,
    ctrl: &mut StepController,
) -> Result<()> {
    loop {
        let dt = ctrl.h();

        let (x_next, vx_next, err_x, y_next, vy_next, err_y) = {
            let sys_ref: &System = sys;
            let b = &sys_ref.bodies[i];
            let (x0, y0) = (b.x.x, b.x.y);
            let (vx0, vy0) = (b.v.x, b.v.y);

            // Gravity does not depend on velocity, but the stage functions
            // keep the (position, velocity) signature of the scheme.
            let ax = |x: f64, _v: f64| forces.acceleration_at(i, NVec2::new(x, y0), sys_ref).x;
            let ay = |y: f64, _v: f64| forces.acceleration_at(i, NVec2::new(x0, y), sys_ref).y;

            let (xn, vxn, ex) = rkf45_step(x0, vx0, ax, dt);
            let (yn, vyn, ey) = rkf45_step(y0, vy0, ay, dt);
            (xn, vxn, ex, yn, vyn, ey)
        };

        let error = err_x.max(err_y);
        if error <= ctrl.tol() {
            let b = &mut sys.bodies[i];
            b.x = NVec2::new(x_next, y_next);
            b.v = NVec2::new(vx_next, vy_next);
            ctrl.accept(error);
            return Ok(());
        }

        ctrl.reject()?;
    }
}

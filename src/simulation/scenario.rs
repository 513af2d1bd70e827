//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! Configuration defects (no bodies, non-positive mass, bad step sizes)
//! are rejected here, at setup time, rather than surfacing as numerical
//! garbage mid-run.

use anyhow::{bail, Result};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

const DEFAULT_H_MIN: f64 = 1e-12;

/// A fully-initialized, validated simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, initial system state, and
/// the set of active force laws. The driver takes an independent copy of the
/// system for its precompute pass, so the scenario's own bodies stay at
/// their initial state for the lifetime of the run.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = &cfg.parameters;
        if cfg.bodies.is_empty() {
            bail!("scenario defines no bodies");
        }
        if p_cfg.h0 <= 0.0 {
            bail!("step size h0 must be positive, got {}", p_cfg.h0);
        }
        if p_cfg.tol <= 0.0 {
            bail!("error tolerance must be positive, got {}", p_cfg.tol);
        }
        if p_cfg.eps <= 0.0 {
            bail!("distance regularization eps must be positive, got {}", p_cfg.eps);
        }
        if p_cfg.trail_max == 0 {
            bail!("trail_max must be at least 1");
        }
        if cfg.engine.steps == 0 {
            bail!("step count must be at least 1");
        }
        let h_min = p_cfg.h_min.unwrap_or(DEFAULT_H_MIN);
        if h_min <= 0.0 || h_min > p_cfg.h0 {
            bail!("h_min must be positive and no larger than h0, got {}", h_min);
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc))
            .collect::<Result<Vec<Body>>>()?;

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        let parameters = Parameters {
            g: p_cfg.g,
            eps: p_cfg.eps,
            h0: p_cfg.h0,
            tol: p_cfg.tol,
            h_min,
            trail_max: p_cfg.trail_max,
        };

        let e_cfg = cfg.engine;
        let engine = Engine {
            integrator: e_cfg.integrator,
            steps: e_cfg.steps,
            skip_frames: e_cfg.skip_frames,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            eps: parameters.eps,
        });

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }
}

fn build_body(i: usize, bc: &BodyConfig) -> Result<Body> {
    if bc.x.len() != 2 || bc.v.len() != 2 {
        bail!(
            "body {} must have 2-component position and velocity, got {} and {}",
            i,
            bc.x.len(),
            bc.v.len()
        );
    }
    // A near-massless tracer is fine, exact zero (or negative) is not:
    // the force model divides by the target mass.
    if bc.m <= 0.0 {
        bail!("body {} has non-positive mass {}", i, bc.m);
    }
    Ok(Body {
        x: NVec2::new(bc.x[0], bc.x[1]),
        v: NVec2::new(bc.v[0], bc.v[1]),
        m: bc.m,
        color: bc.color,
    })
}

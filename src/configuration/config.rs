//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – run mode (integrator, step count, playback skip)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "rkf45"   # or "rk4"
//!   steps: 20000          # precomputed trajectory length
//!   skip_frames: 30       # playback stride through the buffer
//!
//! parameters:
//!   g: 1.0                # gravitational constant
//!   eps: 1.0e-4           # distance regularization
//!   h0: 0.01              # initial/fixed step size
//!   tol: 5.0e-7           # local error tolerance (rkf45)
//!   h_min: 1.0e-12        # optional step floor, defaults to 1e-12
//!   trail_max: 100        # max trail points per body
//!
//! bodies:
//!   - x: [ 200.0, 200.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 50.0
//!     color: 8
//!   - x: [ 160.0, 200.0 ]
//!     v: [ 0.0, 1.118 ]
//!     m: 10.0
//!     color: 9
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation, validating it along the way.

use serde::Deserialize;

/// Which integrator method is used by the engine
/// `integrator: "rk4"` or `integrator: "rkf45"`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum IntegratorConfig {
    // Fixed-step 4-stage Runge-Kutta with acceleration held constant across
    // the stages. Needs small steps and large step counts.
    #[serde(rename = "rk4")]
    Rk4,

    // Adaptive embedded Runge-Kutta-Fehlberg 4(5). Variable step size,
    // fewer total steps, finer resolution near close encounters.
    #[serde(rename = "rkf45")]
    Rkf45,
}

/// High-level engine configuration
/// Controls the structure of the run
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the system
    pub steps: usize,                 // number of precomputed trajectory entries
    pub skip_frames: usize,           // stride the playback layer uses through the buffer
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64,            // gravitational constant
    pub eps: f64,          // distance regularization against coincident bodies
    pub h0: f64,           // step size (fixed for rk4, initial for rkf45)
    pub tol: f64,          // local error tolerance for rkf45
    pub h_min: Option<f64>, // step floor for the rejection loop
    pub trail_max: usize,  // max trail points retained per body
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position [x, y] in simulation units
    pub v: Vec<f64>, // initial velocity [vx, vy] in simulation units per time unit
    pub m: f64,      // mass of the body, must be positive
    pub color: u8,   // display attribute, passed through to playback
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // run mode (integrator, steps, skip)
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>,      // bodies defining the initial state
}

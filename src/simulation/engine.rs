//! High-level runtime engine settings
//!
//! Selects the integrator mode (fixed-step rk4 or adaptive rkf45) and the
//! per-mode run constants used when building and running a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // rk4 or rkf45
    pub steps: usize,                 // trajectory buffer length
    pub skip_frames: usize,           // playback stride through the buffer
}

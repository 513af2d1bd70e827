//! Ad-hoc timing harness
//!
//! Quick wall-clock measurements for the two hot paths: a full gravity
//! evaluation at several body counts, and a complete fixed-step precompute
//! of the reference four-body scenario. Invoked through `--bench` on the
//! CLI; results go to stdout.

use std::time::Instant;

use crate::configuration::config::{
    BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig,
};
use crate::simulation::driver::Simulation;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2, System};

pub fn bench_gravity() {
    // Different system sizes to test; the production scenario has 4 bodies,
    // the larger counts show the n^2 growth of the direct sum.
    let ns = [4, 8, 16, 32, 64, 128, 256];

    for n in ns {
        // Deterministic positions, no rand needed
        let mut bodies = Vec::with_capacity(n);
        for i in 0..n {
            let i_f = i as f64;
            bodies.push(Body {
                x: NVec2::new((i_f * 0.37).sin() * 100.0, (i_f * 0.13).cos() * 100.0),
                v: NVec2::zeros(),
                m: 1.0,
                color: 0,
            });
        }
        let sys = System { bodies, t: 0.0 };

        let gravity = AccelSet::new().with(NewtonianGravity { g: 1.0, eps: 1e-4 });
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.accumulate_accels(&sys, &mut out);

        let t0 = Instant::now();
        gravity.accumulate_accels(&sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:4}, gravity sweep = {dt:10.8} s");
    }
}

pub fn bench_precompute() {
    let steps = 10_000;
    let cfg = four_body_config(steps);
    let scenario = Scenario::build_scenario(cfg).expect("reference scenario is valid");

    let mut sim = Simulation::new(&scenario);
    let t0 = Instant::now();
    let trajectory = sim.run().expect("fixed-step run cannot fail");
    let dt = t0.elapsed().as_secs_f64();

    println!(
        "precompute: {} steps x {} bodies = {dt:8.6} s ({:.0} steps/s)",
        trajectory.len(),
        trajectory.body_count(),
        steps as f64 / dt
    );
}

/// The reference four-body setup: central mass, two counter-rotating
/// orbiters, one near-massless tracer.
fn four_body_config(steps: usize) -> ScenarioConfig {
    let center_mass = 50.0_f64;
    let orbit_radius = 40.0_f64;
    let orbit_speed = (center_mass / orbit_radius).sqrt();
    let tracer_radius = 20.0_f64;
    let tracer_speed = (center_mass / tracer_radius).sqrt();

    ScenarioConfig {
        engine: EngineConfig {
            integrator: IntegratorConfig::Rk4,
            steps,
            skip_frames: 1000,
        },
        parameters: ParametersConfig {
            g: 1.0,
            eps: 1e-4,
            h0: 0.001,
            tol: 5e-7,
            h_min: None,
            trail_max: 100,
        },
        bodies: vec![
            BodyConfig {
                x: vec![200.0, 200.0],
                v: vec![0.0, 0.0],
                m: center_mass,
                color: 8,
            },
            BodyConfig {
                x: vec![200.0 - orbit_radius, 200.0],
                v: vec![0.0, orbit_speed],
                m: 10.0,
                color: 9,
            },
            BodyConfig {
                x: vec![200.0 + orbit_radius, 200.0],
                v: vec![0.0, -orbit_speed],
                m: 10.0,
                color: 10,
            },
            BodyConfig {
                x: vec![200.0 + tracer_radius, 200.0],
                v: vec![0.0, -tracer_speed],
                m: center_mass / 100_000.0,
                color: 11,
            },
        ],
    }
}

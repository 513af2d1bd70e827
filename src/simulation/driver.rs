//! Batch precompute driver
//!
//! Runs the configured integrator over an independent copy of the scenario's
//! bodies for a fixed number of steps, recording every step's positions into
//! a [`TrajectoryBuffer`] that the playback layer consumes by step index.
//! Entry 0 of the buffer is the initial configuration; entry k holds the
//! positions before step k+1 is applied.
//!
//! The whole trajectory is computed synchronously before any playback
//! begins. Progress is reported at coarse intervals through `log` and has no
//! influence on the numerical result.

use anyhow::Result;
use log::info;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::integrator::{rk4_update, rkf45_update_body, StepController};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, System, Trail};

/// Immutable record of per-step body positions, one snapshot per step,
/// indexable by step number. Snapshots list bodies in the same stable order
/// as the system they were taken from.
pub struct TrajectoryBuffer {
    snapshots: Vec<Vec<NVec2>>,
}

impl TrajectoryBuffer {
    fn with_capacity(steps: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(steps),
        }
    }

    fn record(&mut self, sys: &System) {
        self.snapshots.push(sys.bodies.iter().map(|b| b.x).collect());
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Bodies per snapshot
    pub fn body_count(&self) -> usize {
        self.snapshots.first().map_or(0, |s| s.len())
    }

    /// Positions of all bodies before step `step + 1` was applied
    pub fn snapshot(&self, step: usize) -> &[NVec2] {
        &self.snapshots[step]
    }
}

/// One precompute pass over a scenario.
///
/// Owns a working copy of the body set (the scenario keeps its pristine
/// initial state), the shared step-size controller, and one display trail
/// per body. Bodies are processed in index order every step; in adaptive
/// mode the controller state carries from one body to the next, which makes
/// the processing order part of the observable trajectory.
pub struct Simulation<'a> {
    scenario: &'a Scenario,
    system: System,
    controller: StepController,
    trails: Vec<Trail>,
}

impl<'a> Simulation<'a> {
    pub fn new(scenario: &'a Scenario) -> Self {
        let p = &scenario.parameters;
        let trails = scenario
            .system
            .bodies
            .iter()
            .map(|_| Trail::new(p.trail_max))
            .collect();
        Self {
            scenario,
            system: scenario.system.clone(),
            controller: StepController::new(p.h0, p.tol, p.h_min),
            trails,
        }
    }

    /// Advance every body by one step in the configured mode and append the
    /// committed positions to the trails.
    pub fn advance(&mut self) -> Result<()> {
        match self.scenario.engine.integrator {
            IntegratorConfig::Rk4 => {
                rk4_update(&mut self.system, &self.scenario.forces, &self.scenario.parameters);
                for (b, trail) in self.system.bodies.iter().zip(self.trails.iter_mut()) {
                    trail.push(b.x);
                }
            }
            IntegratorConfig::Rkf45 => {
                for i in 0..self.system.bodies.len() {
                    rkf45_update_body(
                        &mut self.system,
                        i,
                        &self.scenario.forces,
                        &mut self.controller,
                    )?;
                    self.trails[i].push(self.system.bodies[i].x);
                }
            }
        }
        Ok(())
    }

    /// Precompute the full trajectory: snapshot, then advance, `steps` times.
    pub fn run(&mut self) -> Result<TrajectoryBuffer> {
        let steps = self.scenario.engine.steps;
        let mut trajectory = TrajectoryBuffer::with_capacity(steps);

        // Fixed-step runs are long and cheap per step, adaptive runs short
        // and expensive, so they report at different granularities.
        let reports = match self.scenario.engine.integrator {
            IntegratorConfig::Rk4 => 10,
            IntegratorConfig::Rkf45 => 5,
        };
        let interval = (steps / reports).max(1);

        for step in 0..steps {
            trajectory.record(&self.system);
            self.advance()?;

            if step % interval == 0 {
                info!(
                    "precomputing trajectory: {}% completed",
                    step * 100 / steps
                );
            }
        }
        info!("precomputing trajectory: 100% completed");

        Ok(trajectory)
    }

    /// Working copy of the system after the steps advanced so far
    pub fn system(&self) -> &System {
        &self.system
    }

    /// Per-body display trails, same index order as the system
    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    /// Current shared adaptive step size
    pub fn current_h(&self) -> f64 {
        self.controller.h()
    }
}

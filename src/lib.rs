pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, Trail, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{rk4_step, rk4_update, rkf45_step, rkf45_update_body, StepController};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;
pub use simulation::driver::{Simulation, TrajectoryBuffer};

pub use configuration::config::{
    BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig,
};

pub use benchmark::benchmark::{bench_gravity, bench_precompute};

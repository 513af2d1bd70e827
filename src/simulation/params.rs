//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `g` and distance regularization `eps`,
//! - fixed/initial step size `h0` and minimum step floor `h_min`,
//! - local error tolerance for rkf45,
//! - maximum retained trail length per body

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64,           // gravitational constant
    pub eps: f64,         // added to the distance to keep close encounters finite
    pub h0: f64,          // fixed step (rk4) / initial step (rkf45)
    pub tol: f64,         // local truncation error tolerance (rkf45)
    pub h_min: f64,       // step floor for the rkf45 rejection loop
    pub trail_max: usize, // max trail points kept per body
}

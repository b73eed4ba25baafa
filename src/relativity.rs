use tracing::debug;
use crate::vec3::*;
use crate::event::*;
use crate::error::*;

// beta is the velocity as a fraction of c; c = 1
// None when the speed is not below light speed
pub fn lorentz_factor(beta: Velocity) -> Option<f64> {
    if !beta.is_finite() {
	return None;
    }
    let speed_squared = beta.length_squared();
    if speed_squared < 1.0 {
	let gamma = 1.0 / (1.0 - speed_squared).sqrt();
	// rounding can still blow up right at the edge
	if gamma.is_finite() {
	    return Some(gamma);
	}
    }
    None
}

// boost along an arbitrary direction
// gamma^2 / (gamma + 1) is (gamma - 1) / beta^2 without the 0/0 at rest
pub fn lorentz_matrix(beta: Velocity, gamma: f64) -> Matrix4 {
    let k = gamma * gamma / (gamma + 1.0);
    Matrix4::from_fn(|i, j| match (i, j) {
	(0, 0) => gamma,
	(0, j) => -gamma * beta[AXES[j - 1]],
	(i, 0) => -gamma * beta[AXES[i - 1]],
	(i, j) => {
	    let delta = if i == j {1.0} else {0.0};
	    delta + k * beta[AXES[i - 1]] * beta[AXES[j - 1]]
	},
    })
}

// Lorentz boost into the frame moving with beta, with its inverse
// computed once and shared by every vertex
#[derive(Clone, Debug)]
pub struct Boost {
    pub beta: Velocity,
    pub gamma: f64,
    pub forward: Matrix4,
    pub inverse: Matrix4,
}

impl Boost {
    pub fn new(beta: Velocity) -> Result<Boost, TransformError> {
	let gamma = lorentz_factor(beta)
	    .ok_or(TransformError::InvalidVelocity { beta })?;

	let forward = lorentz_matrix(beta, gamma);
	let inverse = forward.inverse()
	    .ok_or_else(|| TransformError::SingularBoost { determinant: forward.determinant() })?;

	debug!(?beta, gamma, "built boost");

	Ok(Boost {
	    beta,
	    gamma,
	    forward,
	    inverse,
	})
    }
}

use crate::vec3::*;
use crate::error::*;

// per invocation parameters, nothing here is kept between transforms
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub t_obs: f64,// observation time, in the units of length with c = 1
    pub beta: Velocity,// object velocity as a fraction of c, in the global frame
}

impl Default for Settings {
    fn default() -> Self {
	Settings::new(0.0, Velocity::new(0.5, 0.0, 0.0))
    }
}

impl Settings {
    pub fn new(t_obs: f64, beta: Velocity) -> Self {
	Settings {
	    t_obs,
	    beta,
	}
    }

    // same speed, direction drawn uniformly from the unit sphere
    pub fn random_direction(t_obs: f64, speed: f64) -> Self {
	Settings::new(t_obs, speed * Velocity::random_unit())
    }

    // every component inside (-1, 1) and the whole speed below 1
    pub fn validate(&self) -> Result<(), OperatorError> {
	if !self.t_obs.is_finite() || self.t_obs < 0.0 {
	    return Err(OperatorError::InvalidObservationTime(self.t_obs));
	}
	let components_ok = AXES.iter().all(|&axis| self.beta[axis].abs() < 1.0);
	if !self.beta.is_finite() || !components_ok || self.beta.length_squared() >= 1.0 {
	    return Err(TransformError::InvalidVelocity { beta: self.beta }.into());
	}
	Ok(())
    }
}

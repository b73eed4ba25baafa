//! Special-relativistic polygon transform.
//!
//! Distorts a rigid mesh into what an observer moving close to the speed of
//! light would see at a given observation time. Only the geometry changes:
//! each vertex is replaced by the position it had when it emitted the light
//! that reaches the observer, seen from the observer's frame.
//!
//! ```
//! use sr_polygon::*;
//!
//! let settings = Settings::new(0.0, Velocity::new(0.5, 0.0, 0.0));
//! let boost = Boost::new(settings.beta).unwrap();
//! let obs2 = observer_event(&boost.forward, settings.t_obs, Point3::default(), Point3::default());
//! let seen = transform_vertices(&boost, obs2, &[Point3::new(1.0, 0.0, 0.0)]);
//! assert!((seen[0].x - 1.0 / 3.0_f64.sqrt()).abs() < 1e-12);
//! ```

pub mod vec3;
pub mod event;
pub mod relativity;
pub mod solver;
pub mod strategy;
pub mod settings;
pub mod objects;
pub mod operator;
pub mod wavefront;
pub mod error;

pub use vec3::*;
pub use event::*;
pub use relativity::*;
pub use solver::*;
pub use strategy::*;
pub use settings::*;
pub use objects::*;
pub use operator::*;
pub use error::*;

//! Retarded-time solve for every vertex of a rigid object.
//!
//! The object is at rest in its own frame, so each vertex has a fixed
//! position and its world line is vertical. Intersecting the observer's
//! backward light cone with such a world line is a single subtraction.

use tracing::debug;
use crate::vec3::*;
use crate::event::*;
use crate::relativity::*;
use crate::strategy::*;
use crate::settings::*;
use crate::error::*;

// the observer sits at the origin of its own frame; both frames are offset
// from the global frame by purely spatial events, folded in before boosting
pub fn observer_event(forward: &Matrix4, t_obs: f64, observer: Point3, object: Point3) -> Event {
    let local = Event::new(t_obs, Point3::default());
    let a1 = Event::at(observer);
    let a2 = Event::at(object);
    forward * (local + a1 - a2)
}

// emission event of light from vertex reaching obs2, back through the inverse boost
pub fn transform_vertex(inverse: &Matrix4, obs2: Event, vertex: Point3) -> Point3 {
    let delta = (vertex - obs2.position).length();
    // negative emission times are kept, the object simply existed earlier
    let emission = Event::new(obs2.time - delta, vertex);
    (inverse * emission).position
}

pub fn transform_vertices(boost: &Boost, obs2: Event, vertices: &[Point3]) -> Vec<Point3> {
    transform_vertices_with(&Strategy::default(), boost, obs2, vertices)
}

pub fn transform_vertices_with(strategy: &Strategy, boost: &Boost, obs2: Event, vertices: &[Point3]) -> Vec<Point3> {
    let inverse = &boost.inverse;
    strategy.map(vertices, &|vertex| transform_vertex(inverse, obs2, vertex))
}

// whole pipeline for one object
pub fn polygon_transform(settings: &Settings, observer: Point3, object: Point3, vertices: &[Point3]) -> Result<Vec<Point3>, TransformError> {
    let boost = Boost::new(settings.beta)?;
    let obs2 = observer_event(&boost.forward, settings.t_obs, observer, object);
    debug!(time = obs2.time, position = ?obs2.position, "observer event in object frame");
    Ok(transform_vertices(&boost, obs2, vertices))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> Vec<Point3> {
	let mut result = Vec::new();
	for x in [-1.0, 1.0] {
	    for y in [-1.0, 1.0] {
		for z in [-1.0, 1.0] {
		    result.push(Point3::new(x, y, z));
		}
	    }
	}
	result
    }

    #[test]
    fn half_light_speed_single_vertex() {
	let settings = Settings::new(0.0, Velocity::new(0.5, 0.0, 0.0));
	let result = polygon_transform(&settings, Point3::default(), Point3::default(), &[Point3::new(1.0, 0.0, 0.0)]).unwrap();
	assert_eq!(result.len(), 1);
	// gamma * (1 - 0.5) = 1 / sqrt(3)
	assert!((result[0].x - 0.5773502691896258).abs() < 1e-12);
	assert!(result[0].y.abs() < 1e-15);
	assert!(result[0].z.abs() < 1e-15);
    }

    #[test]
    fn observer_event_at_rest_is_offset() {
	let obs2 = observer_event(&Matrix4::identity(), 5.0, Point3::new(1.0, 2.0, 3.0), Point3::new(0.5, 0.0, -1.0));
	assert_eq!(obs2, Event::new(5.0, Point3::new(0.5, 2.0, 4.0)));
    }

    #[test]
    fn observer_event_is_boosted() {
	let boost = Boost::new(Velocity::new(0.6, 0.0, 0.0)).unwrap();
	// gamma = 1.25
	let obs2 = observer_event(&boost.forward, 2.0, Point3::default(), Point3::default());
	assert!((obs2.time - 2.5).abs() < 1e-12);
	assert!((obs2.position.x + 1.5).abs() < 1e-12);
    }

    #[test]
    fn rest_leaves_vertices_alone() {
	let settings = Settings::new(5.0, Velocity::default());
	let vertices = cube();
	let result = polygon_transform(&settings, Point3::new(3.0, -2.0, 7.0), Point3::new(-1.0, 4.0, 0.5), &vertices).unwrap();
	for (a, b) in result.iter().zip(&vertices) {
	    assert!(a.max_deviation(*b) < 1e-9);
	}
    }

    #[test]
    fn empty_mesh_is_noop() {
	let settings = Settings::new(1.0, Velocity::new(0.3, 0.3, 0.3));
	let result = polygon_transform(&settings, Point3::default(), Point3::new(0.0, 0.0, -4.0), &[]).unwrap();
	assert!(result.is_empty());
    }

    #[test]
    fn vertex_on_observer_emits_at_observation() {
	let boost = Boost::new(Velocity::new(0.0, 0.4, 0.0)).unwrap();
	let obs2 = observer_event(&boost.forward, 1.0, Point3::default(), Point3::default());
	// light needs no time to travel, so the event is obs2 itself
	let result = transform_vertex(&boost.inverse, obs2, obs2.position);
	let expected = (&boost.inverse * obs2).position;
	assert!(result.max_deviation(expected) < 1e-12);
	// and obs2 maps back onto the observer at the origin
	assert!(result.max_deviation(Point3::default()) < 1e-12);
    }

    #[test]
    fn emission_time_may_be_negative() {
	// far vertex at t_obs = 0 emitted long ago; forward motion then shifts it
	let boost = Boost::new(Velocity::new(0.5, 0.0, 0.0)).unwrap();
	let obs2 = observer_event(&boost.forward, 0.0, Point3::default(), Point3::default());
	let result = transform_vertex(&boost.inverse, obs2, Point3::new(0.0, 10.0, 0.0));
	// x = gamma * beta * t' with t' = -10
	assert!((result.x + 10.0 * 0.5 * boost.gamma).abs() < 1e-12);
	assert!((result.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_velocity_is_reported() {
	let settings = Settings::new(0.0, Velocity::new(1.0, 0.0, 0.0));
	let result = polygon_transform(&settings, Point3::default(), Point3::default(), &cube());
	assert!(matches!(result, Err(TransformError::InvalidVelocity { .. })));
    }

    #[test]
    fn strategies_agree() {
	let boost = Boost::new(Velocity::new(0.1, -0.7, 0.2)).unwrap();
	let obs2 = observer_event(&boost.forward, 3.0, Point3::new(0.0, 1.0, 5.0), Point3::new(2.0, 0.0, 0.0));
	let vertices: Vec<Point3> = (0..5000)
	    .map(|i| Point3::new((i % 17) as f64, (i % 5) as f64 * 0.25, i as f64 * 1e-3))
	    .collect();
	let sequential = transform_vertices(&boost, obs2, &vertices);
	let threaded = transform_vertices_with(&Strategy::Threaded(Threaded::new(3)), &boost, obs2, &vertices);
	assert_eq!(sequential, threaded);
    }
}

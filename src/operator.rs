//! Applies the polygon transform to objects handed over by a host.
//!
//! Either every selected mesh is rewritten or none is.

use std::fmt;
use tracing::{debug, info, warn};
use crate::vec3::*;
use crate::objects::*;
use crate::relativity::*;
use crate::solver::*;
use crate::strategy::*;
use crate::settings::*;
use crate::error::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub objects: usize,
    pub vertices: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
	write!(f, "transformed {} vertices in {} object(s)", self.vertices, self.objects)
    }
}

pub fn apply(settings: &Settings, observer: Point3, selected: &mut [SceneObject], strategy: &Strategy) -> Result<Report, OperatorError> {
    let result = transform_selection(settings, observer, selected, strategy);
    match &result {
	Ok(report) => info!("{}", report),
	Err(error) => warn!("{}", error),
    }
    result
}

fn transform_selection(settings: &Settings, observer: Point3, selected: &mut [SceneObject], strategy: &Strategy) -> Result<Report, OperatorError> {
    if selected.is_empty() {
	return Err(OperatorError::NoSelection);
    }
    settings.validate()?;

    if let Some(object) = selected.iter().find(|object| object.mesh().is_none()) {
	return Err(OperatorError::UnsupportedObjectKind { name: object.name.clone(), kind: object.kind.name() });
    }

    let boost = Boost::new(settings.beta)?;
    debug!(objects = selected.len(), workers = strategy.workers(), "transforming selection");

    // nothing is written back until every object is done
    let mut transformed = Vec::with_capacity(selected.len());
    for object in selected.iter() {
	let mesh = object.mesh().ok_or_else(|| OperatorError::UnsupportedObjectKind { name: object.name.clone(), kind: object.kind.name() })?;
	let obs2 = observer_event(&boost.forward, settings.t_obs, observer, object.location);
	transformed.push(transform_vertices_with(strategy, &boost, obs2, &mesh.vertices));
    }

    let mut report = Report { objects: 0, vertices: 0 };
    for (object, vertices) in selected.iter_mut().zip(transformed) {
	if let Some(mesh) = object.mesh_mut() {
	    report.objects += 1;
	    report.vertices += vertices.len();
	    mesh.vertices = vertices;
	}
    }
    Ok(report)
}

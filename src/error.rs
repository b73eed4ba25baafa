//! Error types. The display strings double as the messages shown to the user.

use thiserror::Error;
use crate::vec3::*;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    #[error("invalid velocity ({}, {}, {}): speed must be finite and below the speed of light", .beta.x, .beta.y, .beta.z)]
    InvalidVelocity { beta: Velocity },

    // only reachable through a numerical bug, the boost has determinant 1
    #[error("internal error: boost matrix for a valid velocity is not invertible (det = {determinant})")]
    SingularBoost { determinant: f64 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    #[error("no object selected")]
    NoSelection,

    #[error("selected object '{name}' ({kind}) is not a mesh")]
    UnsupportedObjectKind { name: String, kind: &'static str },

    #[error("invalid observation time {0}: must be finite and not negative")]
    InvalidObservationTime(f64),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

//! Polynomial-time reductions between colouring and satisfiability encodings.
//!
//! Every reduction is a pure function of its input instance. Fresh identifiers come from a
//! [`FreshIds`](crate::fresh_ids::FreshIds) local to the call.
pub mod coloring_to_sat;
pub mod sat_to_three_sat;
pub mod three_sat_to_coloring;

use thiserror::Error;

use crate::instance::{InstanceError, Node};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReductionError {
    #[error("number of colours must be positive, got {0}")]
    InvalidColorCount(i64),
    #[error("input is not 3-SAT: clause {clause} has {width} literals")]
    NotThreeSat { clause: usize, width: usize },
    #[error("node {0:?} cannot be encoded as colour variables, node ids must be >= 1")]
    NodeOutOfRange(Node),
    #[error("ran out of fresh identifiers")]
    IdSpaceExhausted,
    #[error("node {0:?} does not have exactly one colour in the model")]
    UndecodableNode(Node),
    #[error("invalid instance")]
    Instance(#[from] InstanceError),
}

pub type Result<T> = std::result::Result<T, ReductionError>;

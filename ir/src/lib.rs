//! Buffer-oriented intermediate representation for the loam compiler.
//!
//! A [`Function`] owns a table of buffer values and a flat sequence of
//! operations over them. Operations start out in buffer form (elementwise
//! arithmetic, shape broadcast, position generation) and are legalized by the
//! `loam-lower` crate into [`LoopNestOp`] nodes: explicit parallel loop nests
//! with per-operand index maps and a scalar computation body.
//!
//! # Module Organization
//!
//! - [`types`] - Operation kind enums (unary/binary/compare/select)
//! - [`shape`] - Buffer shapes with static and dynamic extents
//! - [`function`] - Value table and operation sequence
//! - [`op`] - The closed operation enum
//! - [`nest`] - Index maps, iterator kinds, and the loop-nest node
//! - [`body`] - Scalar computation bodies and their builder
//! - [`error`] - Structural validation errors

pub mod body;
pub mod error;
pub mod function;
pub mod nest;
pub mod op;
pub mod shape;
pub mod types;

mod display;

#[cfg(test)]
mod test;

pub use body::{Body, BodyBuilder, ScalarInstr, ScalarValue};
pub use error::{Error, Result};
pub use function::{Function, ValueId};
pub use nest::{IndexExpr, IndexMap, IteratorKind, LoopNestOp};
pub use op::BufferOp;
pub use shape::{BufferType, Extent};
pub use types::{BinaryOp, ComparePredicate, ElementwiseKind, UnaryOp};

// Re-export the element-type crate for convenience.
pub use loam_dtype::DType;

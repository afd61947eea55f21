//! Legalization of buffer operations to explicit parallel loop nests.
//!
//! The entry point is [`pass::run`]: one sweep over a function body that
//! replaces every recognized buffer operation with a [`loam_ir::LoopNestOp`]
//! carrying per-operand index maps and a scalar computation body. Three
//! conversion policies exist:
//!
//! - **pointwise** - all operands share one rank, every operand gets the
//!   identity map, the body invokes the scalar mapper;
//! - **broadcast** - a low-rank source replicated into a result shape, with
//!   degenerate (extent-1) source dimensions pinned to coordinate 0;
//! - **position generation** - no inputs, the body derives the output value
//!   from an induction variable.
//!
//! A policy that does not apply declines without touching the function;
//! the pass fails only when operations remain unconverted at the end.
//!
//! # Module Organization
//!
//! - [`nestify`] - index-map construction, loop-nest emission, conversion
//!   patterns
//! - [`scalar`] - elementwise kind → scalar instruction mapping
//! - [`pass`] - the driver sweep
//! - [`error`] - the decline/failure taxonomy

pub mod error;
pub mod nestify;
pub mod pass;
pub mod scalar;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use nestify::{convert_broadcast, convert_elementwise, convert_iota, convert_operation};
pub use pass::{DESCRIPTION, NAME, run};

//! Loop-nest construction: index maps, emission, and conversion patterns.
//!
//! - [`index_map`] - per-operand access functions for each policy
//! - [`emit`] - builds a complete, validated nest node off to the side
//! - [`patterns`] - the per-kind policies and their dispatch

pub mod emit;
pub mod index_map;
pub mod patterns;

pub use emit::{BodyParams, emit_loop_nest};
pub use index_map::{broadcast_source_map, pointwise_maps};
pub use patterns::{convert_broadcast, convert_elementwise, convert_iota, convert_operation};

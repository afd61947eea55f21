//! Loop-nest emission.
//!
//! Builds the replacement node completely off to the side: parameters are
//! bound, the caller populates the body through the builder, the terminator
//! is attached, and the assembled node is validated — all before the caller
//! gets anything it could install. A failure at any step therefore leaves
//! the original operation untouched.

use smallvec::SmallVec;

use loam_dtype::DType;
use loam_ir::{BodyBuilder, Function, IndexMap, LoopNestOp, ScalarValue, ValueId};

use crate::error::Result;

/// Scalar handles pre-bound by the emitter, handed to the body-population
/// callback.
pub struct BodyParams<'a> {
    /// Induction-variable parameters, one per nest dimension. Empty unless
    /// the nest is indexed.
    pub indices: &'a [ScalarValue],
    /// One parameter per input operand, bound to its per-iteration value.
    pub inputs: &'a [ScalarValue],
}

/// Construct a complete loop-nest node.
///
/// Parameter layout is fixed: induction variables first (iff `indexed`),
/// then one parameter per input operand, then one per output operand. The
/// `populate` callback appends the body instructions and returns the
/// yielded value(s), which must match the output element type(s).
pub fn emit_loop_nest<F>(
    func: &Function,
    operands: SmallVec<[ValueId; 4]>,
    index_maps: SmallVec<[IndexMap; 4]>,
    nest_rank: usize,
    num_inputs: usize,
    indexed: bool,
    populate: F,
) -> Result<LoopNestOp>
where
    F: FnOnce(&mut BodyBuilder, BodyParams<'_>) -> Result<SmallVec<[ScalarValue; 1]>>,
{
    let mut builder = BodyBuilder::new();

    let indices: Vec<ScalarValue> = if indexed {
        (0..nest_rank).map(|_| builder.append_param(DType::Index)).collect()
    } else {
        Vec::new()
    };
    let inputs: Vec<ScalarValue> = operands[..num_inputs]
        .iter()
        .map(|id| builder.append_param(func.buffer_type(*id).elem()))
        .collect();
    for id in &operands[num_inputs..] {
        builder.append_param(func.buffer_type(*id).elem());
    }

    let yields = populate(&mut builder, BodyParams { indices: &indices, inputs: &inputs })?;
    let body = builder.terminate(yields)?;

    let nest = LoopNestOp::new(operands, index_maps, nest_rank, num_inputs, indexed, body);
    nest.validate(func)?;
    Ok(nest)
}

//! Conversion policies, one per operation family.
//!
//! Each policy either returns a complete loop-nest node or declines with the
//! reason; declining never mutates anything. Dispatch is a single match over
//! the closed kind enum, so exactly one policy is ever attempted per
//! operation and the converted form matches none.

use smallvec::{SmallVec, smallvec};
use snafu::{OptionExt, ensure};

use loam_dtype::DType;
use loam_ir::{
    BufferOp, ElementwiseKind, Function, IndexMap, LoopNestOp, ScalarInstr, ValueId,
};

use super::emit::emit_loop_nest;
use super::index_map::{broadcast_source_map, pointwise_maps};
use crate::error::{
    BroadcastDimensionsAritySnafu, IotaAxisOutOfRangeSnafu, MissingBroadcastDimensionsSnafu,
    NonStaticShapeSnafu, OperandCountSnafu, Result, UnsupportedElementTypeSnafu,
    ZeroRankOperandSnafu,
};
use crate::scalar::map_elementwise;

/// Try the policy matching the operation's kind. `None` means no policy
/// exists for this operation (it is already a loop nest); `Some(Err(_))`
/// means the matching policy declined.
pub fn convert_operation(func: &Function, op: &BufferOp) -> Option<Result<LoopNestOp>> {
    match op {
        BufferOp::BroadcastInDim { source, result, broadcast_dimensions } => {
            Some(convert_broadcast(func, *source, *result, broadcast_dimensions.as_deref()))
        }
        BufferOp::Iota { result, axis } => Some(convert_iota(func, *result, *axis)),
        BufferOp::Elementwise { kind, operands } => {
            Some(convert_elementwise(func, *kind, operands))
        }
        BufferOp::LoopNest(_) => None,
    }
}

/// Pointwise policy: identity maps everywhere, body defers to the scalar
/// mapper.
pub fn convert_elementwise(
    func: &Function,
    kind: ElementwiseKind,
    operands: &[ValueId],
) -> Result<LoopNestOp> {
    let expected = kind.num_inputs() + 1;
    ensure!(
        operands.len() == expected,
        OperandCountSnafu { kind: kind.to_string(), expected, found: operands.len() }
    );

    let first = func.buffer_type(operands[0]);
    ensure!(first.is_fully_static(), NonStaticShapeSnafu { value: operands[0] });
    ensure!(
        first.elem().is_int_or_float(),
        UnsupportedElementTypeSnafu { dtype: first.elem() }
    );

    let (nest_rank, maps) = pointwise_maps(func, operands)?;
    let num_inputs = expected - 1;
    emit_loop_nest(
        func,
        operands.iter().copied().collect(),
        maps,
        nest_rank,
        num_inputs,
        false,
        |b, params| Ok(smallvec![map_elementwise(kind, params.inputs, b)?]),
    )
}

/// Broadcast policy: the result operand contributes only its shape, the body
/// is a pure pass-through — broadcast changes where a value is read, not the
/// value itself.
pub fn convert_broadcast(
    func: &Function,
    source: ValueId,
    result: ValueId,
    broadcast_dimensions: Option<&[usize]>,
) -> Result<LoopNestOp> {
    let dims = broadcast_dimensions.context(MissingBroadcastDimensionsSnafu)?;

    let source_ty = func.buffer_type(source);
    let nest_rank = func.buffer_type(result).rank();
    ensure!(nest_rank != 0, ZeroRankOperandSnafu { value: result });
    ensure!(
        dims.len() == source_ty.rank(),
        BroadcastDimensionsAritySnafu { expected: source_ty.rank(), found: dims.len() }
    );
    // Degeneracy testing reads the source extents.
    ensure!(source_ty.is_fully_static(), NonStaticShapeSnafu { value: source });

    let maps = smallvec![
        broadcast_source_map(source_ty, nest_rank, dims)?,
        IndexMap::identity(nest_rank),
    ];
    emit_loop_nest(func, smallvec![source, result], maps, nest_rank, 1, false, |_b, params| {
        Ok(smallvec![params.inputs[0]])
    })
}

/// Position-generation policy: an indexed nest whose body casts the
/// generation-axis induction variable to the output element type.
pub fn convert_iota(func: &Function, result: ValueId, axis: usize) -> Result<LoopNestOp> {
    let elem = func.buffer_type(result).elem();
    ensure!(elem.is_int_or_float(), UnsupportedElementTypeSnafu { dtype: elem });

    let nest_rank = func.buffer_type(result).rank();
    ensure!(nest_rank != 0, ZeroRankOperandSnafu { value: result });
    ensure!(axis < nest_rank, IotaAxisOutOfRangeSnafu { axis, rank: nest_rank });

    let maps: SmallVec<[IndexMap; 4]> = smallvec![IndexMap::identity(nest_rank)];
    emit_loop_nest(func, smallvec![result], maps, nest_rank, 0, true, |b, params| {
        // Cast to the integer type of the output's bit width; float outputs
        // get a further int-to-float conversion.
        let int_ty = if elem.is_float() {
            DType::int_of_width(elem.bits()).context(UnsupportedElementTypeSnafu { dtype: elem })?
        } else {
            elem
        };
        let cast = b.push(ScalarInstr::IndexCast { src: params.indices[axis], dtype: int_ty });
        let value = if elem.is_float() {
            b.push(ScalarInstr::SiToFp { src: cast, dtype: elem })
        } else {
            cast
        };
        Ok(smallvec![value])
    })
}

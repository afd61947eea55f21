//! The closed operation enum.

use smallvec::{SmallVec, smallvec};

use crate::function::ValueId;
use crate::nest::LoopNestOp;
use crate::types::ElementwiseKind;

/// One operation in a function body.
///
/// The buffer forms (`Elementwise`, `BroadcastInDim`, `Iota`) are the input
/// contract of legalization; `LoopNest` is its output and is matched by no
/// conversion pattern, which makes the pass idempotent.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferOp {
    /// Elementwise computation. Operands are inputs followed by exactly one
    /// output buffer.
    Elementwise { kind: ElementwiseKind, operands: SmallVec<[ValueId; 4]> },

    /// Replicate `source` into the shape of `result`.
    ///
    /// `broadcast_dimensions` names, for each source dimension in order, the
    /// result dimension it maps onto. The attribute is optional at the data
    /// level; conversion declines without it.
    BroadcastInDim {
        source: ValueId,
        result: ValueId,
        broadcast_dimensions: Option<Vec<usize>>,
    },

    /// Fill `result` with the coordinate value along `axis`.
    Iota { result: ValueId, axis: usize },

    /// The converted form.
    LoopNest(LoopNestOp),
}

impl BufferOp {
    /// All operand values, inputs before outputs.
    pub fn operands(&self) -> SmallVec<[ValueId; 4]> {
        match self {
            Self::Elementwise { operands, .. } => operands.clone(),
            Self::BroadcastInDim { source, result, .. } => smallvec![*source, *result],
            Self::Iota { result, .. } => smallvec![*result],
            Self::LoopNest(nest) => nest.operands().iter().copied().collect(),
        }
    }

    pub fn is_loop_nest(&self) -> bool {
        matches!(self, Self::LoopNest(_))
    }

    /// Coarse tag for logging.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Elementwise { .. } => "elementwise",
            Self::BroadcastInDim { .. } => "broadcast_in_dim",
            Self::Iota { .. } => "iota",
            Self::LoopNest(_) => "loop_nest",
        }
    }
}

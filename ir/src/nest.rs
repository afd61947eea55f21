//! Parallel loop nests: index maps, iterator kinds, and the nest node.

use smallvec::{SmallVec, smallvec};
use snafu::ensure;

use crate::body::Body;
use crate::error::{
    BodyParamCountSnafu, BodyParamTypeSnafu, IndexMapCountSnafu, IterOutOfRangeSnafu,
    MapInputAritySnafu, MapOutputAritySnafu, Result, YieldCountSnafu, YieldTypeSnafu,
};
use crate::function::{Function, ValueId};
use loam_dtype::DType;

/// One output coordinate of an index map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexExpr {
    /// The induction variable of the given nest dimension.
    Iter(usize),
    /// The constant 0: a degenerate (broadcast) source dimension.
    Zero,
}

/// Affine access function from the nest's induction variables to one
/// operand's element coordinates.
///
/// Input arity is the nest rank; output arity is the operand rank. The only
/// forms this stage produces are the identity map and the broadcast map
/// (identity with some coordinates pinned to 0 or permuted).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexMap {
    rank_in: usize,
    exprs: SmallVec<[IndexExpr; 4]>,
}

impl IndexMap {
    /// Build a map, rejecting induction-variable references outside the nest.
    pub fn new(rank_in: usize, exprs: SmallVec<[IndexExpr; 4]>) -> Result<Self> {
        for (position, expr) in exprs.iter().enumerate() {
            if let IndexExpr::Iter(index) = *expr {
                ensure!(index < rank_in, IterOutOfRangeSnafu { position, index, rank_in });
            }
        }
        Ok(Self { rank_in, exprs })
    }

    /// The identity map of the given rank: coordinate i ↦ induction variable i.
    pub fn identity(rank: usize) -> Self {
        Self { rank_in: rank, exprs: (0..rank).map(IndexExpr::Iter).collect() }
    }

    pub fn rank_in(&self) -> usize {
        self.rank_in
    }

    pub fn output_rank(&self) -> usize {
        self.exprs.len()
    }

    pub fn exprs(&self) -> &[IndexExpr] {
        &self.exprs
    }

    pub fn is_identity(&self) -> bool {
        self.exprs.len() == self.rank_in
            && self.exprs.iter().enumerate().all(|(i, e)| matches!(e, IndexExpr::Iter(j) if *j == i))
    }
}

/// Iteration semantics of one nest dimension.
///
/// This stage only ever emits `Parallel`; the tag exists so the converted
/// form states its iteration semantics explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IteratorKind {
    Parallel,
}

/// The converted form of one operation: an explicit parallel loop nest.
///
/// Operands are inputs followed by outputs, with one index map per operand
/// in the same order. The body receives one scalar parameter per operand
/// (plus the induction variables first, when `indexed`) and yields one value
/// per output.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopNestOp {
    operands: SmallVec<[ValueId; 4]>,
    index_maps: SmallVec<[IndexMap; 4]>,
    iterator_kinds: SmallVec<[IteratorKind; 4]>,
    num_inputs: usize,
    num_outputs: usize,
    indexed: bool,
    body: Body,
}

impl LoopNestOp {
    /// Assemble a nest node. The caller is expected to [`validate`] the node
    /// against its function before installing it.
    ///
    /// [`validate`]: LoopNestOp::validate
    pub fn new(
        operands: SmallVec<[ValueId; 4]>,
        index_maps: SmallVec<[IndexMap; 4]>,
        nest_rank: usize,
        num_inputs: usize,
        indexed: bool,
        body: Body,
    ) -> Self {
        let num_outputs = operands.len().saturating_sub(num_inputs);
        Self {
            operands,
            index_maps,
            iterator_kinds: smallvec![IteratorKind::Parallel; nest_rank],
            num_inputs,
            num_outputs,
            indexed,
            body,
        }
    }

    pub fn operands(&self) -> &[ValueId] {
        &self.operands
    }

    pub fn inputs(&self) -> &[ValueId] {
        &self.operands[..self.num_inputs]
    }

    pub fn outputs(&self) -> &[ValueId] {
        &self.operands[self.num_inputs..]
    }

    pub fn index_maps(&self) -> &[IndexMap] {
        &self.index_maps
    }

    pub fn iterator_kinds(&self) -> &[IteratorKind] {
        &self.iterator_kinds
    }

    pub fn nest_rank(&self) -> usize {
        self.iterator_kinds.len()
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Whether the body takes the induction variables as leading parameters.
    pub fn indexed(&self) -> bool {
        self.indexed
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Check every structural invariant of the node against the function
    /// that owns its operands:
    ///
    /// - one index map per operand, input arity = nest rank, output arity =
    ///   operand rank;
    /// - body parameters match (induction variables first when `indexed`,
    ///   then one parameter per operand with its element type);
    /// - one yielded value per output, each matching the output element type.
    pub fn validate(&self, func: &Function) -> Result<()> {
        ensure!(
            self.index_maps.len() == self.operands.len(),
            IndexMapCountSnafu { maps: self.index_maps.len(), operands: self.operands.len() }
        );
        for (operand, (map, id)) in self.index_maps.iter().zip(&self.operands).enumerate() {
            ensure!(
                map.rank_in() == self.nest_rank(),
                MapInputAritySnafu { operand, expected: self.nest_rank(), found: map.rank_in() }
            );
            let rank = func.buffer_type(*id).rank();
            ensure!(
                map.output_rank() == rank,
                MapOutputAritySnafu { operand, expected: rank, found: map.output_rank() }
            );
        }

        let index_params = if self.indexed { self.nest_rank() } else { 0 };
        let expected_params = index_params + self.operands.len();
        ensure!(
            self.body.params().len() == expected_params,
            BodyParamCountSnafu { expected: expected_params, found: self.body.params().len() }
        );
        for (position, found) in self.body.params()[..index_params].iter().enumerate() {
            ensure!(
                *found == DType::Index,
                BodyParamTypeSnafu { position, expected: DType::Index, found: *found }
            );
        }
        for (i, id) in self.operands.iter().enumerate() {
            let position = index_params + i;
            let expected = func.buffer_type(*id).elem();
            let found = self.body.params()[position];
            ensure!(found == expected, BodyParamTypeSnafu { position, expected, found });
        }

        ensure!(
            self.body.yields().len() == self.num_outputs,
            YieldCountSnafu { expected: self.num_outputs, found: self.body.yields().len() }
        );
        for (position, value) in self.body.yields().iter().enumerate() {
            let out = self.operands[self.num_inputs + position];
            let expected = func.buffer_type(out).elem();
            let found = self.body.value_type(*value)?;
            ensure!(found == expected, YieldTypeSnafu { position, expected, found });
        }
        Ok(())
    }
}

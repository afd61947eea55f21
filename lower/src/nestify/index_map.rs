//! Per-operand index-access functions.

use smallvec::SmallVec;
use snafu::ensure;

use loam_ir::{BufferType, Extent, Function, IndexExpr, IndexMap, ValueId};

use crate::error::{
    BroadcastTargetOutOfRangeSnafu, RankMismatchSnafu, Result, ZeroRankOperandSnafu,
};

/// Pointwise policy: every operand shares one common non-zero rank and gets
/// the identity map. Returns the nest rank with the maps.
pub fn pointwise_maps(
    func: &Function,
    operands: &[ValueId],
) -> Result<(usize, SmallVec<[IndexMap; 4]>)> {
    let mut nest_rank = 0;
    for id in operands {
        let rank = func.buffer_type(*id).rank();
        ensure!(rank != 0, ZeroRankOperandSnafu { value: *id });
        ensure!(
            nest_rank == 0 || rank == nest_rank,
            RankMismatchSnafu { expected: nest_rank, found: rank }
        );
        nest_rank = rank;
    }
    let maps = operands.iter().map(|_| IndexMap::identity(nest_rank)).collect();
    Ok((nest_rank, maps))
}

/// Broadcast policy: access function of the low-rank source.
///
/// For each source dimension in order, a degenerate dimension (extent 1)
/// reads coordinate 0 — the value is replicated along that axis — and any
/// other dimension reads the induction variable named by the mapping entry.
/// The entry's *value* is taken verbatim as the loop-dimension index; see
/// DESIGN.md for the provenance of that convention. Entries outside the nest
/// decline rather than building an unverifiable map.
pub fn broadcast_source_map(
    source: &BufferType,
    nest_rank: usize,
    dims: &[usize],
) -> Result<IndexMap> {
    let mut exprs: SmallVec<[IndexExpr; 4]> = SmallVec::with_capacity(dims.len());
    for (dim, &target) in dims.iter().enumerate() {
        let expr = match source.extent(dim) {
            Extent::Fixed(1) => IndexExpr::Zero,
            _ => {
                ensure!(target < nest_rank, BroadcastTargetOutOfRangeSnafu { target, nest_rank });
                IndexExpr::Iter(target)
            }
        };
        exprs.push(expr);
    }
    Ok(IndexMap::new(nest_rank, exprs)?)
}

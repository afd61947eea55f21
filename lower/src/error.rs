use snafu::Snafu;

use loam_dtype::DType;
use loam_ir::{BinaryOp, ComparePredicate, UnaryOp, ValueId};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Conversion errors.
///
/// Everything except [`Error::OperationsLeftUnconverted`] is a per-operation
/// decline: the pattern does not apply, the operation is left untouched, and
/// the driver moves on. Only the aggregate outcome is fatal.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    // Shape errors.
    /// Loop nests need at least one dimension.
    #[snafu(display("operand {value} has rank 0"))]
    ZeroRankOperand { value: ValueId },

    #[snafu(display("operand rank {found} disagrees with nest rank {expected}"))]
    RankMismatch { expected: usize, found: usize },

    #[snafu(display("operand {value} has a dynamic extent, conversion needs static shapes"))]
    NonStaticShape { value: ValueId },

    // Type errors.
    #[snafu(display("element type {dtype} is not an integer or float"))]
    UnsupportedElementType { dtype: DType },

    #[snafu(display("dtype mismatch: cannot combine {lhs} and {rhs}"))]
    DTypeMismatch { lhs: DType, rhs: DType },

    #[snafu(display("invalid dtype for operation: operation {operation:?}; dtype {dtype}"))]
    InvalidDTypeForUnaryOp { operation: UnaryOp, dtype: DType },

    #[snafu(display("invalid dtype for operation: operation {operation:?}; dtype {dtype}"))]
    InvalidDTypeForBinaryOp { operation: BinaryOp, dtype: DType },

    #[snafu(display("comparison {predicate:?} needs integer or float operands, got {dtype}"))]
    InvalidDTypeForCompare { predicate: ComparePredicate, dtype: DType },

    #[snafu(display("select condition must be i1, got {actual}"))]
    SelectConditionNotBool { actual: DType },

    // Attribute errors.
    #[snafu(display("broadcast is missing its dimension mapping attribute"))]
    MissingBroadcastDimensions,

    #[snafu(display("broadcast mapping has {found} entries for a rank-{expected} source"))]
    BroadcastDimensionsArity { expected: usize, found: usize },

    #[snafu(display("broadcast mapping entry {target} exceeds nest rank {nest_rank}"))]
    BroadcastTargetOutOfRange { target: usize, nest_rank: usize },

    #[snafu(display("generation axis {axis} out of range for rank-{rank} output"))]
    IotaAxisOutOfRange { axis: usize, rank: usize },

    #[snafu(display("{kind} expects {expected} operands, got {found}"))]
    OperandCount { kind: String, expected: usize, found: usize },

    /// Structural invariant violation bubbled up from the representation.
    #[snafu(context(false), display("invalid loop nest structure: {source}"))]
    Structure { source: loam_ir::Error },

    // Pass-level outcome.
    #[snafu(display("{remaining} operations could not be legalized to loop nests"))]
    OperationsLeftUnconverted { remaining: usize },
}

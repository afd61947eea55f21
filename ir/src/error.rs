use snafu::Snafu;

use loam_dtype::DType;

use crate::body::ScalarValue;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Structural validation errors for the representation layer.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Index map references an induction variable outside the nest.
    #[snafu(display("index expression d{index} at coordinate {position} exceeds nest rank {rank_in}"))]
    IterOutOfRange { position: usize, index: usize, rank_in: usize },

    /// Loop nest carries the wrong number of index maps.
    #[snafu(display("loop nest carries {maps} index maps for {operands} operands"))]
    IndexMapCount { maps: usize, operands: usize },

    /// Index map input arity disagrees with the nest rank.
    #[snafu(display("index map for operand {operand} has input arity {found}, nest rank is {expected}"))]
    MapInputArity { operand: usize, expected: usize, found: usize },

    /// Index map output arity disagrees with the operand rank.
    #[snafu(display(
        "index map for operand {operand} produces {found} coordinates, operand rank is {expected}"
    ))]
    MapOutputArity { operand: usize, expected: usize, found: usize },

    /// Computation body has the wrong parameter count.
    #[snafu(display("computation body has {found} parameters, expected {expected}"))]
    BodyParamCount { expected: usize, found: usize },

    /// Computation body parameter has the wrong type.
    #[snafu(display("body parameter {position} has type {found}, expected {expected}"))]
    BodyParamType { position: usize, expected: DType, found: DType },

    /// Terminator yields the wrong number of values.
    #[snafu(display("body yields {found} values for {expected} output operands"))]
    YieldCount { expected: usize, found: usize },

    /// Yielded value type disagrees with the output element type.
    #[snafu(display("yielded value {position} has type {found}, output operand expects {expected}"))]
    YieldType { position: usize, expected: DType, found: DType },

    /// A scalar handle does not resolve within its body.
    #[snafu(display("scalar value {value:?} is not defined in this body"))]
    UndefinedScalar { value: ScalarValue },
}

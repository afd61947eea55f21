//! Scalar computation bodies.
//!
//! A [`Body`] is the per-iteration sub-block of a loop nest: a parameter
//! list, a straight-line sequence of scalar instructions, and the yielded
//! result(s). Bodies are assembled through [`BodyBuilder`] — an explicit
//! builder passed by reference, with no ambient insertion-point state — and
//! become immutable once terminated.

use smallvec::SmallVec;
use snafu::OptionExt;

use loam_dtype::DType;

use crate::error::{Result, UndefinedScalarSnafu};
use crate::types::{BinaryOp, ComparePredicate, UnaryOp};

/// Handle to one scalar value inside a body: either a block parameter or the
/// result of a prior instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarValue {
    Param(usize),
    Instr(usize),
}

/// One scalar instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarInstr {
    Unary { op: UnaryOp, operand: ScalarValue, dtype: DType },
    Binary { op: BinaryOp, lhs: ScalarValue, rhs: ScalarValue, dtype: DType },
    /// Comparison; always produces `i1`.
    Compare { predicate: ComparePredicate, lhs: ScalarValue, rhs: ScalarValue },
    Select { cond: ScalarValue, on_true: ScalarValue, on_false: ScalarValue, dtype: DType },
    /// Cast an induction variable to a sized integer type.
    IndexCast { src: ScalarValue, dtype: DType },
    /// Signed integer to float conversion.
    SiToFp { src: ScalarValue, dtype: DType },
}

impl ScalarInstr {
    /// Result type of the instruction.
    pub const fn dtype(&self) -> DType {
        match self {
            Self::Compare { .. } => DType::Bool,
            Self::Unary { dtype, .. }
            | Self::Binary { dtype, .. }
            | Self::Select { dtype, .. }
            | Self::IndexCast { dtype, .. }
            | Self::SiToFp { dtype, .. } => *dtype,
        }
    }
}

fn lookup_type(params: &[DType], instrs: &[ScalarInstr], value: ScalarValue) -> Result<DType> {
    match value {
        ScalarValue::Param(i) => params.get(i).copied(),
        ScalarValue::Instr(i) => instrs.get(i).map(ScalarInstr::dtype),
    }
    .context(UndefinedScalarSnafu { value })
}

/// A terminated scalar sub-block.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    params: SmallVec<[DType; 4]>,
    instrs: Vec<ScalarInstr>,
    yields: SmallVec<[ScalarValue; 1]>,
}

impl Body {
    pub fn params(&self) -> &[DType] {
        &self.params
    }

    pub fn instrs(&self) -> &[ScalarInstr] {
        &self.instrs
    }

    pub fn yields(&self) -> &[ScalarValue] {
        &self.yields
    }

    /// Type of any value defined in this body.
    pub fn value_type(&self, value: ScalarValue) -> Result<DType> {
        lookup_type(&self.params, &self.instrs, value)
    }
}

/// Builder for [`Body`]. Parameters and instructions are appended in order;
/// [`BodyBuilder::terminate`] checks that every yielded value is defined and
/// freezes the block.
#[derive(Debug, Default)]
pub struct BodyBuilder {
    params: SmallVec<[DType; 4]>,
    instrs: Vec<ScalarInstr>,
}

impl BodyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block parameter and return its handle.
    pub fn append_param(&mut self, dtype: DType) -> ScalarValue {
        self.params.push(dtype);
        ScalarValue::Param(self.params.len() - 1)
    }

    /// Append an instruction and return its result handle.
    pub fn push(&mut self, instr: ScalarInstr) -> ScalarValue {
        self.instrs.push(instr);
        ScalarValue::Instr(self.instrs.len() - 1)
    }

    /// Type of a value already defined in the block under construction.
    pub fn value_type(&self, value: ScalarValue) -> Result<DType> {
        lookup_type(&self.params, &self.instrs, value)
    }

    /// Attach the terminator and freeze the block.
    pub fn terminate(self, yields: SmallVec<[ScalarValue; 1]>) -> Result<Body> {
        for value in &yields {
            lookup_type(&self.params, &self.instrs, *value)?;
        }
        Ok(Body { params: self.params, instrs: self.instrs, yields })
    }
}

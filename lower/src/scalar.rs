//! Elementwise kind → scalar instruction mapping.
//!
//! Given a kind tag and the scalar handles bound to the operation's inputs,
//! append the implementing instruction(s) to the body under construction and
//! return the result handle. Kind/type incompatibilities are reported as
//! errors; the calling pattern treats them as a decline.

use snafu::ensure;

use loam_ir::{BinaryOp, BodyBuilder, ComparePredicate, ElementwiseKind, ScalarInstr, ScalarValue, UnaryOp};

use crate::error::{
    DTypeMismatchSnafu, InvalidDTypeForBinaryOpSnafu, InvalidDTypeForCompareSnafu,
    InvalidDTypeForUnaryOpSnafu, OperandCountSnafu, Result, SelectConditionNotBoolSnafu,
};

/// Append the scalar instruction(s) implementing `kind` and return the
/// result handle.
pub fn map_elementwise(
    kind: ElementwiseKind,
    args: &[ScalarValue],
    b: &mut BodyBuilder,
) -> Result<ScalarValue> {
    ensure!(
        args.len() == kind.num_inputs(),
        OperandCountSnafu { kind: kind.to_string(), expected: kind.num_inputs(), found: args.len() }
    );

    match kind {
        ElementwiseKind::Unary(operation) => {
            let dtype = b.value_type(args[0])?;
            match operation {
                UnaryOp::Exp => {
                    ensure!(dtype.is_float(), InvalidDTypeForUnaryOpSnafu { operation, dtype });
                    Ok(b.push(ScalarInstr::Unary { op: operation, operand: args[0], dtype }))
                }
            }
        }

        ElementwiseKind::Binary(operation) => {
            let lhs = b.value_type(args[0])?;
            let rhs = b.value_type(args[1])?;
            ensure!(lhs == rhs, DTypeMismatchSnafu { lhs, rhs });
            map_binary(operation, args[0], args[1], lhs, b)
        }

        ElementwiseKind::Compare(predicate) => {
            let lhs = b.value_type(args[0])?;
            let rhs = b.value_type(args[1])?;
            ensure!(lhs == rhs, DTypeMismatchSnafu { lhs, rhs });
            ensure!(
                !lhs.is_bool() && (lhs.is_int() || lhs.is_float()),
                InvalidDTypeForCompareSnafu { predicate, dtype: lhs }
            );
            Ok(b.push(ScalarInstr::Compare { predicate, lhs: args[0], rhs: args[1] }))
        }

        ElementwiseKind::Select => {
            let cond = b.value_type(args[0])?;
            ensure!(cond.is_bool(), SelectConditionNotBoolSnafu { actual: cond });
            let lhs = b.value_type(args[1])?;
            let rhs = b.value_type(args[2])?;
            ensure!(lhs == rhs, DTypeMismatchSnafu { lhs, rhs });
            Ok(b.push(ScalarInstr::Select {
                cond: args[0],
                on_true: args[1],
                on_false: args[2],
                dtype: lhs,
            }))
        }
    }
}

fn map_binary(
    operation: BinaryOp,
    lhs: ScalarValue,
    rhs: ScalarValue,
    dtype: loam_dtype::DType,
    b: &mut BodyBuilder,
) -> Result<ScalarValue> {
    match operation {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            ensure!(
                !dtype.is_bool() && (dtype.is_int() || dtype.is_float()),
                InvalidDTypeForBinaryOpSnafu { operation, dtype }
            );
            Ok(b.push(ScalarInstr::Binary { op: operation, lhs, rhs, dtype }))
        }

        BinaryOp::And => {
            ensure!(
                dtype.is_bool() || dtype.is_int(),
                InvalidDTypeForBinaryOpSnafu { operation, dtype }
            );
            Ok(b.push(ScalarInstr::Binary { op: operation, lhs, rhs, dtype }))
        }

        // No single scalar max/min instruction exists at this level: lower
        // to a comparison plus a select.
        BinaryOp::Max | BinaryOp::Min => {
            ensure!(
                !dtype.is_bool() && (dtype.is_int() || dtype.is_float()),
                InvalidDTypeForBinaryOpSnafu { operation, dtype }
            );
            let predicate =
                if operation == BinaryOp::Max { ComparePredicate::Gt } else { ComparePredicate::Lt };
            let cond = b.push(ScalarInstr::Compare { predicate, lhs, rhs });
            Ok(b.push(ScalarInstr::Select { cond, on_true: lhs, on_false: rhs, dtype }))
        }
    }
}

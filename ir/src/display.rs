//! Textual rendering of the representation for logs and test diagnostics.
//!
//! This is a debugging aid, not a serialization format: nothing parses it
//! back.

use std::fmt;

use itertools::Itertools;

use crate::body::{Body, ScalarInstr, ScalarValue};
use crate::function::{Function, ValueId};
use crate::nest::{IndexExpr, IndexMap, IteratorKind, LoopNestOp};
use crate::op::BufferOp;
use crate::shape::{BufferType, Extent};
use crate::types::{BinaryOp, ComparePredicate, ElementwiseKind, UnaryOp};

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.raw())
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Dynamic => f.write_str("?"),
        }
    }
}

impl fmt::Display for BufferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buf<")?;
        for extent in self.shape() {
            write!(f, "{extent}x")?;
        }
        write!(f, "{}>", self.elem())
    }
}

impl fmt::Display for IndexExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iter(i) => write!(f, "d{i}"),
            Self::Zero => f.write_str("0"),
        }
    }
}

impl fmt::Display for IndexMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) -> ({})",
            (0..self.rank_in()).map(|i| format!("d{i}")).format(", "),
            self.exprs().iter().format(", ")
        )
    }
}

impl fmt::Display for IteratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parallel => f.write_str("parallel"),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exp => f.write_str("exp"),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Max => "max",
            Self::Min => "min",
            Self::And => "and",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ComparePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ElementwiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary(op) => write!(f, "{op}"),
            Self::Binary(op) => write!(f, "{op}"),
            Self::Compare(predicate) => write!(f, "cmp_{predicate}"),
            Self::Select => f.write_str("select"),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param(i) => write!(f, "%arg{i}"),
            Self::Instr(i) => write!(f, "%t{i}"),
        }
    }
}

impl fmt::Display for ScalarInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary { op, operand, dtype } => write!(f, "{op} {operand} : {dtype}"),
            Self::Binary { op, lhs, rhs, dtype } => write!(f, "{op} {lhs}, {rhs} : {dtype}"),
            Self::Compare { predicate, lhs, rhs } => write!(f, "cmp {predicate} {lhs}, {rhs}"),
            Self::Select { cond, on_true, on_false, dtype } => {
                write!(f, "select {cond}, {on_true}, {on_false} : {dtype}")
            }
            Self::IndexCast { src, dtype } => write!(f, "index_cast {src} : {dtype}"),
            Self::SiToFp { src, dtype } => write!(f, "sitofp {src} : {dtype}"),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .params()
            .iter()
            .enumerate()
            .map(|(i, dtype)| format!("%arg{i}: {dtype}"))
            .format(", ");
        writeln!(f, "body({params}) {{")?;
        for (i, instr) in self.instrs().iter().enumerate() {
            writeln!(f, "    %t{i} = {instr}")?;
        }
        writeln!(f, "    yield {}", self.yields().iter().format(", "))?;
        write!(f, "  }}")
    }
}

impl fmt::Display for LoopNestOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "loop_nest ins({}) outs({}) iterators[{}] {{",
            self.inputs().iter().format(", "),
            self.outputs().iter().format(", "),
            self.iterator_kinds().iter().format(", ")
        )?;
        for (id, map) in self.operands().iter().zip(self.index_maps()) {
            writeln!(f, "  {id}: {map}")?;
        }
        writeln!(f, "  {}", self.body())?;
        write!(f, "}}")
    }
}

impl fmt::Display for BufferOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elementwise { kind, operands } => {
                write!(f, "{kind}({})", operands.iter().format(", "))
            }
            Self::BroadcastInDim { source, result, broadcast_dimensions } => {
                write!(f, "broadcast_in_dim({source}, {result}) dims = ")?;
                match broadcast_dimensions {
                    Some(dims) => write!(f, "[{}]", dims.iter().format(", ")),
                    None => f.write_str("none"),
                }
            }
            Self::Iota { result, axis } => write!(f, "iota({result}) axis = {axis}"),
            Self::LoopNest(nest) => write!(f, "{nest}"),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "func @{} {{", self.name())?;
        for (i, ty) in self.values().iter().enumerate() {
            writeln!(f, "  %{i} = {ty}")?;
        }
        for op in self.body() {
            writeln!(f, "  {op}")?;
        }
        write!(f, "}}")
    }
}

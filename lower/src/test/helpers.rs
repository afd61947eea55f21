//! Shared builders for conversion tests.

use loam_dtype::DType;
use loam_ir::{BufferType, Function, ValueId};

/// Register a fully static buffer.
pub fn buf(func: &mut Function, shape: &[u64], elem: DType) -> ValueId {
    func.add_buffer(BufferType::fixed(shape, elem))
}

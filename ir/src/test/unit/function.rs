use smallvec::smallvec;

use loam_dtype::DType;

use crate::function::Function;
use crate::op::BufferOp;
use crate::shape::{BufferType, Extent};
use crate::types::{BinaryOp, ElementwiseKind};

#[test]
fn value_handles_resolve_to_their_types() {
    let mut func = Function::new("main");
    let a = func.add_buffer(BufferType::fixed(&[4], DType::Float32));
    let b = func.add_buffer(BufferType::new([Extent::Dynamic], DType::Int64));

    assert_eq!(func.buffer_type(a).rank(), 1);
    assert!(func.buffer_type(a).is_fully_static());
    assert!(!func.buffer_type(b).is_fully_static());
    assert_eq!(func.buffer_type(b).elem(), DType::Int64);
}

#[test]
fn replace_keeps_the_slot() {
    let mut func = Function::new("main");
    let a = func.add_buffer(BufferType::fixed(&[4], DType::Float32));
    let out = func.add_buffer(BufferType::fixed(&[4], DType::Float32));

    func.push(BufferOp::Iota { result: a, axis: 0 });
    func.push(BufferOp::Elementwise {
        kind: ElementwiseKind::Binary(BinaryOp::Add),
        operands: smallvec![a, a, out],
    });

    func.replace(0, BufferOp::Iota { result: out, axis: 0 });
    assert_eq!(func.body().len(), 2);
    assert_eq!(func.body()[0], BufferOp::Iota { result: out, axis: 0 });
}

#[test]
fn display_renders_values_and_operations() {
    let mut func = Function::new("main");
    let a = func.add_buffer(BufferType::fixed(&[2, 3], DType::Float32));
    let out = func.add_buffer(BufferType::fixed(&[2, 3], DType::Float32));
    func.push(BufferOp::BroadcastInDim { source: a, result: out, broadcast_dimensions: Some(vec![0, 1]) });

    let rendered = func.to_string();
    assert!(rendered.contains("func @main"));
    assert!(rendered.contains("%0 = buf<2x3xf32>"));
    assert!(rendered.contains("broadcast_in_dim(%0, %1) dims = [0, 1]"));
}

#[test]
fn dynamic_extents_render_as_question_marks() {
    let ty = BufferType::new([Extent::Dynamic, Extent::Fixed(8)], DType::UInt8);
    assert_eq!(ty.to_string(), "buf<?x8xu8>");
}

//! Property tests over generated shapes.

use proptest::prelude::*;

use loam_dtype::DType;
use loam_ir::{BinaryOp, BufferOp, BufferType, ElementwiseKind, Function, IndexExpr, IndexMap};
use smallvec::smallvec;

use crate::nestify::{convert_broadcast, convert_elementwise};
use crate::pass;

fn shape_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..5, 1usize..4)
}

proptest! {
    // Pointwise conversion: nest rank equals the shared operand rank, every
    // operand gets the identity map, and the mapper sees exactly the inputs.
    #[test]
    fn pointwise_nests_carry_identity_maps(shape in shape_strategy()) {
        let mut func = Function::new("prop");
        let ids: Vec<_> =
            (0..3).map(|_| func.add_buffer(BufferType::fixed(&shape, DType::Float32))).collect();

        let nest =
            convert_elementwise(&func, ElementwiseKind::Binary(BinaryOp::Add), &ids).unwrap();
        prop_assert_eq!(nest.nest_rank(), shape.len());
        prop_assert_eq!(nest.index_maps().len(), 3);
        prop_assert!(nest.index_maps().iter().all(IndexMap::is_identity));
        prop_assert_eq!(nest.body().params().len(), 3);
        prop_assert_eq!(nest.body().instrs().len(), 1);
        prop_assert_eq!(nest.body().yields().len(), 1);
    }

    // Broadcast onto the same shape with the in-order mapping: a coordinate
    // is pinned to 0 exactly when its source extent is 1.
    #[test]
    fn broadcast_pins_exactly_the_degenerate_dims(shape in shape_strategy()) {
        let mut func = Function::new("prop");
        let src = func.add_buffer(BufferType::fixed(&shape, DType::Float32));
        let out = func.add_buffer(BufferType::fixed(&shape, DType::Float32));
        let dims: Vec<usize> = (0..shape.len()).collect();

        let nest = convert_broadcast(&func, src, out, Some(&dims)).unwrap();
        let map = &nest.index_maps()[0];
        prop_assert_eq!(map.output_rank(), shape.len());
        for (i, &extent) in shape.iter().enumerate() {
            let expected = if extent == 1 { IndexExpr::Zero } else { IndexExpr::Iter(i) };
            prop_assert_eq!(map.exprs()[i], expected);
        }
    }

    // Running the pass a second time changes nothing.
    #[test]
    fn converted_functions_are_stable_under_rerun(shape in shape_strategy()) {
        let mut func = Function::new("prop");
        let a = func.add_buffer(BufferType::fixed(&shape, DType::Float32));
        let b = func.add_buffer(BufferType::fixed(&shape, DType::Float32));
        let out = func.add_buffer(BufferType::fixed(&shape, DType::Float32));
        func.push(BufferOp::Elementwise {
            kind: ElementwiseKind::Binary(BinaryOp::Mul),
            operands: smallvec![a, b, out],
        });

        pass::run(&mut func).unwrap();
        let converted = func.clone();
        pass::run(&mut func).unwrap();
        prop_assert_eq!(func, converted);
    }
}

use loam_dtype::DType;
use loam_ir::{Function, ScalarInstr, ScalarValue};

use crate::error::Error;
use crate::nestify::convert_iota;
use crate::test::helpers::buf;

#[test]
fn integer_output_casts_the_axis_variable() {
    let mut func = Function::new("main");
    let out = buf(&mut func, &[5], DType::Int32);

    let nest = convert_iota(&func, out, 0).unwrap();

    assert!(nest.indexed());
    assert_eq!(nest.nest_rank(), 1);
    assert_eq!(nest.num_inputs(), 0);
    assert_eq!(nest.num_outputs(), 1);
    assert_eq!(nest.index_maps().len(), 1);
    assert!(nest.index_maps()[0].is_identity());

    // Leading induction-variable parameter, then the output element slot.
    assert_eq!(nest.body().params(), [DType::Index, DType::Int32]);
    assert_eq!(
        nest.body().instrs(),
        [ScalarInstr::IndexCast { src: ScalarValue::Param(0), dtype: DType::Int32 }]
    );
    assert_eq!(nest.body().yields(), [ScalarValue::Instr(0)]);
}

#[test]
fn float_output_adds_an_int_to_float_conversion() {
    let mut func = Function::new("main");
    let out = buf(&mut func, &[5], DType::Float32);

    let nest = convert_iota(&func, out, 0).unwrap();
    assert_eq!(
        nest.body().instrs(),
        [
            ScalarInstr::IndexCast { src: ScalarValue::Param(0), dtype: DType::Int32 },
            ScalarInstr::SiToFp { src: ScalarValue::Instr(0), dtype: DType::Float32 },
        ]
    );
    assert_eq!(nest.body().yields(), [ScalarValue::Instr(1)]);
}

#[test]
fn half_precision_output_goes_through_i16() {
    let mut func = Function::new("main");
    let out = buf(&mut func, &[3], DType::Float16);

    let nest = convert_iota(&func, out, 0).unwrap();
    assert_eq!(
        nest.body().instrs()[0],
        ScalarInstr::IndexCast { src: ScalarValue::Param(0), dtype: DType::Int16 }
    );
}

#[test]
fn unsigned_output_is_cast_directly() {
    let mut func = Function::new("main");
    let out = buf(&mut func, &[4], DType::UInt64);

    let nest = convert_iota(&func, out, 0).unwrap();
    assert_eq!(
        nest.body().instrs(),
        [ScalarInstr::IndexCast { src: ScalarValue::Param(0), dtype: DType::UInt64 }]
    );
}

#[test]
fn generation_axis_picks_the_matching_induction_variable() {
    let mut func = Function::new("main");
    let out = buf(&mut func, &[2, 6], DType::Int64);

    let nest = convert_iota(&func, out, 1).unwrap();
    assert_eq!(nest.body().params(), [DType::Index, DType::Index, DType::Int64]);
    assert_eq!(
        nest.body().instrs(),
        [ScalarInstr::IndexCast { src: ScalarValue::Param(1), dtype: DType::Int64 }]
    );
}

#[test]
fn axis_outside_the_output_rank_declines() {
    let mut func = Function::new("main");
    let out = buf(&mut func, &[5], DType::Int32);

    let err = convert_iota(&func, out, 1).unwrap_err();
    assert_eq!(err, Error::IotaAxisOutOfRange { axis: 1, rank: 1 });
}

#[test]
fn rank_zero_output_declines() {
    let mut func = Function::new("main");
    let out = buf(&mut func, &[], DType::Int32);

    let err = convert_iota(&func, out, 0).unwrap_err();
    assert_eq!(err, Error::ZeroRankOperand { value: out });
}

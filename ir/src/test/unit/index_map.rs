use smallvec::smallvec;

use crate::nest::{IndexExpr, IndexMap};

#[test]
fn identity_maps_each_dimension_to_itself() {
    let map = IndexMap::identity(3);
    assert_eq!(map.rank_in(), 3);
    assert_eq!(map.output_rank(), 3);
    assert!(map.is_identity());
    assert_eq!(map.to_string(), "(d0, d1, d2) -> (d0, d1, d2)");
}

#[test]
fn rank_zero_identity_is_empty() {
    let map = IndexMap::identity(0);
    assert!(map.is_identity());
    assert_eq!(map.to_string(), "() -> ()");
}

#[test]
fn broadcast_map_pins_degenerate_coordinates() {
    let map = IndexMap::new(2, smallvec![IndexExpr::Zero]).unwrap();
    assert_eq!(map.rank_in(), 2);
    assert_eq!(map.output_rank(), 1);
    assert!(!map.is_identity());
    assert_eq!(map.to_string(), "(d0, d1) -> (0)");
}

#[test]
fn permuted_map_is_not_identity() {
    let map = IndexMap::new(2, smallvec![IndexExpr::Iter(1), IndexExpr::Iter(0)]).unwrap();
    assert!(!map.is_identity());
    assert_eq!(map.to_string(), "(d0, d1) -> (d1, d0)");
}

#[test]
fn out_of_range_induction_variable_is_rejected() {
    let err = IndexMap::new(2, smallvec![IndexExpr::Iter(2)]).unwrap_err();
    assert_eq!(
        err,
        crate::Error::IterOutOfRange { position: 0, index: 2, rank_in: 2 }
    );
}

use super::{Pair, Quadruple, Quintuple, Triple, Tuple};
use test_utilities::{assert_slot_absent, assert_slot_eq};

fn check_uniform_access(tuple: &dyn Tuple, arity: usize) {
    assert_eq!(tuple.len(), arity);
    assert!(!tuple.is_empty());

    for index in 0..arity {
        assert!(tuple.get(index).is_some());
    }

    assert_slot_absent(tuple.get(arity));
    assert_slot_absent(tuple.get(usize::MAX));
}

#[test]
fn test_pair() {
    let pair = Pair::new(1, "test");

    assert_eq!(pair.first, 1);
    assert_eq!(pair.second, "test");

    assert_eq!(pair.len(), 2);
    assert_slot_eq(pair.get(0), &1);
    assert_slot_eq(pair.get(1), &"test");
    assert_slot_absent(pair.get(2));

    assert_eq!(pair.unpack(), (1, "test"));
}

#[test]
fn test_triple() {
    let triple = Triple::new(1, "test", true);

    assert_eq!(triple.len(), 3);
    assert_slot_eq(triple.get(0), &1);
    assert_slot_eq(triple.get(1), &"test");
    assert_slot_eq(triple.get(2), &true);
    assert_slot_absent(triple.get(3));

    assert_eq!(triple.unpack(), (1, "test", true));
}

#[test]
fn test_quadruple() {
    let quadruple = Quadruple::new(1, "test", true, 2.0);

    assert_eq!(quadruple.len(), 4);
    assert_slot_eq(quadruple.get(3), &2.0);
    assert_slot_absent(quadruple.get(4));

    assert_eq!(quadruple.unpack(), (1, "test", true, 2.0));
}

#[test]
fn test_quintuple() {
    let quintuple = Quintuple::new(1, "test", true, 2.0, vec![1_u8, 2, 3]);

    assert_eq!(quintuple.len(), 5);
    assert_slot_eq(quintuple.get(4), &vec![1_u8, 2, 3]);
    assert_slot_absent(quintuple.get(5));

    assert_eq!(quintuple.clone().unpack(), (1, "test", true, 2.0, vec![1_u8, 2, 3]));
}

#[test]
fn test_out_of_range_is_absent_not_an_error() {
    check_uniform_access(&Pair::new(1, "test"), 2);
    check_uniform_access(&Triple::new(1, "test", true), 3);
    check_uniform_access(&Quadruple::new(1, "test", true, 2.0), 4);
    check_uniform_access(&Quintuple::new(1, "test", true, 2.0, vec![1_u8, 2, 3]), 5);
}

#[test]
fn test_boxed_matches_value_construction() {
    let value = Triple::new(1, "test", true);
    let boxed = Triple::boxed(1, "test", true);

    assert_eq!(boxed.len(), value.len());

    assert_slot_eq(boxed.get(0), &1);
    assert_slot_eq(boxed.get(1), &"test");
    assert_slot_eq(boxed.get(2), &true);
    assert_slot_absent(boxed.get(3));

    assert_eq!(boxed.unpack(), value.unpack());
}

#[test]
fn test_from_native_tuples() {
    assert_eq!(Pair::from((1, "test")).unpack(), (1, "test"));
    assert_eq!(Triple::from((1, "test", true)).unpack(), (1, "test", true));
    assert_eq!(Quadruple::from((1, "test", true, 2.0)).unpack(), (1, "test", true, 2.0));

    assert_eq!(
        Quintuple::from((1, "test", true, 2.0, [1_u8, 2, 3])).unpack(),
        (1, "test", true, 2.0, [1_u8, 2, 3]),
    );

    assert_eq!(<(i32, &str)>::from(Pair::new(1, "test")), (1, "test"));
}

#[test]
fn test_direct_field_writes() {
    let mut pair = Pair::new(12, 34);

    pair.second = 56;

    assert_eq!(pair.unpack(), (12, 56));
}

#[test]
fn test_display() {
    assert_eq!(Pair::new(1, "test").to_string(), "(1, test)");
    assert_eq!(Triple::new(1, "test", true).to_string(), "(1, test, true)");
    assert_eq!(Quadruple::new(1, "test", true, 2.5).to_string(), "(1, test, true, 2.5)");
    assert_eq!(Quintuple::new(1, 2, 3, 4, 5).to_string(), "(1, 2, 3, 4, 5)");
}

#[test]
fn test_heterogeneous_collection() {
    let rows: Vec<Box<dyn Tuple>> = vec![
        Pair::boxed(1, "one"),
        Triple::boxed(2, "two", true),
        Quadruple::boxed(3, "three", false, 2.0),
        Quintuple::boxed(4, "four", true, 4.0, vec![1_u8, 2, 3]),
    ];

    let names = ["one", "two", "three", "four"];

    for (offset, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), offset + 2);
        assert_slot_eq(row.get(1), &names[offset]);

        for index in 0..row.len() {
            assert!(row.get(index).is_some());
        }

        assert_slot_absent(row.get(row.len()));
    }
}

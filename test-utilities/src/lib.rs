#![expect(missing_docs, clippy::missing_panics_doc, reason = "internal crate")]

use std::any::Any;
use std::fmt::Debug;

pub fn assert_slot_eq<T>(slot: Option<&dyn Any>, expected: &T)
where
    T: Any + Debug + PartialEq,
{
    match slot {
        None => panic!("expected slot holding {expected:?}, got an absent slot"),
        Some(value) => match value.downcast_ref::<T>() {
            None => panic!("expected slot holding {expected:?}, got a value of a different type"),
            Some(actual) => assert_eq!(actual, expected),
        },
    }
}

pub fn assert_slot_absent(slot: Option<&dyn Any>) {
    assert!(slot.is_none(), "expected an absent slot, got a present value");
}

//! # fixed-tuple
//!
//! Fixed-arity generic tuple types — [`Pair`], [`Triple`], [`Quadruple`] and
//! [`Quintuple`] — that bundle heterogeneous values into a single value, plus
//! uniform indexed access to their slots through the [`Tuple`] trait.
//!
//! Example:
//!
//! ```rust
//! use fixed_tuple::{Pair, Triple, Tuple};
//!
//! // Bundle related values into one unit.
//! let position = Pair::new(12, 34);
//!
//! assert_eq!(position.first, 12);
//! assert_eq!(position.second, 34);
//!
//! // Unpacking is the exact inverse of construction.
//! let (x, y) = position.unpack();
//!
//! assert_eq!((x, y), (12, 34));
//!
//! // Native tuples convert in both directions.
//! let color = Triple::from((0xff_u8, 0x7f_u8, 0x00_u8));
//!
//! assert_eq!(<(u8, u8, u8)>::from(color), (0xff, 0x7f, 0x00));
//!
//! // The `Tuple` trait gives arity-erased access for code that does not
//! // know the concrete tuple type.
//! let rows: Vec<Box<dyn Tuple>> = vec![Pair::boxed(1, "one"), Triple::boxed(2, "two", true)];
//!
//! assert_eq!(rows[0].len(), 2);
//! assert_eq!(rows[1].len(), 3);
//!
//! assert!(rows[1].get(2).is_some_and(|slot| slot.downcast_ref::<bool>() == Some(&true)));
//!
//! // Out-of-range access is a normal outcome, not an error.
//! assert!(rows[0].get(2).is_none());
//! ```

use std::any::Any;

mod display;
mod tuples;

#[cfg(test)]
mod tests;

pub use self::tuples::{Pair, Quadruple, Quintuple, Triple};

/// An arity-erased view of a fixed-arity tuple.
///
/// Every tuple type in this crate implements `Tuple` whenever all of its
/// slots are `'static`. The trait is the uniform path for code that does not
/// know the concrete arity; the public fields are the fast, statically typed
/// one.
pub trait Tuple {
    /// Returns the number of slots in the tuple.
    fn len(&self) -> usize;

    /// Returns `true` if the tuple has no slots, which never holds for the
    /// types in this crate.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the value in slot `index`, or `None` if the
    /// index is out of range.
    ///
    /// Out-of-range access is a defined outcome rather than an error, so
    /// this method never panics.
    fn get(&self, index: usize) -> Option<&dyn Any>;
}

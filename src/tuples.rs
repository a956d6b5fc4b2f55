//! The fixed-arity tuple types.

use crate::Tuple;
use std::any::Any;

macro_rules! impl_tuple {
    ($name:ident, $len:tt, { $($index:tt => $field:ident: $t:ident,)+ }) => {
        impl<$($t,)+> Tuple for $name<$($t,)+>
        where
            $($t: Any,)+
        {
            fn len(&self) -> usize {
                $len
            }

            fn get(&self, index: usize) -> Option<&dyn Any> {
                match index {
                    $($index => Some(&self.$field),)+
                    _ => None,
                }
            }
        }

        impl<$($t,)+> From<($($t,)+)> for $name<$($t,)+> {
            fn from(value: ($($t,)+)) -> Self {
                let ($($field,)+) = value;

                Self { $($field,)+ }
            }
        }

        impl<$($t,)+> From<$name<$($t,)+>> for ($($t,)+) {
            fn from(value: $name<$($t,)+>) -> Self {
                ($(value.$field,)+)
            }
        }
    };
}

/// A pair of values.
///
/// The slots are public fields; read or write them directly for statically
/// typed access, and go through [`Tuple`] when the arity is not known at
/// compile time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pair<T0, T1> {
    /// The first value.
    pub first: T0,
    /// The second value.
    pub second: T1,
}

impl<T0, T1> Pair<T0, T1> {
    /// Creates a new `Pair` from the given values.
    ///
    /// ```rust
    /// use fixed_tuple::Pair;
    ///
    /// let pair = Pair::new(1, "test");
    ///
    /// assert_eq!(pair.first, 1);
    /// assert_eq!(pair.second, "test");
    /// ```
    #[must_use]
    pub const fn new(first: T0, second: T1) -> Self {
        Self { first, second }
    }

    /// Creates a new `Pair` on the heap.
    ///
    /// The returned box coerces to `Box<dyn Tuple>` when both slots are
    /// `'static`.
    #[must_use]
    pub fn boxed(first: T0, second: T1) -> Box<Self> {
        Box::new(Self::new(first, second))
    }

    /// Returns the slots as a native tuple, consuming the pair.
    ///
    /// ```rust
    /// use fixed_tuple::Pair;
    ///
    /// let (first, second) = Pair::new(1, "test").unpack();
    ///
    /// assert_eq!((first, second), (1, "test"));
    /// ```
    #[must_use]
    pub fn unpack(self) -> (T0, T1) {
        (self.first, self.second)
    }
}

impl_tuple! { Pair, 2, { 0 => first: T0, 1 => second: T1, } }

/// A triple of values.
#[derive(Clone, Copy, Debug, Default)]
pub struct Triple<T0, T1, T2> {
    /// The first value.
    pub first: T0,
    /// The second value.
    pub second: T1,
    /// The third value.
    pub third: T2,
}

impl<T0, T1, T2> Triple<T0, T1, T2> {
    /// Creates a new `Triple` from the given values.
    #[must_use]
    pub const fn new(first: T0, second: T1, third: T2) -> Self {
        Self { first, second, third }
    }

    /// Creates a new `Triple` on the heap.
    #[must_use]
    pub fn boxed(first: T0, second: T1, third: T2) -> Box<Self> {
        Box::new(Self::new(first, second, third))
    }

    /// Returns the slots as a native tuple, consuming the triple.
    #[must_use]
    pub fn unpack(self) -> (T0, T1, T2) {
        (self.first, self.second, self.third)
    }
}

impl_tuple! { Triple, 3, { 0 => first: T0, 1 => second: T1, 2 => third: T2, } }

/// A quadruple of values.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quadruple<T0, T1, T2, T3> {
    /// The first value.
    pub first: T0,
    /// The second value.
    pub second: T1,
    /// The third value.
    pub third: T2,
    /// The fourth value.
    pub fourth: T3,
}

impl<T0, T1, T2, T3> Quadruple<T0, T1, T2, T3> {
    /// Creates a new `Quadruple` from the given values.
    #[must_use]
    pub const fn new(first: T0, second: T1, third: T2, fourth: T3) -> Self {
        Self {
            first,
            second,
            third,
            fourth,
        }
    }

    /// Creates a new `Quadruple` on the heap.
    #[must_use]
    pub fn boxed(first: T0, second: T1, third: T2, fourth: T3) -> Box<Self> {
        Box::new(Self::new(first, second, third, fourth))
    }

    /// Returns the slots as a native tuple, consuming the quadruple.
    #[must_use]
    pub fn unpack(self) -> (T0, T1, T2, T3) {
        (self.first, self.second, self.third, self.fourth)
    }
}

impl_tuple! { Quadruple, 4, { 0 => first: T0, 1 => second: T1, 2 => third: T2, 3 => fourth: T3, } }

/// A quintuple of values.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quintuple<T0, T1, T2, T3, T4> {
    /// The first value.
    pub first: T0,
    /// The second value.
    pub second: T1,
    /// The third value.
    pub third: T2,
    /// The fourth value.
    pub fourth: T3,
    /// The fifth value.
    pub fifth: T4,
}

impl<T0, T1, T2, T3, T4> Quintuple<T0, T1, T2, T3, T4> {
    /// Creates a new `Quintuple` from the given values.
    #[must_use]
    pub const fn new(first: T0, second: T1, third: T2, fourth: T3, fifth: T4) -> Self {
        Self {
            first,
            second,
            third,
            fourth,
            fifth,
        }
    }

    /// Creates a new `Quintuple` on the heap.
    #[must_use]
    pub fn boxed(first: T0, second: T1, third: T2, fourth: T3, fifth: T4) -> Box<Self> {
        Box::new(Self::new(first, second, third, fourth, fifth))
    }

    /// Returns the slots as a native tuple, consuming the quintuple.
    #[must_use]
    pub fn unpack(self) -> (T0, T1, T2, T3, T4) {
        (self.first, self.second, self.third, self.fourth, self.fifth)
    }
}

impl_tuple! { Quintuple, 5, { 0 => first: T0, 1 => second: T1, 2 => third: T2, 3 => fourth: T3, 4 => fifth: T4, } }

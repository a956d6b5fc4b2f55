//! Human-readable formatting for the tuple types.

use crate::{Pair, Quadruple, Quintuple, Triple};
use std::fmt::{self, Display, Formatter};

impl<T0, T1> Display for Pair<T0, T1>
where
    T0: Display,
    T1: Display,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

impl<T0, T1, T2> Display for Triple<T0, T1, T2>
where
    T0: Display,
    T1: Display,
    T2: Display,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.first, self.second, self.third)
    }
}

impl<T0, T1, T2, T3> Display for Quadruple<T0, T1, T2, T3>
where
    T0: Display,
    T1: Display,
    T2: Display,
    T3: Display,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.first, self.second, self.third, self.fourth)
    }
}

impl<T0, T1, T2, T3, T4> Display for Quintuple<T0, T1, T2, T3, T4>
where
    T0: Display,
    T1: Display,
    T2: Display,
    T3: Display,
    T4: Display,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.first, self.second, self.third, self.fourth, self.fifth
        )
    }
}

//! The [`Spread`] trait powering [`Collection::map_spread`].
//!
//! [`Spread`] is implemented for tuples of arity 1 through 8: spreading a
//! tuple passes its elements as positional arguments to the supplied
//! closure. Because the implementation set is closed, calling `map_spread`
//! on a collection whose values are not tuples (or whose tuple arity does
//! not match the closure) is rejected at compile time; there is no runtime
//! shape-mismatch condition.
//!
//! [`Collection::map_spread`]: crate::Collection::map_spread
//!
//! # Examples
//!
//! ```rust
//! use gather::Spread;
//!
//! let mut full_name = |first: &str, last: &str| format!("{first} {last}");
//! assert_eq!(("Terry", "Davis").spread(&mut full_name), "Terry Davis");
//! ```

/// Values whose elements can be spread as positional arguments to a
/// closure.
///
/// `F` is the closure type and `R` its result. See the
/// [module documentation](self) for the rationale behind the closed
/// implementation set.
pub trait Spread<F, R> {
    /// Consumes `self` and applies `transform` to its elements.
    fn spread(self, transform: &mut F) -> R;
}

macro_rules! impl_spread_for_tuple {
    ($($element:ident),+) => {
        impl<F, R, $($element),+> Spread<F, R> for ($($element,)+)
        where
            F: FnMut($($element),+) -> R,
        {
            #[inline]
            #[allow(non_snake_case)]
            fn spread(self, transform: &mut F) -> R {
                let ($($element,)+) = self;
                transform($($element),+)
            }
        }
    };
}

impl_spread_for_tuple!(A);
impl_spread_for_tuple!(A, B);
impl_spread_for_tuple!(A, B, C);
impl_spread_for_tuple!(A, B, C, D);
impl_spread_for_tuple!(A, B, C, D, E);
impl_spread_for_tuple!(A, B, C, D, E, G);
impl_spread_for_tuple!(A, B, C, D, E, G, H);
impl_spread_for_tuple!(A, B, C, D, E, G, H, I);

#[cfg(test)]
mod tests {
    use super::Spread;

    #[test]
    fn spreads_single_element_tuple() {
        let mut double = |value: i32| value * 2;
        assert_eq!((21,).spread(&mut double), 42);
    }

    #[test]
    fn spreads_mixed_element_types() {
        let mut describe = |name: &str, age: u8, active: bool| format!("{name}/{age}/{active}");
        assert_eq!(("Terry", 54, true).spread(&mut describe), "Terry/54/true");
    }

    #[test]
    fn closure_state_persists_across_spreads() {
        let mut total = 0;
        let mut accumulate = |left: i32, right: i32| {
            total += left + right;
            total
        };
        assert_eq!((1, 2).spread(&mut accumulate), 3);
        assert_eq!((3, 4).spread(&mut accumulate), 10);
    }
}

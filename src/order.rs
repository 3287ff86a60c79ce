// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Ordering Injection
//!
//! Spans never compare elements themselves; every comparison goes through a
//! [`TotalOrder`] supplied at construction. This module provides the trait
//! together with the two implementations most callers need:
//!
//! - [`Natural`]: the element type's own `Ord`, as a zero-sized order. This
//!   is the default type parameter of `Span`, so callers working with plainly
//!   ordered types never see this module.
//! - [`FnOrder`]: a pair of caller-supplied closures (strict less-than and
//!   equality), for element types whose natural ordering is absent or wrong
//!   for the use case (case-insensitive text, ordering by a key, ...).
//!
//! Implementations must describe a strict weak ordering, and `equal` must
//! agree with `less` (`equal(a, b)` iff neither `less(a, b)` nor
//! `less(b, a)`). This is a precondition on the implementor; it is not
//! checked at runtime.

use std::fmt;

/// A total ordering over `T`, injected into spans at construction.
///
/// Only `less` is required; `equal` defaults to the equivalence induced by
/// the ordering. Override `equal` when a cheaper direct comparison exists.
///
/// # Examples
///
/// ```rust
/// # use ordspan::order::TotalOrder;
///
/// struct ByLen;
///
/// impl TotalOrder<&str> for ByLen {
///     fn less(&self, a: &&str, b: &&str) -> bool {
///         a.len() < b.len()
///     }
/// }
///
/// assert!(ByLen.less(&"ab", &"abc"));
/// assert!(ByLen.equal(&"ab", &"xy"));
/// ```
pub trait TotalOrder<T> {
    /// Returns `true` if `a` is strictly less than `b` under this ordering.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns `true` if `a` and `b` are equivalent under this ordering.
    fn equal(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The natural ordering of `T: Ord`, as a zero-sized [`TotalOrder`].
///
/// # Examples
///
/// ```rust
/// # use ordspan::order::{Natural, TotalOrder};
///
/// assert!(Natural.less(&1, &2));
/// assert!(Natural.equal(&"abc", &"abc"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Natural;

impl<T: Ord> TotalOrder<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// A [`TotalOrder`] built from a pair of closures.
///
/// The first closure is the strict less-than comparison, the second the
/// equality predicate. The two must be mutually consistent (see the module
/// docs); the crate performs no comparisons outside of them.
///
/// # Examples
///
/// ```rust
/// # use ordspan::order::{FnOrder, TotalOrder};
///
/// let order = FnOrder::new(
///     |a: &&str, b: &&str| a.to_ascii_lowercase() < b.to_ascii_lowercase(),
///     |a: &&str, b: &&str| a.eq_ignore_ascii_case(b),
/// );
///
/// assert!(order.less(&"Apple", &"banana"));
/// assert!(order.equal(&"ABC", &"abc"));
/// ```
#[derive(Clone, Copy)]
pub struct FnOrder<L, E> {
    less: L,
    equal: E,
}

impl<L, E> FnOrder<L, E> {
    /// Creates a new order from a strict less-than closure and an equality
    /// closure.
    #[inline]
    pub fn new(less: L, equal: E) -> Self {
        Self { less, equal }
    }
}

impl<T, L, E> TotalOrder<T> for FnOrder<L, E>
where
    L: Fn(&T, &T) -> bool,
    E: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.less)(a, b)
    }

    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        (self.equal)(a, b)
    }
}

impl<L, E> fmt::Debug for FnOrder<L, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnOrder")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_less() {
        assert!(Natural.less(&1, &2));
        assert!(!Natural.less(&2, &1));
        assert!(!Natural.less(&2, &2));
    }

    #[test]
    fn test_natural_equal() {
        assert!(Natural.equal(&7, &7));
        assert!(!Natural.equal(&7, &8));
    }

    #[test]
    fn test_natural_lexicographic() {
        assert!(Natural.less(&"abc", &"abd"));
        assert!(Natural.less(&"ab", &"abc"));
        assert!(!Natural.less(&"xyz", &"abc"));
    }

    #[test]
    fn test_default_equal_derived_from_less() {
        struct ByFirstByte;

        impl TotalOrder<&[u8]> for ByFirstByte {
            fn less(&self, a: &&[u8], b: &&[u8]) -> bool {
                a.first() < b.first()
            }
        }

        // Distinct slices with the same first byte are equivalent.
        let a: &[u8] = b"apple";
        let b: &[u8] = b"anchor";
        assert!(ByFirstByte.equal(&a, &b));
        assert!(!ByFirstByte.equal(&a, &(b"berry" as &[u8])));
    }

    #[test]
    fn test_fn_order() {
        let order = FnOrder::new(
            |a: &i32, b: &i32| a.abs() < b.abs(),
            |a: &i32, b: &i32| a.abs() == b.abs(),
        );
        assert!(order.less(&1, &-5));
        assert!(order.equal(&-3, &3));
    }

    #[test]
    fn test_fn_order_debug() {
        let order = FnOrder::new(|a: &i32, b: &i32| a < b, |a: &i32, b: &i32| a == b);
        assert_eq!(format!("{:?}", order), "FnOrder");
    }
}

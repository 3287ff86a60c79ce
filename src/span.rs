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

use crate::error::InvalidSpanError;
use crate::order::{Natural, TotalOrder};
use smallvec::SmallVec;
use std::fmt;
use std::ops::{BitAnd, BitOr, Range};

/// A half-open span `[lower, upper)` over a totally ordered element type.
///
/// The lower bound is inclusive and the upper bound is exclusive, so adjacent
/// spans share a boundary value without overlapping. A span whose bounds
/// compare equal is a valid, explicitly representable empty span that
/// contains nothing.
///
/// All comparisons go through a [`TotalOrder`] supplied at construction; the
/// default order `O = Natural` uses the element type's own `Ord`, so spans
/// over plainly ordered types read like ordinary ranges. Spans are immutable
/// values: operations that combine spans produce new spans.
///
/// # Invariants
/// `lower <= upper` under the supplied ordering. Enforced by the checked
/// constructors, asserted in debug builds by the unchecked ones.
///
/// # Examples
///
/// ```rust
/// # use ordspan::span::Span;
///
/// let span = Span::new(1, 5).unwrap();
/// assert!(span.contains(&1));
/// assert!(!span.contains(&5));
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span<T, O = Natural> {
    lower: T,
    upper: T,
    order: O,
}

impl<T: Ord> Span<T> {
    /// Creates a new span `[lower, upper)` under the natural ordering of `T`.
    ///
    /// Returns [`InvalidSpanError`] if `lower > upper`. Equal bounds are
    /// accepted and produce an empty span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let span = Span::new(1, 5).unwrap();
    /// assert_eq!(*span.lower(), 1);
    /// assert_eq!(*span.upper(), 5);
    ///
    /// assert!(Span::new(5, 1).is_err());
    /// assert!(Span::new(3, 3).unwrap().is_empty());
    /// ```
    #[inline]
    pub fn new(lower: T, upper: T) -> Result<Self, InvalidSpanError> {
        Self::with_order(lower, upper, Natural)
    }

    /// Creates a new span without validating the bounds in release builds.
    ///
    /// The caller must ensure `lower <= upper`. A `debug_assert!` catches
    /// violations during development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let span = Span::new_unchecked(1, 5);
    /// assert!(span.contains(&3));
    /// ```
    #[inline]
    pub fn new_unchecked(lower: T, upper: T) -> Self {
        Self::with_order_unchecked(lower, upper, Natural)
    }
}

impl<T, O> Span<T, O>
where
    O: TotalOrder<T>,
{
    /// Creates a new span `[lower, upper)` under a caller-supplied ordering.
    ///
    /// The ordering must be a strict weak ordering with a consistent
    /// equality predicate (see [`TotalOrder`]); the span performs no element
    /// comparisons outside of it.
    ///
    /// Returns [`InvalidSpanError`] if `lower > upper` under the ordering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::order::FnOrder;
    /// # use ordspan::span::Span;
    ///
    /// let order = FnOrder::new(
    ///     |a: &&str, b: &&str| a.to_ascii_lowercase() < b.to_ascii_lowercase(),
    ///     |a: &&str, b: &&str| a.eq_ignore_ascii_case(b),
    /// );
    /// let span = Span::with_order("Alpha", "omega", order).unwrap();
    /// assert!(span.contains(&"Beta"));
    /// ```
    #[inline]
    pub fn with_order(lower: T, upper: T, order: O) -> Result<Self, InvalidSpanError> {
        if order.less(&upper, &lower) {
            return Err(InvalidSpanError);
        }
        Ok(Self {
            lower,
            upper,
            order,
        })
    }

    /// Creates a new span under a caller-supplied ordering without validating
    /// the bounds in release builds.
    ///
    /// The caller must ensure `lower <= upper` under the ordering. A
    /// `debug_assert!` catches violations during development.
    #[inline]
    pub fn with_order_unchecked(lower: T, upper: T, order: O) -> Self {
        debug_assert!(
            !order.less(&upper, &lower),
            "Invalid span: lower limit must not exceed upper limit"
        );
        Self {
            lower,
            upper,
            order,
        }
    }

    /// Returns the inclusive lower bound of the span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let span = Span::new(5, 10).unwrap();
    /// assert_eq!(*span.lower(), 5);
    /// ```
    #[inline]
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// Returns the exclusive upper bound of the span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let span = Span::new(5, 10).unwrap();
    /// assert_eq!(*span.upper(), 10);
    /// ```
    #[inline]
    pub fn upper(&self) -> &T {
        &self.upper
    }

    /// Consumes the span and returns its bounds.
    #[inline]
    pub fn into_inner(self) -> (T, T) {
        (self.lower, self.upper)
    }

    /// Returns `true` if the span is empty (`lower == upper`).
    ///
    /// An empty span is a degenerate, zero-width range. It contains no
    /// values, and intersecting with it yields an empty result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// assert!(Span::new(10, 10).unwrap().is_empty());
    /// assert!(!Span::new(10, 11).unwrap().is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.equal(&self.lower, &self.upper)
    }

    /// Returns `true` if `value` is contained in `[lower, upper)`.
    ///
    /// The lower bound is included and the upper bound is excluded, so a
    /// value sitting exactly on the boundary of two adjacent spans belongs
    /// to the later one. An empty span contains no values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let span = Span::new(1, 5).unwrap();
    /// assert!(span.contains(&1));
    /// assert!(span.contains(&4));
    /// assert!(!span.contains(&5));
    /// assert!(!span.contains(&0));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        !self.order.less(value, &self.lower) && self.order.less(value, &self.upper)
    }

    /// Returns `true` if `value` is contained in the closed range
    /// `[lower, upper]`.
    ///
    /// Both bounds are included. This is the sibling of [`Span::contains`]
    /// for callers that need closed-interval semantics, e.g. alphabetic
    /// range checks where the upper bound itself is a valid member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let span = Span::new(1, 5).unwrap();
    /// assert!(span.contains_inclusive(&5));
    /// assert!(!span.contains_inclusive(&6));
    /// ```
    #[inline]
    pub fn contains_inclusive(&self, value: &T) -> bool {
        !self.order.less(value, &self.lower) && !self.order.less(&self.upper, value)
    }

    /// Returns `true` if `other` lies entirely within this span.
    ///
    /// Containment is boundary-inclusive: a sub-span sharing either bound
    /// with this span still counts as inside, and every span contains
    /// itself. An empty `other` counts as inside whenever its single point
    /// lies within `[lower, upper]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let span = Span::new(1, 5).unwrap();
    /// assert!(span.contains_span(&Span::new(2, 4).unwrap()));
    /// assert!(span.contains_span(&Span::new(1, 5).unwrap()));
    /// assert!(!span.contains_span(&Span::new(0, 6).unwrap()));
    /// ```
    #[inline]
    pub fn contains_span(&self, other: &Self) -> bool {
        !self.order.less(&other.lower, &self.lower) && !self.order.less(&self.upper, &other.upper)
    }

    /// Returns `true` if this span overlaps with `other`.
    ///
    /// Adjacent spans share a boundary value but do not overlap; an empty
    /// span overlaps nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let a = Span::new(0, 10).unwrap();
    /// assert!(a.intersects(&Span::new(5, 15).unwrap()));
    /// assert!(!a.intersects(&Span::new(10, 20).unwrap()));
    /// assert!(!a.intersects(&Span::new(3, 3).unwrap()));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        // An empty span shares no values with anything, even when its point
        // lies strictly inside the other span.
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.order.less(&self.lower, &other.upper) && self.order.less(&other.lower, &self.upper)
    }

    /// Returns `true` if the spans share a boundary but do not overlap.
    ///
    /// An empty span sitting exactly on another span's bound counts as
    /// adjacent: its single point coincides with that bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let a = Span::new(0, 10).unwrap();
    /// assert!(a.adjacent(&Span::new(10, 20).unwrap()));
    /// assert!(!a.adjacent(&Span::new(9, 11).unwrap()));
    /// ```
    #[inline]
    pub fn adjacent(&self, other: &Self) -> bool {
        self.order.equal(&self.upper, &other.lower) || self.order.equal(&other.upper, &self.lower)
    }

    /// Returns `true` if the spans are disjoint, i.e. separated by a gap.
    ///
    /// This is the negation of [`Span::intersects_or_adjacent`]: an empty
    /// span whose point lies within the other span's closed bounds is not
    /// disjoint from it, since the two still merge into a single span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let a = Span::new(0, 10).unwrap();
    /// assert!(a.disjoint(&Span::new(15, 20).unwrap()));
    /// assert!(!a.disjoint(&Span::new(5, 15).unwrap()));
    /// assert!(!a.disjoint(&Span::new(10, 15).unwrap()));
    /// ```
    #[inline]
    pub fn disjoint(&self, other: &Self) -> bool {
        !self.intersects_or_adjacent(other)
    }

    /// Returns `true` if the spans either intersect or are adjacent.
    ///
    /// This is the condition under which two spans merge into a single
    /// contiguous span; see [`Span::union`].
    #[inline]
    pub fn intersects_or_adjacent(&self, other: &Self) -> bool {
        !self.order.less(&other.upper, &self.lower) && !self.order.less(&self.upper, &other.lower)
    }

    /// Returns the intersection of two spans.
    ///
    /// An empty receiver is returned as-is, as is an empty argument: an
    /// empty span intersected with anything stays empty. Otherwise the
    /// result covers `[max(lowers), min(uppers))`; when the operands do not
    /// overlap, the computed bounds cross and a zero-width span at the
    /// smaller upper bound is returned instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let a = Span::new(1, 5).unwrap();
    /// let b = Span::new(2, 6).unwrap();
    /// assert_eq!(a.intersection(&b), Span::new(2, 5).unwrap());
    ///
    /// assert!(a.intersection(&Span::new(2, 2).unwrap()).is_empty());
    /// assert!(a.intersection(&Span::new(7, 9).unwrap()).is_empty());
    /// ```
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
        O: Clone,
    {
        if self.is_empty() {
            return self.clone();
        }
        if other.is_empty() {
            return other.clone();
        }

        let lower = if self.order.less(&self.lower, &other.lower) {
            &other.lower
        } else {
            &self.lower
        };
        let upper = if self.order.less(&other.upper, &self.upper) {
            &other.upper
        } else {
            &self.upper
        };

        if self.order.less(upper, lower) {
            // Disjoint operands: collapse to a zero-width span rather than
            // letting the crossed bounds violate the invariant.
            return Self {
                lower: upper.clone(),
                upper: upper.clone(),
                order: self.order.clone(),
            };
        }
        Self {
            lower: lower.clone(),
            upper: upper.clone(),
            order: self.order.clone(),
        }
    }

    /// Returns the union of two spans, if it is a single contiguous span.
    ///
    /// Returns `Some` when the spans intersect or are adjacent, covering
    /// `[min(lowers), max(uppers))`. Returns `None` when a gap separates
    /// them. An empty operand whose point lies within the other span's
    /// closed bounds is absorbed without widening the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let a = Span::new(0, 10).unwrap();
    /// let b = Span::new(10, 20).unwrap();
    /// assert_eq!(a.union(&b), Some(Span::new(0, 20).unwrap()));
    ///
    /// assert_eq!(a.union(&Span::new(12, 20).unwrap()), None);
    /// ```
    pub fn union(&self, other: &Self) -> Option<Self>
    where
        T: Clone,
        O: Clone,
    {
        if !self.intersects_or_adjacent(other) {
            return None;
        }

        let lower = if self.order.less(&other.lower, &self.lower) {
            &other.lower
        } else {
            &self.lower
        };
        let upper = if self.order.less(&self.upper, &other.upper) {
            &other.upper
        } else {
            &self.upper
        };
        Some(Self {
            lower: lower.clone(),
            upper: upper.clone(),
            order: self.order.clone(),
        })
    }

    /// Returns the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// A vector containing:
    /// * 0 spans: if `other` fully covers `self`.
    /// * 1 span: if `other` clips one side of `self` or does not overlap.
    /// * 2 spans: if `other` splits `self` in two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let base = Span::new(0, 10).unwrap();
    /// let hole = Span::new(4, 6).unwrap();
    ///
    /// let diff = base.difference(&hole);
    /// assert_eq!(diff.len(), 2);
    /// assert_eq!(diff[0], Span::new(0, 4).unwrap());
    /// assert_eq!(diff[1], Span::new(6, 10).unwrap());
    /// ```
    pub fn difference(&self, other: &Self) -> SmallVec<[Self; 2]>
    where
        T: Clone,
        O: Clone,
    {
        if other.is_empty() || !self.intersects(other) {
            return smallvec::smallvec![self.clone()];
        }

        let mut result = SmallVec::new();
        if self.order.less(&self.lower, &other.lower) {
            result.push(Self {
                lower: self.lower.clone(),
                upper: other.lower.clone(),
                order: self.order.clone(),
            });
        }
        if self.order.less(&other.upper, &self.upper) {
            result.push(Self {
                lower: other.upper.clone(),
                upper: self.upper.clone(),
                order: self.order.clone(),
            });
        }
        result
    }

    /// Returns the span strictly between two disjoint spans.
    ///
    /// Returns `None` if the spans intersect or are adjacent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let a = Span::new(0, 5).unwrap();
    /// let b = Span::new(10, 15).unwrap();
    /// assert_eq!(a.gap(&b), Some(Span::new(5, 10).unwrap()));
    /// assert_eq!(b.gap(&a), Some(Span::new(5, 10).unwrap()));
    /// ```
    pub fn gap(&self, other: &Self) -> Option<Self>
    where
        T: Clone,
        O: Clone,
    {
        if self.order.less(&self.upper, &other.lower) {
            Some(Self {
                lower: self.upper.clone(),
                upper: other.lower.clone(),
                order: self.order.clone(),
            })
        } else if self.order.less(&other.upper, &self.lower) {
            Some(Self {
                lower: other.upper.clone(),
                upper: self.lower.clone(),
                order: self.order.clone(),
            })
        } else {
            None
        }
    }

    /// Splits the span into two at the given value.
    ///
    /// Returns `Some((left, right))` if `value` is strictly inside the span
    /// (`lower < value < upper`), `None` if it is outside or on a boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordspan::span::Span;
    ///
    /// let span = Span::new(0, 10).unwrap();
    /// let (left, right) = span.split_at(&5).unwrap();
    /// assert_eq!(left, Span::new(0, 5).unwrap());
    /// assert_eq!(right, Span::new(5, 10).unwrap());
    ///
    /// assert_eq!(span.split_at(&0), None);
    /// ```
    pub fn split_at(&self, value: &T) -> Option<(Self, Self)>
    where
        T: Clone,
        O: Clone,
    {
        if self.order.less(&self.lower, value) && self.order.less(value, &self.upper) {
            Some((
                Self {
                    lower: self.lower.clone(),
                    upper: value.clone(),
                    order: self.order.clone(),
                },
                Self {
                    lower: value.clone(),
                    upper: self.upper.clone(),
                    order: self.order.clone(),
                },
            ))
        } else {
            None
        }
    }
}

impl<T, O> BitAnd for Span<T, O>
where
    T: Clone,
    O: TotalOrder<T> + Clone,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl<T, O> BitOr for Span<T, O>
where
    T: Clone,
    O: TotalOrder<T> + Clone,
{
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl<T, O> Default for Span<T, O>
where
    T: Default,
    O: Default,
{
    #[inline]
    fn default() -> Self {
        Self {
            lower: T::default(),
            upper: T::default(),
            order: O::default(),
        }
    }
}

impl<T, O> fmt::Debug for Span<T, O>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<T, O> fmt::Display for Span<T, O>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

impl<T, O> std::ops::RangeBounds<T> for Span<T, O> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.lower)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Excluded(&self.upper)
    }
}

impl<T: Ord> TryFrom<Range<T>> for Span<T> {
    type Error = InvalidSpanError;

    #[inline]
    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Self::new(range.start, range.end)
    }
}

impl<T, O> From<Span<T, O>> for Range<T> {
    #[inline]
    fn from(span: Span<T, O>) -> Self {
        Range {
            start: span.lower,
            end: span.upper,
        }
    }
}

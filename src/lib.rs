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

//! # Ordspan
//!
//! A generic half-open span `[lower, upper)` over any totally ordered
//! element type, answering containment and intersection queries through
//! caller-injectable comparison predicates. A small, immutable value type
//! with no I/O, no shared state, and a single failure mode (constructing a
//! span whose bounds are out of order).
//!
//! ## Modules
//!
//! - `span`: The `Span<T, O>` value type with validated construction,
//!   emptiness, point containment (exclusive and inclusive), sub-span
//!   containment, and set operations (intersection/union/difference/gap/
//!   split) expressed purely through comparisons. Includes conversions
//!   to/from `std::ops::Range` and a `RangeBounds` impl.
//! - `order`: Ordering injection via the `TotalOrder<T>` trait, with the
//!   zero-sized `Natural` order for `T: Ord` (the default) and `FnOrder`
//!   for closure-supplied comparisons.
//! - `error`: The `InvalidSpanError` returned by the checked constructors.
//!
//! ## Purpose
//!
//! Half-open spans are robust against off-by-one errors: a value sitting on
//! the shared boundary of two adjacent spans belongs to exactly one of them.
//! Decoupling the ordering from the element type lets the same span logic
//! serve integers, text under custom collations, or any caller-defined
//! comparison, without arithmetic on the element type.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod order;
pub mod span;

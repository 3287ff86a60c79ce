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

//! # Errors
//!
//! The single error type of this crate. Span construction is the only
//! fallible operation; every query on an already-constructed span is
//! infallible.

use std::fmt;

/// The error returned when span construction receives out-of-order bounds.
///
/// A span's invariant is `lower <= upper` under the supplied ordering. The
/// checked constructors return this error instead of producing an instance
/// that violates it.
///
/// # Examples
///
/// ```rust
/// # use ordspan::error::InvalidSpanError;
/// # use ordspan::span::Span;
///
/// let err = Span::new(5, 2).unwrap_err();
/// assert_eq!(err, InvalidSpanError);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidSpanError;

impl fmt::Display for InvalidSpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lower limit must not exceed upper limit")
    }
}

impl std::error::Error for InvalidSpanError {}

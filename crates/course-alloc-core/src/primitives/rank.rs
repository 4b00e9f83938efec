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

use num_traits::{FromPrimitive, One};

/// A preference rank. Rank 1 is the most preferred; larger values are
/// worse. The wrapper exists so ranks cannot be confused with slot
/// counts or other plain integers flowing through the solver.
///
/// Ranks are required to be at least one; the ingestion layer enforces
/// this before a `Rank` is ever constructed.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank<T>(T);

impl<T> Rank<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Rank(value)
    }

    #[inline]
    pub const fn value(&self) -> T
    where
        T: Copy,
    {
        self.0
    }

    /// The best possible rank (first place).
    #[inline]
    pub fn first() -> Self
    where
        T: One,
    {
        Rank(T::one())
    }

    /// Builds a rank from a 1-based place number. Returns `None` when
    /// the place does not fit into `T`.
    #[inline]
    pub fn from_place(place: usize) -> Option<Self>
    where
        T: FromPrimitive,
    {
        T::from_usize(place).map(Rank)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Rank<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rank({})", self.0)
    }
}

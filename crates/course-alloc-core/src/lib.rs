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

//! # Course-Alloc Core
//!
//! Foundational primitives for the course-alloc ecosystem: the `Rank`
//! newtype, the rank `Distribution` multiset, and the leximin order on
//! distributions. Higher-level model and solver crates build on these
//! without re-deriving their invariants.
//!
//! ## Modules
//!
//! - `primitives`: The strongly typed `Rank<T>` wrapper (1 is the most
//!   preferred rank; ranks are never smaller than one).
//! - `distribution`: A finite multiset from key to strictly positive
//!   count, with the pointwise operations the solver needs (`add`,
//!   `increment`, `decrement`, `join`, `count`).
//! - `leximin`: The worst-to-best lexicographic comparison that defines
//!   solution quality for the whole workspace.

pub mod distribution;
pub mod leximin;
pub mod primitives;

pub mod prelude {
    pub use crate::distribution::Distribution;
    pub use crate::leximin::leximin_cmp;
    pub use crate::primitives::Rank;
}

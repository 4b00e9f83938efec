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

//! # Course-Alloc Model
//!
//! The domain model for the course allocation problem: people rank
//! courses, courses carry a fixed number of slots, and individual
//! cells may force (`fixed`) or forbid an assignment.
//!
//! The crate is the data interchange layer between problem ingestion
//! (the tabular loader plus validation) and the solving engine, which
//! consumes an immutable [`problem::Problem`] and produces a
//! [`solution::Solution`].
//!
//! - `common`: phantom-tagged identifiers for people and courses.
//! - `problem`: courses, preference table, the `Problem` aggregate,
//!   its builder, the tabular loader and the error types.
//! - `validation`: the non-fatal normalization pass that turns raw
//!   table cells into well-formed preferences, collecting warnings.
//! - `solution`: the solver's output format, including the tidied
//!   view of tied assignments.

pub mod common;
pub mod problem;
pub mod solution;
pub mod validation;

pub mod prelude {
    pub use crate::common::{CourseIdentifier, PersonIdentifier};
    pub use crate::problem::builder::ProblemBuilder;
    pub use crate::problem::course::Course;
    pub use crate::problem::loader::{LoadedProblem, ProblemLoader};
    pub use crate::problem::pref::Preference;
    pub use crate::problem::prob::Problem;
    pub use crate::solution::sol::{Assignment, Placement, Solution};
    pub use crate::validation::{ValidationReport, ValidationWarning};
}

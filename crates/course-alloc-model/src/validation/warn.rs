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

use crate::common::{CourseIdentifier, PersonIdentifier};

/// A non-fatal finding of the validation pass. Warnings never stop a
/// problem from being solved; they tell the user what the normalizer
/// changed or what looks suspicious.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning<T> {
    /// The number of people does not match the number of slots. Slack
    /// in either direction is tolerated; with fewer people than slots
    /// no complete assignment can exist.
    SlotMismatch { people: usize, slots: u64 },
    /// The person flagged more than one cell as fixed; only the first
    /// (in course-column order) keeps the flag.
    DuplicateFixed {
        person: PersonIdentifier,
        course: CourseIdentifier,
    },
    /// A rank outside `[1, course-count]` was mapped to last place.
    RankOutOfRange {
        person: PersonIdentifier,
        course: CourseIdentifier,
        rank: T,
    },
    /// The person's ranks violated the staircase property ("for each
    /// n ≥ 1, at least n listed ranks are ≤ n") and were renormalized
    /// to dense ascending places.
    Renormalized { person: PersonIdentifier },
    /// Every cell in the person's row is forbidden; they can never be
    /// assigned.
    Unassignable { person: PersonIdentifier },
    /// More fixed entries point at the course than it has slots; the
    /// solver will drop the surplus deterministically.
    FixedOverflow {
        course: CourseIdentifier,
        fixed: usize,
        slots: u32,
    },
}

impl<T: std::fmt::Display> std::fmt::Display for ValidationWarning<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ValidationWarning::*;
        match self {
            SlotMismatch { people, slots } => {
                write!(f, "{people} people ranked courses offering {slots} slots")
            }
            DuplicateFixed { person, course } => write!(
                f,
                "{person} has more than one fixed cell; the fixed flag on {course} is ignored"
            ),
            RankOutOfRange {
                person,
                course,
                rank,
            } => write!(
                f,
                "{person} ranked {course} at {rank}, outside the valid range; mapped to last place"
            ),
            Renormalized { person } => write!(
                f,
                "{person}'s ranks skip places; they were renormalized to dense ascending places"
            ),
            Unassignable { person } => {
                write!(f, "{person} forbids every course and can never be assigned")
            }
            FixedOverflow {
                course,
                fixed,
                slots,
            } => write!(
                f,
                "{course} has {fixed} fixed entries but only {slots} slots; surplus fixes are dropped"
            ),
        }
    }
}

/// Ordered collection of the warnings a validation pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport<T> {
    warnings: Vec<ValidationWarning<T>>,
}

impl<T> ValidationReport<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, warning: ValidationWarning<T>) {
        self.warnings.push(warning);
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ValidationWarning<T>> {
        self.warnings.iter()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for ValidationReport<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for w in &self.warnings {
            writeln!(f, "warning: {w}")?;
        }
        Ok(())
    }
}

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

use crate::model::index::{CourseIndex, PersonIndex};
use course_alloc_core::prelude::{Distribution, Rank, leximin_cmp};
use std::cmp::Ordering;

/// A complete assignment in index form, ascending by person index.
pub type IndexedAssignment<T> = Vec<(PersonIndex, CourseIndex, Rank<T>)>;

/// The best distribution discovered so far together with every
/// complete assignment achieving it. The assignment list is non-empty
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestResult<T: Copy + Ord> {
    distribution: Distribution<Rank<T>>,
    assignments: Vec<IndexedAssignment<T>>,
}

impl<T: Copy + Ord> BestResult<T> {
    #[inline]
    pub fn distribution(&self) -> &Distribution<Rank<T>> {
        &self.distribution
    }

    #[inline]
    pub fn assignments(&self) -> &[IndexedAssignment<T>] {
        &self.assignments
    }

    #[inline]
    pub fn num_ties(&self) -> usize {
        self.assignments.len()
    }
}

/// What [`ResultAggregator::merge`] did with a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeVerdict {
    /// No best existed yet; the candidate was installed.
    Installed,
    /// The candidate was strictly better and replaced the best.
    Replaced,
    /// The candidate tied the best; its assignment was appended.
    Appended,
    /// The candidate was worse and dropped.
    Discarded,
}

/// Accumulates complete assignments into the leximin-best result. The
/// stored distribution is monotone non-worsening over a run: a merge
/// either improves it, ties it, or changes nothing.
#[derive(Debug, Clone, Default)]
pub struct ResultAggregator<T: Copy + Ord> {
    best: Option<BestResult<T>>,
}

impl<T: Copy + Ord> ResultAggregator<T> {
    #[inline]
    pub fn new() -> Self {
        Self { best: None }
    }

    #[inline]
    pub fn best(&self) -> Option<&BestResult<T>> {
        self.best.as_ref()
    }

    pub fn merge(
        &mut self,
        distribution: Distribution<Rank<T>>,
        assignment: IndexedAssignment<T>,
    ) -> MergeVerdict {
        match &mut self.best {
            None => {
                self.best = Some(BestResult {
                    distribution,
                    assignments: vec![assignment],
                });
                MergeVerdict::Installed
            }
            Some(best) => match leximin_cmp(&distribution, &best.distribution) {
                Ordering::Less => {
                    *best = BestResult {
                        distribution,
                        assignments: vec![assignment],
                    };
                    MergeVerdict::Replaced
                }
                Ordering::Equal => {
                    best.assignments.push(assignment);
                    MergeVerdict::Appended
                }
                Ordering::Greater => MergeVerdict::Discarded,
            },
        }
    }
}

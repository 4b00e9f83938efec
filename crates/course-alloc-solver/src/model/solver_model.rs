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

use crate::model::{
    index::{CourseIndex, PersonIndex},
    index_manager::SolverIndexManager,
};
use course_alloc_core::prelude::Rank;
use course_alloc_model::prelude::Problem;

/// The problem compiled to dense, flat storage for the search: a
/// person-major rank matrix (`None` = forbidden cell), the slot vector,
/// and the fixed placements in ascending (person, course) index order.
///
/// The matrix layout keeps the inner loops of the selector cache
/// friendly and makes cloning a search node a handful of memcpys.
#[derive(Debug, Clone)]
pub struct SolverModel<T> {
    index: SolverIndexManager,
    prefs: Vec<Option<Rank<T>>>,
    slots: Vec<u32>,
    fixed: Vec<(PersonIndex, CourseIndex)>,
}

impl<T: Copy + Ord> SolverModel<T> {
    #[inline]
    pub fn index(&self) -> &SolverIndexManager {
        &self.index
    }

    #[inline]
    pub fn num_people(&self) -> usize {
        self.index.num_people()
    }

    #[inline]
    pub fn num_courses(&self) -> usize {
        self.index.num_courses()
    }

    /// The rank person `p` gave course `c`, `None` for a forbidden
    /// cell.
    #[inline]
    pub fn pref(&self, p: PersonIndex, c: CourseIndex) -> Option<Rank<T>> {
        self.prefs[self.cell(p, c)]
    }

    #[inline]
    pub fn slots(&self, c: CourseIndex) -> u32 {
        self.slots[c.0]
    }

    #[inline]
    pub fn total_slots(&self) -> u64 {
        self.slots.iter().map(|&s| u64::from(s)).sum()
    }

    /// Fixed placements, ascending by (person, course) index. The
    /// search applies these eagerly before branching starts.
    #[inline]
    pub fn iter_fixed(&self) -> impl Iterator<Item = (PersonIndex, CourseIndex)> + '_ {
        self.fixed.iter().copied()
    }

    #[inline]
    pub(crate) fn pref_matrix(&self) -> &[Option<Rank<T>>] {
        &self.prefs
    }

    #[inline]
    pub(crate) fn slot_vector(&self) -> &[u32] {
        &self.slots
    }

    #[inline]
    fn cell(&self, p: PersonIndex, c: CourseIndex) -> usize {
        debug_assert!(p.0 < self.num_people(), "person index out of bounds");
        debug_assert!(c.0 < self.num_courses(), "course index out of bounds");
        p.0 * self.num_courses() + c.0
    }
}

impl<T: Copy + Ord> From<&Problem<T>> for SolverModel<T> {
    fn from(problem: &Problem<T>) -> Self {
        let index = SolverIndexManager::from(problem);
        let num_people = index.num_people();
        let num_courses = index.num_courses();

        let mut prefs = vec![None; num_people * num_courses];
        let mut fixed = Vec::new();
        for (person, course, pref) in problem.preferences().iter() {
            // Both lookups must succeed: the manager was built from
            // this very problem.
            let (Some(p), Some(c)) = (index.person_index(person), index.course_index(course))
            else {
                debug_assert!(false, "preference references an unindexed identifier");
                continue;
            };
            prefs[p.0 * num_courses + c.0] = Some(pref.rank());
            if pref.is_fixed() {
                fixed.push((p, c));
            }
        }
        fixed.sort_unstable();

        let mut slots = vec![0u32; num_courses];
        for course in problem.courses().iter() {
            if let Some(c) = index.course_index(course.id()) {
                slots[c.0] = course.slots();
            }
        }

        Self {
            index,
            prefs,
            slots,
            fixed,
        }
    }
}

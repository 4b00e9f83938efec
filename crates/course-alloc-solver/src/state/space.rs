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
    solver_model::SolverModel,
};
use course_alloc_core::prelude::{Distribution, Rank};

/// One node of the search tree: the remaining preferences, the open
/// slots per course, and the partial assignment committed so far.
///
/// Invariants maintained by the two transforms:
/// - every remaining preference belongs to an unassigned person and a
///   course with open slots,
/// - open slots plus committed placements always add up to the initial
///   slot total,
/// - the partial assignment is injective on persons.
///
/// Branching keeps both children alive (take the placement / remove
/// exactly that preference), so a sibling is materialized by cloning.
/// All storage is flat vectors, which keeps that clone a few memcpys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpace<T: Copy + Ord> {
    prefs: Vec<Option<Rank<T>>>,
    open_slots: Vec<u32>,
    open_total: u64,
    assigned: Vec<Option<(CourseIndex, Rank<T>)>>,
    num_assigned: usize,
    committed: Distribution<Rank<T>>,
    num_courses: usize,
}

impl<T: Copy + Ord> SearchSpace<T> {
    /// The root node: all preferences remaining, all slots open,
    /// nothing assigned. Fixed placements are applied by the stepper,
    /// not here.
    pub fn root(model: &SolverModel<T>) -> Self {
        let mut space = Self {
            prefs: model.pref_matrix().to_vec(),
            open_slots: model.slot_vector().to_vec(),
            open_total: model.total_slots(),
            assigned: vec![None; model.num_people()],
            num_assigned: 0,
            committed: Distribution::new(),
            num_courses: model.num_courses(),
        };
        // A preference for a zero-slot course can never be taken;
        // normalize it away so the node invariant holds from the start.
        for c in 0..space.num_courses {
            if space.open_slots[c] == 0 {
                space.clear_course_column(CourseIndex(c));
            }
        }
        space
    }

    #[inline]
    pub fn num_people(&self) -> usize {
        self.assigned.len()
    }

    #[inline]
    pub fn num_courses(&self) -> usize {
        self.num_courses
    }

    #[inline]
    pub fn pref(&self, p: PersonIndex, c: CourseIndex) -> Option<Rank<T>> {
        self.prefs[self.cell(p, c)]
    }

    #[inline]
    pub fn open_slots(&self, c: CourseIndex) -> u32 {
        self.open_slots[c.0]
    }

    #[inline]
    pub fn open_total(&self) -> u64 {
        self.open_total
    }

    /// A node is complete when every slot of every course is taken.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.open_total == 0
    }

    #[inline]
    pub fn is_assigned(&self, p: PersonIndex) -> bool {
        self.assigned[p.0].is_some()
    }

    #[inline]
    pub fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    /// Ranks of the partial assignment, maintained incrementally.
    #[inline]
    pub fn committed(&self) -> &Distribution<Rank<T>> {
        &self.committed
    }

    /// The committed placements, ascending by person index.
    #[inline]
    pub fn iter_assigned(
        &self,
    ) -> impl Iterator<Item = (PersonIndex, CourseIndex, Rank<T>)> + '_ {
        self.assigned
            .iter()
            .enumerate()
            .filter_map(|(p, slot)| slot.map(|(c, r)| (PersonIndex(p), c, r)))
    }

    /// Remaining claimants of a course, ascending by person index.
    #[inline]
    pub fn remaining_claimants(
        &self,
        c: CourseIndex,
    ) -> impl Iterator<Item = (PersonIndex, Rank<T>)> + '_ {
        (0..self.num_people()).filter_map(move |p| {
            self.prefs[p * self.num_courses + c.0].map(|r| (PersonIndex(p), r))
        })
    }

    /// Remaining preferences of a person, ascending by course index.
    #[inline]
    pub fn remaining_prefs_of(
        &self,
        p: PersonIndex,
    ) -> impl Iterator<Item = (CourseIndex, Rank<T>)> + '_ {
        let row = p.0 * self.num_courses;
        (0..self.num_courses)
            .filter_map(move |c| self.prefs[row + c].map(|r| (CourseIndex(c), r)))
    }

    /// Commits the placement (p → c at rank r): one slot of `c` is
    /// consumed, `p`'s remaining row disappears, and when `c` runs out
    /// of slots its remaining column disappears with it.
    ///
    /// The caller must pass the rank still present in the remaining
    /// preferences; branching always does.
    pub fn assign(&mut self, p: PersonIndex, c: CourseIndex, r: Rank<T>)
    where
        T: std::fmt::Debug,
    {
        debug_assert!(
            self.open_slots[c.0] > 0,
            "called `SearchSpace::assign` on a course without open slots"
        );
        debug_assert!(
            self.assigned[p.0].is_none(),
            "called `SearchSpace::assign` on an already assigned person"
        );
        debug_assert_eq!(
            self.pref(p, c),
            Some(r),
            "called `SearchSpace::assign` with a rank that is not the remaining preference"
        );

        self.open_slots[c.0] -= 1;
        self.open_total -= 1;
        self.assigned[p.0] = Some((c, r));
        self.num_assigned += 1;
        self.committed.increment(r);

        self.clear_person_row(p);
        if self.open_slots[c.0] == 0 {
            self.clear_course_column(c);
        }
    }

    /// Removes the single remaining (p, c) preference: the "do not
    /// take this placement" sibling of a branch.
    #[inline]
    pub fn drop_pref(&mut self, p: PersonIndex, c: CourseIndex) {
        let cell = self.cell(p, c);
        debug_assert!(
            self.prefs[cell].is_some(),
            "called `SearchSpace::drop_pref` on an absent preference"
        );
        self.prefs[cell] = None;
    }

    #[inline]
    fn clear_person_row(&mut self, p: PersonIndex) {
        let row = p.0 * self.num_courses;
        self.prefs[row..row + self.num_courses].fill(None);
    }

    #[inline]
    fn clear_course_column(&mut self, c: CourseIndex) {
        for p in 0..self.num_people() {
            self.prefs[p * self.num_courses + c.0] = None;
        }
    }

    #[inline]
    fn cell(&self, p: PersonIndex, c: CourseIndex) -> usize {
        debug_assert!(p.0 < self.num_people(), "person index out of bounds");
        debug_assert!(c.0 < self.num_courses, "course index out of bounds");
        p.0 * self.num_courses + c.0
    }
}

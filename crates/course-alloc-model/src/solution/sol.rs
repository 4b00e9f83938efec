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
use course_alloc_core::prelude::{Distribution, Rank};
use std::collections::BTreeMap;

/// Where one person ended up: the course and the rank they gave it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement<T> {
    course: CourseIdentifier,
    rank: Rank<T>,
}

impl<T> Placement<T> {
    #[inline]
    pub fn new(course: CourseIdentifier, rank: Rank<T>) -> Self {
        Self { course, rank }
    }

    #[inline]
    pub fn course(&self) -> &CourseIdentifier {
        &self.course
    }

    #[inline]
    pub fn rank(&self) -> Rank<T>
    where
        T: Copy,
    {
        self.rank
    }
}

/// One complete assignment: person → placement. Injective on persons by
/// construction (each person is a map key).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment<T> {
    placements: BTreeMap<PersonIdentifier, Placement<T>>,
}

impl<T> Assignment<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            placements: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn insert(&mut self, person: PersonIdentifier, placement: Placement<T>) {
        self.placements.insert(person, placement);
    }

    #[inline]
    pub fn get(&self, person: &PersonIdentifier) -> Option<&Placement<T>> {
        self.placements.get(person)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&PersonIdentifier, &Placement<T>)> {
        self.placements.iter()
    }

    /// Entries of `self` whose course differs from `base`'s placement
    /// of the same person (or who are absent from `base`). Used to
    /// show how a tied assignment deviates from the first one.
    pub fn difference(&self, base: &Self) -> Self
    where
        T: Copy,
    {
        let mut out = Self::new();
        for (person, placement) in self.iter() {
            let same = base
                .get(person)
                .is_some_and(|b| b.course() == placement.course());
            if !same {
                out.insert(person.clone(), placement.clone());
            }
        }
        out
    }

    /// The rank multiset this assignment produces.
    pub fn distribution(&self) -> Distribution<Rank<T>>
    where
        T: Copy + Ord,
    {
        Distribution::count(self.placements.values().map(Placement::rank))
    }
}

impl<T> FromIterator<(PersonIdentifier, Placement<T>)> for Assignment<T> {
    fn from_iter<I: IntoIterator<Item = (PersonIdentifier, Placement<T>)>>(iter: I) -> Self {
        Self {
            placements: iter.into_iter().collect(),
        }
    }
}

/// The solver's final answer: the leximin-optimal rank distribution
/// and every complete assignment achieving it. The assignment list is
/// non-empty, and each member produces exactly `distribution`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<T: Copy + Ord> {
    distribution: Distribution<Rank<T>>,
    assignments: Vec<Assignment<T>>,
}

impl<T: Copy + Ord> Solution<T> {
    #[inline]
    pub fn new(distribution: Distribution<Rank<T>>, assignments: Vec<Assignment<T>>) -> Self {
        debug_assert!(
            !assignments.is_empty(),
            "a solution must hold at least one assignment"
        );
        Self {
            distribution,
            assignments,
        }
    }

    #[inline]
    pub fn distribution(&self) -> &Distribution<Rank<T>> {
        &self.distribution
    }

    #[inline]
    pub fn assignments(&self) -> &[Assignment<T>] {
        &self.assignments
    }

    #[inline]
    pub fn num_ties(&self) -> usize {
        self.assignments.len()
    }

    /// Display-oriented view of the tied assignments: the first one in
    /// full, every later one reduced to its difference against the
    /// first. The stored assignments are untouched.
    pub fn tidied(&self) -> Vec<Assignment<T>> {
        let Some(first) = self.assignments.first() else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(self.assignments.len());
        out.push(first.clone());
        for a in &self.assignments[1..] {
            out.push(a.difference(first));
        }
        out
    }
}

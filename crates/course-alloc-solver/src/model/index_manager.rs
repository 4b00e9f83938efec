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
use course_alloc_model::prelude::{CourseIdentifier, PersonIdentifier, Problem};
use std::collections::HashMap;

/// Maps between the model's opaque identifiers and the dense indices
/// the search operates on. Identifiers are numbered in sorted order,
/// which makes the numbering (and everything downstream of it)
/// deterministic.
#[derive(Debug, Clone)]
pub struct SolverIndexManager {
    person_to_index: HashMap<PersonIdentifier, PersonIndex>,
    course_to_index: HashMap<CourseIdentifier, CourseIndex>,
    index_to_person: Vec<PersonIdentifier>,
    index_to_course: Vec<CourseIdentifier>,
}

impl SolverIndexManager {
    #[inline]
    pub fn person_index(&self, id: &PersonIdentifier) -> Option<PersonIndex> {
        self.person_to_index.get(id).copied()
    }

    #[inline]
    pub fn course_index(&self, id: &CourseIdentifier) -> Option<CourseIndex> {
        self.course_to_index.get(id).copied()
    }

    #[inline]
    pub fn person_id(&self, i: PersonIndex) -> Option<&PersonIdentifier> {
        self.index_to_person.get(i.0)
    }

    #[inline]
    pub fn course_id(&self, i: CourseIndex) -> Option<&CourseIdentifier> {
        self.index_to_course.get(i.0)
    }

    #[inline]
    pub fn num_people(&self) -> usize {
        self.index_to_person.len()
    }

    #[inline]
    pub fn num_courses(&self) -> usize {
        self.index_to_course.len()
    }
}

impl<T> From<&Problem<T>> for SolverIndexManager {
    fn from(problem: &Problem<T>) -> Self {
        // Problem iteration is already identifier ordered on both axes.
        let index_to_person: Vec<PersonIdentifier> = problem.people();
        let index_to_course: Vec<CourseIdentifier> =
            problem.courses().iter().map(|c| c.id().clone()).collect();

        let person_to_index: HashMap<_, _> = index_to_person
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, id)| (id, PersonIndex(i)))
            .collect();
        let course_to_index: HashMap<_, _> = index_to_course
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, id)| (id, CourseIndex(i)))
            .collect();

        Self {
            person_to_index,
            course_to_index,
            index_to_person,
            index_to_course,
        }
    }
}

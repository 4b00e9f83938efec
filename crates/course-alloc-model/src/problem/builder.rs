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
use crate::problem::{
    course::{Course, CourseContainer},
    err::ProblemError,
    pref::{Preference, PreferenceTable},
    prob::Problem,
};

/// Mutable accumulation side of [`Problem`]. Collect courses and
/// preferences in any order, then `build()`.
#[derive(Debug, Clone, Default)]
pub struct ProblemBuilder<T> {
    courses: CourseContainer,
    preferences: PreferenceTable<T>,
}

impl<T> ProblemBuilder<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            courses: CourseContainer::new(),
            preferences: PreferenceTable::new(),
        }
    }

    #[inline]
    pub fn add_course(&mut self, course: Course) -> &mut Self {
        self.courses.insert(course);
        self
    }

    #[inline]
    pub fn add_preference(
        &mut self,
        person: PersonIdentifier,
        course: CourseIdentifier,
        pref: Preference<T>,
    ) -> &mut Self {
        self.preferences.insert(person, course, pref);
        self
    }

    #[inline]
    pub fn build(self) -> Result<Problem<T>, ProblemError> {
        Problem::new(self.courses, self.preferences)
    }
}

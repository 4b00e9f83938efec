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
    course::CourseContainer,
    err::{CourseNotFoundError, ProblemError},
    pref::{Preference, PreferenceTable},
};

/// An immutable problem instance: courses with slot counts plus the
/// sparse preference table. Once constructed the instance is never
/// modified; the solver works on its own compiled copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem<T> {
    courses: CourseContainer,
    preferences: PreferenceTable<T>,
}

impl<T> Problem<T> {
    /// Builds a problem, rejecting preferences that reference a course
    /// missing from the course set.
    pub fn new(
        courses: CourseContainer,
        preferences: PreferenceTable<T>,
    ) -> Result<Self, ProblemError> {
        for (person, course, _) in preferences.iter() {
            if !courses.contains_id(course) {
                return Err(ProblemError::from(CourseNotFoundError::new(
                    person.clone(),
                    course.clone(),
                )));
            }
        }

        Ok(Self {
            courses,
            preferences,
        })
    }

    #[inline]
    pub fn courses(&self) -> &CourseContainer {
        &self.courses
    }

    #[inline]
    pub fn preferences(&self) -> &PreferenceTable<T> {
        &self.preferences
    }

    /// Distinct persons with at least one preference entry, ordered.
    #[inline]
    pub fn people(&self) -> Vec<PersonIdentifier> {
        self.preferences.people()
    }

    #[inline]
    pub fn num_people(&self) -> usize {
        self.preferences.people().len()
    }

    #[inline]
    pub fn num_courses(&self) -> usize {
        self.courses.len()
    }

    #[inline]
    pub fn total_slots(&self) -> u64 {
        self.courses.total_slots()
    }

    /// Fixed preference entries in (person, course) identifier order.
    #[inline]
    pub fn iter_fixed(
        &self,
    ) -> impl Iterator<Item = (&PersonIdentifier, &CourseIdentifier, &Preference<T>)> {
        self.preferences.iter().filter(|(_, _, p)| p.is_fixed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::course::Course;
    use course_alloc_core::prelude::Rank;

    #[inline]
    fn pid(name: &str) -> PersonIdentifier {
        PersonIdentifier::named(name)
    }

    #[inline]
    fn cid(name: &str) -> CourseIdentifier {
        CourseIdentifier::named(name)
    }

    fn courses(specs: &[(&str, u32)]) -> CourseContainer {
        let mut cs = CourseContainer::new();
        for (name, slots) in specs {
            cs.insert(Course::new(cid(name), *slots));
        }
        cs
    }

    #[test]
    fn test_empty_problem_is_ok() {
        let p = Problem::<i64>::new(CourseContainer::new(), PreferenceTable::new()).unwrap();
        assert_eq!(p.num_people(), 0);
        assert_eq!(p.num_courses(), 0);
        assert_eq!(p.total_slots(), 0);
    }

    #[test]
    fn test_preference_for_unknown_course_is_rejected() {
        let mut prefs = PreferenceTable::new();
        prefs.insert(pid("P1"), cid("Ghost"), Preference::new(Rank::new(1i64), false));

        let err = Problem::new(courses(&[("A", 1)]), prefs).unwrap_err();
        match err {
            ProblemError::CourseNotFound(e) => {
                assert_eq!(e.person(), &pid("P1"));
                assert_eq!(e.course(), &cid("Ghost"));
            }
        }
    }

    #[test]
    fn test_people_and_slots_accessors() {
        let mut prefs = PreferenceTable::new();
        prefs.insert(pid("P2"), cid("A"), Preference::new(Rank::new(1i64), false));
        prefs.insert(pid("P1"), cid("B"), Preference::new(Rank::new(2i64), false));

        let p = Problem::new(courses(&[("A", 1), ("B", 2)]), prefs).unwrap();
        assert_eq!(p.num_people(), 2);
        assert_eq!(p.num_courses(), 2);
        assert_eq!(p.total_slots(), 3);
    }

    #[test]
    fn test_iter_fixed_filters_fixed_entries() {
        let mut prefs = PreferenceTable::new();
        prefs.insert(pid("P1"), cid("A"), Preference::new(Rank::new(1i64), true));
        prefs.insert(pid("P1"), cid("B"), Preference::new(Rank::new(2i64), false));
        prefs.insert(pid("P2"), cid("B"), Preference::new(Rank::new(1i64), true));

        let p = Problem::new(courses(&[("A", 1), ("B", 1)]), prefs).unwrap();
        let fixed: Vec<_> = p
            .iter_fixed()
            .map(|(person, course, _)| (person.as_str().to_string(), course.as_str().to_string()))
            .collect();
        assert_eq!(
            fixed,
            vec![
                ("P1".to_string(), "A".to_string()),
                ("P2".to_string(), "B".to_string())
            ]
        );
    }
}

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
use course_alloc_core::prelude::Rank;
use std::collections::BTreeMap;

/// One person's rating of one course. `fixed` marks a hard constraint:
/// the person must be placed on this course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preference<T> {
    rank: Rank<T>,
    fixed: bool,
}

impl<T> Preference<T> {
    #[inline]
    pub fn new(rank: Rank<T>, fixed: bool) -> Self {
        Self { rank, fixed }
    }

    #[inline]
    pub fn rank(&self) -> Rank<T>
    where
        T: Copy,
    {
        self.rank
    }

    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }
}

/// The sparse preference matrix: (person, course) → preference.
///
/// Absence of an entry encodes a forbidden cell — the person either
/// struck the course out or never ranked it. Forbidden cells therefore
/// never reach the solver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceTable<T> {
    entries: BTreeMap<(PersonIdentifier, CourseIdentifier), Preference<T>>,
}

impl<T> PreferenceTable<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts an entry, replacing any previous preference of the same
    /// person for the same course.
    #[inline]
    pub fn insert(
        &mut self,
        person: PersonIdentifier,
        course: CourseIdentifier,
        pref: Preference<T>,
    ) -> Option<Preference<T>> {
        self.entries.insert((person, course), pref)
    }

    #[inline]
    pub fn get(&self, person: &PersonIdentifier, course: &CourseIdentifier) -> Option<&Preference<T>> {
        self.entries.get(&(person.clone(), course.clone()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in (person, course) identifier order.
    #[inline]
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&PersonIdentifier, &CourseIdentifier, &Preference<T>)> {
        self.entries.iter().map(|((p, c), pref)| (p, c, pref))
    }

    /// Distinct persons appearing in the table, in identifier order.
    pub fn people(&self) -> Vec<PersonIdentifier> {
        let mut out: Vec<PersonIdentifier> = Vec::new();
        for (p, _) in self.entries.keys() {
            if out.last() != Some(p) {
                out.push(p.clone());
            }
        }
        out
    }

    /// All entries of one person, in course order.
    #[inline]
    pub fn for_person<'a>(
        &'a self,
        person: &'a PersonIdentifier,
    ) -> impl Iterator<Item = (&'a CourseIdentifier, &'a Preference<T>)> + 'a {
        self.entries
            .range((person.clone(), CourseIdentifier::named(""))..)
            .take_while(move |((p, _), _)| p == person)
            .map(|((_, c), pref)| (c, pref))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn pid(name: &str) -> PersonIdentifier {
        PersonIdentifier::named(name)
    }

    #[inline]
    fn cid(name: &str) -> CourseIdentifier {
        CourseIdentifier::named(name)
    }

    #[inline]
    fn pref(rank: i64) -> Preference<i64> {
        Preference::new(Rank::new(rank), false)
    }

    #[test]
    fn test_insert_and_get() {
        let mut t = PreferenceTable::new();
        t.insert(pid("P1"), cid("A"), pref(1));
        assert_eq!(t.get(&pid("P1"), &cid("A")), Some(&pref(1)));
        assert_eq!(t.get(&pid("P1"), &cid("B")), None);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_insert_replaces_existing_cell() {
        let mut t = PreferenceTable::new();
        t.insert(pid("P1"), cid("A"), pref(1));
        let old = t.insert(pid("P1"), cid("A"), pref(2));
        assert_eq!(old, Some(pref(1)));
        assert_eq!(t.get(&pid("P1"), &cid("A")), Some(&pref(2)));
    }

    #[test]
    fn test_people_is_deduplicated_and_ordered() {
        let mut t = PreferenceTable::new();
        t.insert(pid("P2"), cid("A"), pref(1));
        t.insert(pid("P1"), cid("A"), pref(1));
        t.insert(pid("P1"), cid("B"), pref(2));
        let people: Vec<_> = t.people().iter().map(|p| p.as_str().to_string()).collect();
        assert_eq!(people, vec!["P1", "P2"]);
    }

    #[test]
    fn test_for_person_yields_only_that_person() {
        let mut t = PreferenceTable::new();
        t.insert(pid("P1"), cid("A"), pref(1));
        t.insert(pid("P1"), cid("B"), pref(2));
        t.insert(pid("P2"), cid("A"), pref(3));
        let p1 = pid("P1");
        let entries: Vec<_> = t
            .for_person(&p1)
            .map(|(c, p)| (c.as_str().to_string(), p.rank().value()))
            .collect();
        assert_eq!(entries, vec![("A".to_string(), 1), ("B".to_string(), 2)]);
    }

    #[test]
    fn test_fixed_flag_survives() {
        let mut t = PreferenceTable::new();
        t.insert(pid("P1"), cid("A"), Preference::new(Rank::new(1i64), true));
        assert!(t.get(&pid("P1"), &cid("A")).is_some_and(Preference::is_fixed));
    }
}

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
use crate::state::space::SearchSpace;
use course_alloc_core::prelude::Rank;

/// The next placement to branch on: take it, or drop exactly this
/// preference and try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch<T> {
    pub person: PersonIndex,
    pub course: CourseIndex,
    pub rank: Rank<T>,
}

impl<T: std::fmt::Display + Copy> std::fmt::Display for Branch<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Branch({} -> {} at {})",
            self.person, self.course, self.rank
        )
    }
}

/// Picks the branch for a node, or `None` when no open course has a
/// remaining claimant (the node is then either complete or a dead
/// end).
///
/// Every open course's *head* is its best remaining claimant: lowest
/// rank, ties broken by person index. Among the heads, the one with
/// the **worst** rank wins — progress is forced on the course even its
/// keenest remaining claimant likes least, which drives bad ranks into
/// the partial assignment early and lets the bound cut whole subtrees
/// soon after. Ties between courses fall to the lower course index, so
/// the traversal is fully deterministic.
pub fn select<T: Copy + Ord>(space: &SearchSpace<T>) -> Option<Branch<T>> {
    let mut chosen: Option<Branch<T>> = None;

    for c in 0..space.num_courses() {
        let course = CourseIndex(c);
        if space.open_slots(course) == 0 {
            continue;
        }
        let head = space
            .remaining_claimants(course)
            .min_by_key(|&(p, r)| (r, p));
        let Some((person, rank)) = head else {
            continue;
        };
        let take = match &chosen {
            None => true,
            Some(best) => rank > best.rank,
        };
        if take {
            chosen = Some(Branch {
                person,
                course,
                rank,
            });
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::solver_model::SolverModel;
    use course_alloc_model::prelude::{
        Course, CourseIdentifier, PersonIdentifier, Preference, ProblemBuilder,
    };

    fn space(
        courses: &[(&str, u32)],
        prefs: &[(&str, &str, i64)],
    ) -> SearchSpace<i64> {
        let mut b = ProblemBuilder::new();
        for (name, slots) in courses {
            b.add_course(Course::new(CourseIdentifier::named(name), *slots));
        }
        for (person, course, rank) in prefs {
            b.add_preference(
                PersonIdentifier::named(person),
                CourseIdentifier::named(course),
                Preference::new(Rank::new(*rank), false),
            );
        }
        SearchSpace::root(&SolverModel::from(&b.build().unwrap()))
    }

    #[test]
    fn test_no_claimants_yields_none() {
        let s = space(&[("A", 1)], &[]);
        assert_eq!(select(&s), None);
    }

    #[test]
    fn test_single_claimant_is_selected() {
        let s = space(&[("A", 1)], &[("P1", "A", 3)]);
        assert_eq!(
            select(&s),
            Some(Branch {
                person: PersonIndex(0),
                course: CourseIndex(0),
                rank: Rank::new(3)
            })
        );
    }

    #[test]
    fn test_worst_head_course_wins() {
        // Course A's head is rank 1 (P1), course B's head is rank 2
        // (P1). B's keenest claimant is less keen, so B is branched.
        let s = space(
            &[("A", 1), ("B", 1)],
            &[("P1", "A", 1), ("P1", "B", 2), ("P2", "B", 3)],
        );
        assert_eq!(
            select(&s),
            Some(Branch {
                person: PersonIndex(0),
                course: CourseIndex(1),
                rank: Rank::new(2)
            })
        );
    }

    #[test]
    fn test_head_is_best_claimant_of_its_course() {
        // P2 ranks A better than P1 does, so P2 is A's head.
        let s = space(&[("A", 1)], &[("P1", "A", 3), ("P2", "A", 2)]);
        assert_eq!(
            select(&s),
            Some(Branch {
                person: PersonIndex(1),
                course: CourseIndex(0),
                rank: Rank::new(2)
            })
        );
    }

    #[test]
    fn test_rank_tie_in_course_breaks_by_person_index() {
        let s = space(&[("A", 1)], &[("P1", "A", 1), ("P2", "A", 1)]);
        assert_eq!(select(&s).map(|b| b.person), Some(PersonIndex(0)));
    }

    #[test]
    fn test_course_tie_breaks_by_course_index() {
        // Both heads have rank 1; the lower course index wins.
        let s = space(
            &[("A", 1), ("B", 1)],
            &[("P1", "A", 1), ("P2", "B", 1)],
        );
        assert_eq!(select(&s).map(|b| b.course), Some(CourseIndex(0)));
    }

    #[test]
    fn test_courses_without_claimants_are_skipped() {
        // A is open but nobody wants it; B still gets branched.
        let s = space(&[("A", 1), ("B", 1)], &[("P1", "B", 2)]);
        assert_eq!(select(&s).map(|b| b.course), Some(CourseIndex(1)));
    }
}

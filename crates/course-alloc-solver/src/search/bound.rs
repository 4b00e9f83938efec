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
use course_alloc_core::prelude::{Distribution, Rank, leximin_cmp};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Optimistic rank distribution for everything reachable below a node,
/// or `None` when some open course no longer has enough claimants to
/// fill its slots (no completion exists; an absent bound always
/// prunes).
///
/// Two admissible candidates are computed and the leximin-better one
/// is kept:
///
/// - *position-wise*: for every open course its shortlist — the k best
///   remaining claimants for its k slots — contributes those k ranks.
///   Any real completion fills the course with ranks at least as bad,
///   entry for entry.
/// - *person-wise*: every person with a remaining preference
///   contributes their best remaining rank.
///
/// The winner is joined with the ranks already committed at the node,
/// so the result is comparable against complete solutions.
pub fn subtree_bound<T: Copy + Ord>(space: &SearchSpace<T>) -> Option<Distribution<Rank<T>>> {
    let mut position_wise = Distribution::new();

    for c in 0..space.num_courses() {
        let course = CourseIndex(c);
        let k = space.open_slots(course) as usize;
        if k == 0 {
            continue;
        }

        // k lowest (rank, person) claimants, kept sorted.
        let mut shortlist: SmallVec<[(Rank<T>, PersonIndex); 8]> = SmallVec::new();
        for (person, rank) in space.remaining_claimants(course) {
            let key = (rank, person);
            if shortlist.len() == k {
                match shortlist.last() {
                    Some(&worst) if key >= worst => continue,
                    _ => {}
                }
            }
            let at = shortlist.partition_point(|&e| e < key);
            shortlist.insert(at, key);
            shortlist.truncate(k);
        }

        if shortlist.len() < k {
            return None;
        }
        for &(rank, _) in shortlist.iter() {
            position_wise.increment(rank);
        }
    }

    let mut person_wise = Distribution::new();
    for p in 0..space.num_people() {
        let best = space
            .remaining_prefs_of(PersonIndex(p))
            .map(|(_, rank)| rank)
            .min();
        if let Some(rank) = best {
            person_wise.increment(rank);
        }
    }

    let better = if leximin_cmp(&position_wise, &person_wise) == Ordering::Greater {
        person_wise
    } else {
        position_wise
    };
    Some(better.joined(space.committed()))
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

    fn dist(xs: &[i64]) -> Distribution<Rank<i64>> {
        Distribution::count(xs.iter().map(|&r| Rank::new(r)))
    }

    #[test]
    fn test_absent_when_course_lacks_claimants() {
        // B has one slot and no claimant left.
        let s = space(&[("A", 1), ("B", 1)], &[("P1", "A", 1)]);
        assert_eq!(subtree_bound(&s), None);
    }

    #[test]
    fn test_absent_when_claimants_fewer_than_slots() {
        let s = space(&[("A", 2)], &[("P1", "A", 1)]);
        assert_eq!(subtree_bound(&s), None);
    }

    #[test]
    fn test_position_wise_takes_k_best_per_course() {
        // A has 1 slot with claimants at ranks 1 and 2; only the 1
        // counts. Both bounds agree here.
        let s = space(&[("A", 1)], &[("P1", "A", 1), ("P2", "A", 2)]);
        assert_eq!(subtree_bound(&s), Some(dist(&[1])));
    }

    #[test]
    fn test_both_candidates_agree_on_tight_instance() {
        let s = space(
            &[("A", 2), ("B", 1)],
            &[
                ("P1", "A", 1),
                ("P2", "A", 2),
                ("P3", "A", 3),
                ("P3", "B", 1),
            ],
        );
        // Position-wise: A {1, 2}, B needs P3's 1 → {1, 1, 2}.
        // Person-wise: P1 1, P2 2, P3 1 → {1, 1, 2}. Equal here.
        assert_eq!(subtree_bound(&s), Some(dist(&[1, 1, 2])));
    }

    #[test]
    fn test_person_wise_wins_when_shortlists_double_count() {
        // P1 is the sole claimant of both single-slot courses: the
        // position-wise candidate counts them twice ({3: 2}), the
        // person-wise candidate once ({3: 1}), which is leximin
        // better.
        let s = space(&[("A", 1), ("B", 1)], &[("P1", "A", 3), ("P1", "B", 3)]);
        assert_eq!(subtree_bound(&s), Some(dist(&[3])));
    }

    #[test]
    fn test_bound_includes_committed_ranks() {
        let mut s = space(
            &[("A", 1), ("B", 1)],
            &[("P1", "A", 3), ("P2", "B", 1)],
        );
        s.assign(PersonIndex(0), CourseIndex(0), Rank::new(3));
        assert_eq!(subtree_bound(&s), Some(dist(&[1, 3])));
    }

    #[test]
    fn test_person_surplus_counts_every_remaining_person() {
        // Two people, one slot: the person-wise side counts both
        // minima, the position-wise side only the slot's best claimant.
        // Position-wise {1} is leximin-better than {1, 1} and wins.
        let s = space(&[("A", 1)], &[("P1", "A", 1), ("P2", "A", 1)]);
        assert_eq!(subtree_bound(&s), Some(dist(&[1])));
    }

    #[test]
    fn test_complete_space_has_empty_bound_plus_committed() {
        let mut s = space(&[("A", 1)], &[("P1", "A", 2)]);
        s.assign(PersonIndex(0), CourseIndex(0), Rank::new(2));
        // No open courses: both candidate distributions are empty, the
        // bound is exactly the committed multiset.
        assert_eq!(subtree_bound(&s), Some(dist(&[2])));
    }
}

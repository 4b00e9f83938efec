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

pub mod warn;

pub use warn::{ValidationReport, ValidationWarning};

use crate::common::{CourseIdentifier, PersonIdentifier};
use crate::problem::pref::Preference;
use course_alloc_core::prelude::Rank;
use num_traits::{Bounded, FromPrimitive};

/// One parsed cell of a person's row, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawCell<T> {
    /// A plain rank.
    Rank(T),
    /// A `*`-prefixed rank: the assignment is a hard constraint.
    Fixed(T),
    /// A `-`-prefixed or empty cell: no preference entry is produced.
    Forbidden,
}

impl<T> RawCell<T> {
    #[inline]
    fn rank(&self) -> Option<T>
    where
        T: Copy,
    {
        match self {
            RawCell::Rank(r) | RawCell::Fixed(r) => Some(*r),
            RawCell::Forbidden => None,
        }
    }

    #[inline]
    fn is_fixed(&self) -> bool {
        matches!(self, RawCell::Fixed(_))
    }
}

/// One person's parsed row: a cell per course, in course-column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow<T> {
    pub person: PersonIdentifier,
    pub cells: Vec<RawCell<T>>,
}

/// The parsed tabular input, prior to validation: the course columns
/// with their slot counts, and one row per person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable<T> {
    pub courses: Vec<(CourseIdentifier, u32)>,
    pub rows: Vec<RawRow<T>>,
}

/// The result of normalizing a [`RawTable`]: well-formed preference
/// entries plus the warnings describing every adjustment made.
#[derive(Debug, Clone)]
pub struct NormalizedTable<T> {
    pub entries: Vec<(PersonIdentifier, CourseIdentifier, Preference<T>)>,
    pub report: ValidationReport<T>,
}

/// The validation pass. All adjustments are non-fatal: whatever the
/// input looks like, the output is a legal search problem.
#[derive(Debug, Clone, Copy)]
pub struct Validator;

impl Validator {
    /// Normalizes a raw table into preference entries, applying the
    /// ingestion contract:
    ///
    /// 1. rows violating the staircase property are renormalized to
    ///    dense places ("(number of strictly smaller ranks) + 1"),
    ///    working on the raw ranks so the relative order of ranks that
    ///    overshoot the course count survives,
    /// 2. ranks still outside `[1, course-count]` afterwards are
    ///    clamped to last place,
    /// 3. only the first fixed flag per person survives,
    /// 4. all-forbidden rows, people/slot mismatches and oversubscribed
    ///    fixed courses (counted after the demotion in 3) are reported.
    pub fn normalize<T>(table: &RawTable<T>) -> NormalizedTable<T>
    where
        T: Copy + Ord + FromPrimitive + Bounded,
    {
        let mut report = ValidationReport::new();
        let mut entries = Vec::new();

        let course_count = table.courses.len();
        let last_place: Rank<T> =
            Rank::from_place(course_count.max(1)).unwrap_or(Rank::new(T::max_value()));
        let first_place: Rank<T> = Rank::from_place(1).unwrap_or(Rank::new(T::max_value()));
        let mut fixed_per_course = vec![0usize; course_count];

        for row in &table.rows {
            let mut cells = row.cells.clone();

            // Staircase property on the raw ranks: sorted ascending,
            // the i-th listed rank (1-based) must not exceed i. A rank
            // above the course count always violates it, so dense
            // renormalization is what pulls such ranks back into range.
            let mut listed: Vec<T> = cells.iter().filter_map(RawCell::rank).collect();
            listed.sort_unstable();
            let violated = listed.iter().enumerate().any(|(i, &r)| {
                Rank::from_place(i + 1).is_some_and(|place: Rank<T>| Rank::new(r) > place)
            });
            if violated {
                report.push(ValidationWarning::Renormalized {
                    person: row.person.clone(),
                });
                for cell in cells.iter_mut() {
                    let Some(raw) = cell.rank() else { continue };
                    let smaller = listed.partition_point(|&r| r < raw);
                    let dense = Rank::from_place(smaller + 1)
                        .unwrap_or(Rank::new(T::max_value()))
                        .value();
                    *cell = match *cell {
                        RawCell::Fixed(_) => RawCell::Fixed(dense),
                        _ => RawCell::Rank(dense),
                    };
                }
            }

            // Clamp whatever is still out of range to last place.
            // Renormalized places are dense, so after a renormalization
            // only ranks below one can remain here.
            for (col, cell) in cells.iter_mut().enumerate() {
                let Some(raw) = cell.rank() else { continue };
                let rank = Rank::new(raw);
                if rank < first_place || rank > last_place {
                    report.push(ValidationWarning::RankOutOfRange {
                        person: row.person.clone(),
                        course: table.courses[col].0.clone(),
                        rank: raw,
                    });
                    *cell = match *cell {
                        RawCell::Fixed(_) => RawCell::Fixed(last_place.value()),
                        _ => RawCell::Rank(last_place.value()),
                    };
                }
            }

            // First fixed flag wins; later ones are demoted.
            let mut seen_fixed = false;
            for (col, cell) in cells.iter_mut().enumerate() {
                if cell.is_fixed() {
                    if seen_fixed {
                        report.push(ValidationWarning::DuplicateFixed {
                            person: row.person.clone(),
                            course: table.courses[col].0.clone(),
                        });
                        if let RawCell::Fixed(r) = *cell {
                            *cell = RawCell::Rank(r);
                        }
                    }
                    seen_fixed = true;
                }
            }

            if cells.iter().all(|c| matches!(c, RawCell::Forbidden)) {
                report.push(ValidationWarning::Unassignable {
                    person: row.person.clone(),
                });
            }

            for (col, cell) in cells.iter().enumerate() {
                let (rank, fixed) = match *cell {
                    RawCell::Rank(r) => (r, false),
                    RawCell::Fixed(r) => (r, true),
                    RawCell::Forbidden => continue,
                };
                if fixed {
                    fixed_per_course[col] += 1;
                }
                entries.push((
                    row.person.clone(),
                    table.courses[col].0.clone(),
                    Preference::new(Rank::new(rank), fixed),
                ));
            }
        }

        // Oversubscribed fixed courses. The tally comes from the
        // demoted cells, so a duplicate fixed flag that lost the
        // first-wins rule above does not count against the course.
        for (col, (course, slots)) in table.courses.iter().enumerate() {
            let fixed = fixed_per_course[col];
            if fixed > *slots as usize {
                report.push(ValidationWarning::FixedOverflow {
                    course: course.clone(),
                    fixed,
                    slots: *slots,
                });
            }
        }

        let people = table.rows.len();
        let slots: u64 = table.courses.iter().map(|(_, s)| u64::from(*s)).sum();
        if people as u64 != slots {
            report.push(ValidationWarning::SlotMismatch { people, slots });
        }

        NormalizedTable { entries, report }
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

    fn table(courses: &[(&str, u32)], rows: &[(&str, &[RawCell<i64>])]) -> RawTable<i64> {
        RawTable {
            courses: courses.iter().map(|(n, s)| (cid(n), *s)).collect(),
            rows: rows
                .iter()
                .map(|(n, cells)| RawRow {
                    person: pid(n),
                    cells: cells.to_vec(),
                })
                .collect(),
        }
    }

    fn entry_ranks(normalized: &NormalizedTable<i64>, person: &str) -> Vec<(String, i64)> {
        normalized
            .entries
            .iter()
            .filter(|(p, _, _)| p == &pid(person))
            .map(|(_, c, pref)| (c.as_str().to_string(), pref.rank().value()))
            .collect()
    }

    #[test]
    fn test_well_formed_table_is_clean() {
        let t = table(
            &[("A", 1), ("B", 1)],
            &[
                ("P1", &[RawCell::Rank(1), RawCell::Rank(2)]),
                ("P2", &[RawCell::Rank(2), RawCell::Rank(1)]),
            ],
        );
        let n = Validator::normalize(&t);
        assert!(n.report.is_clean(), "unexpected warnings: {}", n.report);
        assert_eq!(n.entries.len(), 4);
    }

    #[test]
    fn test_over_range_rank_is_renormalized_into_range() {
        // 99 violates the staircase property, so renormalization (not
        // clamping) pulls it back into range.
        let t = table(
            &[("A", 1), ("B", 1)],
            &[("P1", &[RawCell::Rank(1), RawCell::Rank(99)])],
        );
        let n = Validator::normalize(&t);
        assert_eq!(entry_ranks(&n, "P1"), vec![("A".into(), 1), ("B".into(), 2)]);
        assert!(n
            .report
            .iter()
            .any(|w| matches!(w, ValidationWarning::Renormalized { .. })));
        assert!(!n
            .report
            .iter()
            .any(|w| matches!(w, ValidationWarning::RankOutOfRange { .. })));
    }

    #[test]
    fn test_distinct_over_range_ranks_keep_their_order() {
        // Renormalization works on the raw ranks, so A (5) stays ahead
        // of B (6) instead of both collapsing onto last place first.
        let t = table(
            &[("A", 1), ("B", 1), ("C", 1), ("D", 1)],
            &[(
                "P1",
                &[
                    RawCell::Rank(5),
                    RawCell::Rank(6),
                    RawCell::Rank(1),
                    RawCell::Rank(2),
                ],
            )],
        );
        let n = Validator::normalize(&t);
        assert_eq!(
            entry_ranks(&n, "P1"),
            vec![
                ("A".into(), 3),
                ("B".into(), 4),
                ("C".into(), 1),
                ("D".into(), 2)
            ]
        );
        assert!(n
            .report
            .iter()
            .any(|w| matches!(w, ValidationWarning::Renormalized { .. })));
    }

    #[test]
    fn test_zero_rank_is_out_of_range() {
        let t = table(&[("A", 1)], &[("P1", &[RawCell::Rank(0)])]);
        let n = Validator::normalize(&t);
        assert_eq!(entry_ranks(&n, "P1"), vec![("A".into(), 1)]);
        assert!(n
            .report
            .iter()
            .any(|w| matches!(w, ValidationWarning::RankOutOfRange { .. })));
    }

    #[test]
    fn test_staircase_violation_is_renormalized() {
        // Ranks {2, 3, 3}: no rank 1, so "at least 1 rank ≤ 1" fails.
        let t = table(
            &[("A", 1), ("B", 1), ("C", 1)],
            &[(
                "P1",
                &[RawCell::Rank(2), RawCell::Rank(3), RawCell::Rank(3)],
            )],
        );
        let n = Validator::normalize(&t);
        // 2 → 1 (no smaller), both 3s → 2 (one strictly smaller).
        assert_eq!(
            entry_ranks(&n, "P1"),
            vec![("A".into(), 1), ("B".into(), 2), ("C".into(), 2)]
        );
        assert!(n
            .report
            .iter()
            .any(|w| matches!(w, ValidationWarning::Renormalized { .. })));
    }

    #[test]
    fn test_ties_are_allowed_without_renormalization() {
        // {1, 1, 2} satisfies the staircase property.
        let t = table(
            &[("A", 1), ("B", 1), ("C", 1)],
            &[(
                "P1",
                &[RawCell::Rank(1), RawCell::Rank(1), RawCell::Rank(2)],
            )],
        );
        let n = Validator::normalize(&t);
        assert!(!n
            .report
            .iter()
            .any(|w| matches!(w, ValidationWarning::Renormalized { .. })));
        assert_eq!(
            entry_ranks(&n, "P1"),
            vec![("A".into(), 1), ("B".into(), 1), ("C".into(), 2)]
        );
    }

    #[test]
    fn test_second_fixed_flag_is_demoted() {
        let t = table(
            &[("A", 1), ("B", 1)],
            &[("P1", &[RawCell::Fixed(1), RawCell::Fixed(2)])],
        );
        let n = Validator::normalize(&t);
        let fixed: Vec<_> = n
            .entries
            .iter()
            .map(|(_, c, pref)| (c.as_str().to_string(), pref.is_fixed()))
            .collect();
        assert_eq!(fixed, vec![("A".to_string(), true), ("B".to_string(), false)]);
        assert!(n.report.iter().any(|w| matches!(
            w,
            ValidationWarning::DuplicateFixed { course, .. } if course == &cid("B")
        )));
    }

    #[test]
    fn test_all_forbidden_row_warns_unassignable() {
        let t = table(
            &[("A", 1), ("B", 1)],
            &[("P1", &[RawCell::Forbidden, RawCell::Forbidden])],
        );
        let n = Validator::normalize(&t);
        assert!(n.entries.is_empty());
        assert!(n
            .report
            .iter()
            .any(|w| matches!(w, ValidationWarning::Unassignable { .. })));
    }

    #[test]
    fn test_slot_mismatch_both_directions() {
        let short = table(&[("A", 2)], &[("P1", &[RawCell::Rank(1)])]);
        let n = Validator::normalize(&short);
        assert!(n.report.iter().any(|w| matches!(
            w,
            ValidationWarning::SlotMismatch { people: 1, slots: 2 }
        )));

        let long = table(
            &[("A", 1)],
            &[
                ("P1", &[RawCell::Rank(1)]),
                ("P2", &[RawCell::Rank(1)]),
            ],
        );
        let n = Validator::normalize(&long);
        assert!(n.report.iter().any(|w| matches!(
            w,
            ValidationWarning::SlotMismatch { people: 2, slots: 1 }
        )));
    }

    #[test]
    fn test_fixed_overflow_is_reported() {
        let t = table(
            &[("A", 1), ("B", 1)],
            &[
                ("P1", &[RawCell::Fixed(1), RawCell::Rank(2)]),
                ("P2", &[RawCell::Fixed(1), RawCell::Rank(2)]),
            ],
        );
        let n = Validator::normalize(&t);
        assert!(n.report.iter().any(|w| matches!(
            w,
            ValidationWarning::FixedOverflow { fixed: 2, slots: 1, .. }
        )));
    }

    #[test]
    fn test_fixed_cell_keeps_flag_through_renormalization() {
        // Fixed rank 99 with one course: renormalized to 1, still
        // fixed.
        let t = table(&[("A", 1)], &[("P1", &[RawCell::Fixed(99)])]);
        let n = Validator::normalize(&t);
        assert_eq!(n.entries.len(), 1);
        let (_, _, pref) = &n.entries[0];
        assert!(pref.is_fixed());
        assert_eq!(pref.rank().value(), 1);
    }

    #[test]
    fn test_duplicate_fixed_is_not_counted_as_overflow() {
        // P1's second fixed flag on E is demoted by first-fixed-wins;
        // only P2 is genuinely fixed to E, which matches its one slot,
        // so no overflow may be reported.
        let t = table(
            &[("A", 1), ("E", 1)],
            &[
                ("P1", &[RawCell::Fixed(1), RawCell::Fixed(2)]),
                ("P2", &[RawCell::Rank(2), RawCell::Fixed(1)]),
            ],
        );
        let n = Validator::normalize(&t);
        assert!(n.report.iter().any(|w| matches!(
            w,
            ValidationWarning::DuplicateFixed { course, .. } if course == &cid("E")
        )));
        assert!(
            !n.report
                .iter()
                .any(|w| matches!(w, ValidationWarning::FixedOverflow { .. })),
            "a demoted duplicate fixed flag must not count against the course"
        );
    }
}

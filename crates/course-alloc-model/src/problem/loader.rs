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

use crate::{
    common::{CourseIdentifier, PersonIdentifier},
    problem::{
        builder::ProblemBuilder,
        course::Course,
        err::{BadCellError, LoaderError},
        prob::Problem,
    },
    validation::{RawCell, RawRow, RawTable, ValidationReport, Validator},
};
use std::{
    collections::BTreeSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// A problem together with the validation report its ingestion
/// produced. The report is non-fatal; hosts decide how loudly to
/// surface it.
#[derive(Debug, Clone)]
pub struct LoadedProblem<T> {
    problem: Problem<T>,
    report: ValidationReport<T>,
}

impl<T> LoadedProblem<T> {
    #[inline]
    pub fn problem(&self) -> &Problem<T> {
        &self.problem
    }

    #[inline]
    pub fn report(&self) -> &ValidationReport<T> {
        &self.report
    }

    #[inline]
    pub fn into_parts(self) -> (Problem<T>, ValidationReport<T>) {
        (self.problem, self.report)
    }
}

/// Loader for the tabular preference format:
///
/// ```text
/// Courses,         Algebra, Biology
/// Number of slots, 1,       2
/// Ada,             1,       2
/// Grace,           *1,      2
/// Alan,            -,       1
/// ```
///
/// Row 1 names the courses, row 2 their slot counts. Every following
/// row is one person: a positive integer ranks the course, a `*`
/// prefix additionally fixes the assignment, a leading `-` (or an
/// empty cell) forbids it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemLoader {
    delimiter: char,
}

impl Default for ProblemLoader {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl ProblemLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the cell delimiter (defaults to `,`).
    #[inline]
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn from_text(&self, input: &str) -> Result<LoadedProblem<i64>, LoaderError> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());

        let (_, header) = lines.next().ok_or(LoaderError::Empty)?;
        let header_cells = self.split(header);
        match header_cells.first().map(String::as_str) {
            Some("Courses") => {}
            _ => return Err(LoaderError::MissingCoursesHeader),
        }

        let mut seen_courses = BTreeSet::new();
        let mut course_ids = Vec::with_capacity(header_cells.len().saturating_sub(1));
        for name in &header_cells[1..] {
            let id = CourseIdentifier::named(name);
            if !seen_courses.insert(id.clone()) {
                return Err(LoaderError::DuplicateCourse(id));
            }
            course_ids.push(id);
        }
        let width = header_cells.len();

        let (slot_row_no, slot_line) = lines.next().ok_or(LoaderError::MissingSlotsHeader)?;
        let slot_cells = self.split(slot_line);
        match slot_cells.first().map(String::as_str) {
            Some("Number of slots") => {}
            _ => return Err(LoaderError::MissingSlotsHeader),
        }
        if slot_cells.len() != width {
            return Err(LoaderError::RowWidth {
                row: slot_row_no,
                expected: width,
                found: slot_cells.len(),
            });
        }

        let mut courses = Vec::with_capacity(course_ids.len());
        for (col, token) in slot_cells[1..].iter().enumerate() {
            let slots: u32 = token.parse().map_err(|_| LoaderError::BadSlotCount {
                column: col + 2,
                token: token.clone(),
            })?;
            courses.push((course_ids[col].clone(), slots));
        }

        let mut seen_people = BTreeSet::new();
        let mut rows = Vec::new();
        for (row_no, line) in lines {
            let cells = self.split(line);
            if cells.len() != width {
                return Err(LoaderError::RowWidth {
                    row: row_no,
                    expected: width,
                    found: cells.len(),
                });
            }

            let person = PersonIdentifier::named(&cells[0]);
            if !seen_people.insert(person.clone()) {
                return Err(LoaderError::DuplicatePerson(person));
            }

            let mut parsed = Vec::with_capacity(width - 1);
            for (col, token) in cells[1..].iter().enumerate() {
                parsed.push(parse_cell(token, row_no, col + 2)?);
            }
            rows.push(RawRow {
                person,
                cells: parsed,
            });
        }

        let table = RawTable { courses, rows };
        let normalized = Validator::normalize(&table);

        let mut builder = ProblemBuilder::new();
        for (id, slots) in &table.courses {
            builder.add_course(Course::new(id.clone(), *slots));
        }
        for (person, course, pref) in normalized.entries {
            builder.add_preference(person, course, pref);
        }

        Ok(LoadedProblem {
            problem: builder.build()?,
            report: normalized.report,
        })
    }

    pub fn from_bufread<R: BufRead>(&self, mut reader: R) -> Result<LoadedProblem<i64>, LoaderError> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        self.from_text(&buf)
    }

    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<LoadedProblem<i64>, LoaderError> {
        self.from_bufread(BufReader::new(File::open(path)?))
    }

    #[inline]
    fn split(&self, line: &str) -> Vec<String> {
        line.split(self.delimiter)
            .map(|c| c.trim().to_string())
            .collect()
    }
}

/// Parses one preference cell: `-…`/empty forbids, `*n` fixes at rank
/// `n`, a bare integer ranks.
fn parse_cell(token: &str, row: usize, column: usize) -> Result<RawCell<i64>, LoaderError> {
    if token.is_empty() || token.starts_with('-') {
        return Ok(RawCell::Forbidden);
    }
    if let Some(rest) = token.strip_prefix('*') {
        let rank: i64 = rest
            .trim()
            .parse()
            .map_err(|_| BadCellError::new(row, column, token))?;
        return Ok(RawCell::Fixed(rank));
    }
    let rank: i64 = token
        .parse()
        .map_err(|_| BadCellError::new(row, column, token))?;
    Ok(RawCell::Rank(rank))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationWarning;
    use course_alloc_core::prelude::Rank;

    const WELL_FORMED: &str = "\
Courses, A, B
Number of slots, 1, 1
P1, 1, 2
P2, 2, 1
";

    #[test]
    fn test_loads_well_formed_table() {
        let loaded = ProblemLoader::new().from_text(WELL_FORMED).unwrap();
        assert!(loaded.report().is_clean());

        let p = loaded.problem();
        assert_eq!(p.num_courses(), 2);
        assert_eq!(p.num_people(), 2);
        assert_eq!(p.total_slots(), 2);
        assert_eq!(
            p.preferences()
                .get(
                    &PersonIdentifier::named("P1"),
                    &CourseIdentifier::named("A")
                )
                .map(|pref| pref.rank()),
            Some(Rank::new(1))
        );
    }

    #[test]
    fn test_fixed_and_forbidden_cells() {
        let input = "\
Courses, A, B
Number of slots, 1, 1
P1, *1, 2
P2, -, 1
";
        let loaded = ProblemLoader::new().from_text(input).unwrap();
        let p = loaded.problem();

        let p1_a = p
            .preferences()
            .get(
                &PersonIdentifier::named("P1"),
                &CourseIdentifier::named("A"),
            )
            .copied()
            .unwrap();
        assert!(p1_a.is_fixed());
        assert_eq!(p1_a.rank(), Rank::new(1));

        // Forbidden cells produce no entry at all.
        assert!(p
            .preferences()
            .get(
                &PersonIdentifier::named("P2"),
                &CourseIdentifier::named("A")
            )
            .is_none());
    }

    #[test]
    fn test_empty_cell_is_forbidden() {
        let input = "\
Courses, A, B
Number of slots, 1, 1
P1, 1,
P2, 1, 1
";
        let loaded = ProblemLoader::new().from_text(input).unwrap();
        assert!(loaded
            .problem()
            .preferences()
            .get(
                &PersonIdentifier::named("P1"),
                &CourseIdentifier::named("B")
            )
            .is_none());
    }

    #[test]
    fn test_missing_courses_header_is_rejected() {
        let err = ProblemLoader::new()
            .from_text("Kurse, A\nNumber of slots, 1\n")
            .unwrap_err();
        assert!(matches!(err, LoaderError::MissingCoursesHeader));
    }

    #[test]
    fn test_missing_slots_header_is_rejected() {
        let err = ProblemLoader::new()
            .from_text("Courses, A\nSlots, 1\n")
            .unwrap_err();
        assert!(matches!(err, LoaderError::MissingSlotsHeader));
    }

    #[test]
    fn test_row_width_mismatch_is_rejected() {
        let input = "\
Courses, A, B
Number of slots, 1, 1
P1, 1
";
        let err = ProblemLoader::new().from_text(input).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::RowWidth {
                row: 3,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_bad_cell_reports_position() {
        let input = "\
Courses, A
Number of slots, 1
P1, first
";
        let err = ProblemLoader::new().from_text(input).unwrap_err();
        match err {
            LoaderError::BadCell(e) => {
                assert_eq!(e.row(), 3);
                assert_eq!(e.column(), 2);
                assert_eq!(e.token(), "first");
            }
            other => panic!("expected BadCell, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_slot_count_is_rejected() {
        let err = ProblemLoader::new()
            .from_text("Courses, A\nNumber of slots, many\n")
            .unwrap_err();
        assert!(matches!(err, LoaderError::BadSlotCount { column: 2, .. }));
    }

    #[test]
    fn test_duplicate_person_is_rejected() {
        let input = "\
Courses, A
Number of slots, 2
P1, 1
P1, 1
";
        let err = ProblemLoader::new().from_text(input).unwrap_err();
        assert!(matches!(err, LoaderError::DuplicatePerson(_)));
    }

    #[test]
    fn test_duplicate_course_is_rejected() {
        let err = ProblemLoader::new()
            .from_text("Courses, A, A\nNumber of slots, 1, 1\n")
            .unwrap_err();
        assert!(matches!(err, LoaderError::DuplicateCourse(_)));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            ProblemLoader::new().from_text("   \n \n"),
            Err(LoaderError::Empty)
        ));
    }

    #[test]
    fn test_warnings_flow_through() {
        let input = "\
Courses, A, B
Number of slots, 1, 1
P1, 1, 0
P2, 1, 2
";
        let loaded = ProblemLoader::new().from_text(input).unwrap();
        assert!(loaded
            .report()
            .iter()
            .any(|w| matches!(w, ValidationWarning::RankOutOfRange { .. })));
    }

    #[test]
    fn test_tab_delimiter() {
        let input = "Courses\tA\nNumber of slots\t1\nP1\t1\n";
        let loaded = ProblemLoader::new().delimiter('\t').from_text(input).unwrap();
        assert_eq!(loaded.problem().num_people(), 1);
    }
}

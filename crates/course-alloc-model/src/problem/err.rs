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
use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseNotFoundError {
    person: PersonIdentifier,
    course: CourseIdentifier,
}

impl CourseNotFoundError {
    pub fn new(person: PersonIdentifier, course: CourseIdentifier) -> Self {
        Self { person, course }
    }

    pub fn person(&self) -> &PersonIdentifier {
        &self.person
    }

    pub fn course(&self) -> &CourseIdentifier {
        &self.course
    }
}

impl std::fmt::Display for CourseNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Preference of {} references unknown course {}",
            self.person, self.course
        )
    }
}

impl std::error::Error for CourseNotFoundError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    CourseNotFound(CourseNotFoundError),
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::CourseNotFound(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProblemError {}

impl From<CourseNotFoundError> for ProblemError {
    fn from(err: CourseNotFoundError) -> Self {
        ProblemError::CourseNotFound(err)
    }
}

/// A malformed cell in the preference table, with enough context to
/// point the user at the exact spot in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadCellError {
    row: usize,
    column: usize,
    token: String,
}

impl BadCellError {
    pub fn new(row: usize, column: usize, token: impl Into<String>) -> Self {
        Self {
            row,
            column,
            token: token.into(),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Display for BadCellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell at row {}, column {} is not a rank, fixed rank or forbidden marker: {:?}",
            self.row, self.column, self.token
        )
    }
}

impl std::error::Error for BadCellError {}

#[derive(Debug)]
pub enum LoaderError {
    Io(std::io::Error),
    ParseInt(ParseIntError),
    /// The input has no rows at all.
    Empty,
    /// Row 1 does not start with the literal `Courses` header.
    MissingCoursesHeader,
    /// Row 2 does not start with the literal `Number of slots` header.
    MissingSlotsHeader,
    /// A row has a different number of cells than the header row.
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A slot cell is not a non-negative integer.
    BadSlotCount {
        column: usize,
        token: String,
    },
    BadCell(BadCellError),
    DuplicateCourse(CourseIdentifier),
    DuplicatePerson(PersonIdentifier),
    Problem(ProblemError),
}

impl From<std::io::Error> for LoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseIntError> for LoaderError {
    fn from(e: ParseIntError) -> Self {
        Self::ParseInt(e)
    }
}

impl From<BadCellError> for LoaderError {
    fn from(e: BadCellError) -> Self {
        Self::BadCell(e)
    }
}

impl From<ProblemError> for LoaderError {
    fn from(e: ProblemError) -> Self {
        Self::Problem(e)
    }
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LoaderError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            ParseInt(e) => write!(f, "parse-int error: {e}"),
            Empty => write!(f, "the input contains no rows"),
            MissingCoursesHeader => {
                write!(f, "row 1 must start with the literal header `Courses`")
            }
            MissingSlotsHeader => {
                write!(f, "row 2 must start with the literal header `Number of slots`")
            }
            RowWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} (one per course plus the name column)"
            ),
            BadSlotCount { column, token } => write!(
                f,
                "slot count in column {column} is not a non-negative integer: {token:?}"
            ),
            BadCell(e) => write!(f, "{e}"),
            DuplicateCourse(id) => write!(f, "course {id} appears more than once in the header"),
            DuplicatePerson(id) => write!(f, "person {id} appears more than once"),
            Problem(e) => write!(f, "problem error: {e}"),
        }
    }
}

impl std::error::Error for LoaderError {}

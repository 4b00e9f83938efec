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

use crate::stats::SearchStatistics;
use course_alloc_model::prelude::Solution;

/// Why a solver run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The whole tree was examined and a solution exists; the result
    /// is exactly the set of leximin-optimal assignments.
    OptimalityProven,
    /// The whole tree was examined and no complete assignment exists.
    InfeasibilityProven,
    /// A monitor stopped the run early.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "optimality proven"),
            TerminationReason::InfeasibilityProven => write!(f, "infeasibility proven"),
            TerminationReason::Aborted(reason) => write!(f, "aborted: {reason}"),
        }
    }
}

/// What the run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<T: Copy + Ord> {
    /// Proven leximin-optimal solution set.
    Optimal(Solution<T>),
    /// Best solution set found before an early stop; may be optimal,
    /// but that was not proven.
    Feasible(Solution<T>),
    /// No complete assignment exists.
    Infeasible,
    /// Stopped before any complete assignment was discovered.
    Unknown,
}

impl<T: Copy + Ord> SolverResult<T> {
    #[inline]
    pub fn solution(&self) -> Option<&Solution<T>> {
        match self {
            SolverResult::Optimal(sol) | SolverResult::Feasible(sol) => Some(sol),
            SolverResult::Infeasible | SolverResult::Unknown => None,
        }
    }
}

/// The solver's full answer: result, termination reason and the run's
/// counters.
#[derive(Debug, Clone)]
pub struct SolverOutcome<T: Copy + Ord> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
}

impl<T: Copy + Ord> SolverOutcome<T> {
    #[inline]
    pub fn optimal(solution: Solution<T>, statistics: SearchStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(solution),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn infeasible(statistics: SearchStatistics) -> Self {
        Self {
            result: SolverResult::Infeasible,
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(
        solution: Option<Solution<T>>,
        reason: R,
        statistics: SearchStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        let result = match solution {
            Some(sol) => SolverResult::Feasible(sol),
            None => SolverResult::Unknown,
        };
        Self {
            result,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_alloc_core::prelude::{Distribution, Rank};
    use course_alloc_model::prelude::{
        Assignment, CourseIdentifier, PersonIdentifier, Placement,
    };

    fn solution() -> Solution<i64> {
        let mut a = Assignment::new();
        a.insert(
            PersonIdentifier::named("P1"),
            Placement::new(CourseIdentifier::named("A"), Rank::new(1)),
        );
        Solution::new(Distribution::count([Rank::new(1)]), vec![a])
    }

    #[test]
    fn test_optimal_outcome() {
        let o = SolverOutcome::optimal(solution(), SearchStatistics::default());
        assert!(matches!(o.result(), SolverResult::Optimal(_)));
        assert_eq!(o.termination_reason(), &TerminationReason::OptimalityProven);
        assert!(o.result().solution().is_some());
    }

    #[test]
    fn test_infeasible_outcome() {
        let o = SolverOutcome::<i64>::infeasible(SearchStatistics::default());
        assert!(matches!(o.result(), SolverResult::Infeasible));
        assert!(o.result().solution().is_none());
    }

    #[test]
    fn test_aborted_with_solution_is_feasible() {
        let o = SolverOutcome::aborted(Some(solution()), "time limit", SearchStatistics::default());
        assert!(matches!(o.result(), SolverResult::Feasible(_)));
        match o.termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "time limit"),
            other => panic!("expected Aborted, got {other:?}"),
        }
    }

    #[test]
    fn test_aborted_without_solution_is_unknown() {
        let o = SolverOutcome::<i64>::aborted(None, "stopped", SearchStatistics::default());
        assert!(matches!(o.result(), SolverResult::Unknown));
    }
}
